//! Chat Completions Client Abstractions
//!
//! HTTP送信の抽象化と reqwest による実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

#[cfg(test)]
use mockall::automock;

use super::models::ChatCompletionRequest;

/// HTTPレスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpReply {
    pub status: u16,
    pub body: String,
}

impl HttpReply {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    #[inline]
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Trait for posting chat completion requests
/// This enables mocking in tests while using the real client in production
#[cfg_attr(test, automock)]
#[async_trait]
pub trait ChatCompletionTransport: Send + Sync {
    /// Send the request with bearer authorization and return the raw reply.
    /// Non-2xx statuses are returned as replies, not errors.
    async fn post(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<HttpReply>;
}

/// reqwest-backed transport
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// `timeout` が `None` ならクライアント側のタイムアウトは設定しない
    pub fn new(timeout: Option<Duration>) -> Result<Self> {
        let mut builder = Client::builder().tcp_nodelay(true);
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().context("Failed to create HTTP client")?;
        Ok(Self { client })
    }
}

#[async_trait]
impl ChatCompletionTransport for ReqwestTransport {
    async fn post(
        &self,
        url: &str,
        api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<HttpReply> {
        let response = self
            .client
            .post(url)
            .bearer_auth(api_key)
            .json(request)
            .send()
            .await
            .context("Chat completion request failed")?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .context("Failed to read chat completion response")?;

        Ok(HttpReply { status, body })
    }
}

/// Convert error chain to string including all causes
pub fn error_chain_to_string(e: &anyhow::Error) -> String {
    e.chain()
        .map(|cause| cause.to_string())
        .collect::<Vec<_>>()
        .join(" | ")
}
