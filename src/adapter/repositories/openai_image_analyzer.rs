//! OpenAI Image Analyzer
//!
//! ImageAnalyzerのChat Completions API実装

use anyhow::Result;
use async_trait::async_trait;
use log::{debug, error};

use crate::adapter::config::Config;
use crate::adapter::openai::client::{error_chain_to_string, ChatCompletionTransport};
use crate::adapter::openai::encoding::to_data_uri;
use crate::adapter::openai::models::{
    ApiErrorResponse, ChatCompletionRequest, ChatCompletionResponse,
};
use crate::domain::entities::analysis_request::AnalysisRequest;
use crate::domain::entities::seo_result::SeoResult;
use crate::domain::errors::AnalysisError;
use crate::domain::repositories::image_analyzer::ImageAnalyzer;
use crate::domain::services::prompt_builder::PromptBuilder;
use crate::domain::services::result_validator::ResultValidator;

/// APIがエラーメッセージを返さなかった場合のメッセージ
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze image";

/// Chat Completions API を使う画像解析
///
/// 1回の解析につきリクエストは1回。リトライしない。
pub struct OpenAiImageAnalyzer<T: ChatCompletionTransport> {
    transport: T,
    endpoint: String,
    api_key: String,
    model: String,
    temperature: f32,
}

impl<T: ChatCompletionTransport> OpenAiImageAnalyzer<T> {
    /// 新しい解析器を作成
    ///
    /// # Errors
    ///
    /// APIキーが設定されていない場合にエラーを返す
    pub fn new(transport: T, config: &Config) -> Result<Self> {
        let api_key = config.require_api_key()?.to_string();
        Ok(Self {
            transport,
            endpoint: config.chat_completions_url(),
            api_key,
            model: config.model.clone(),
            temperature: config.temperature,
        })
    }

    fn build_request(&self, request: &AnalysisRequest) -> ChatCompletionRequest {
        ChatCompletionRequest::vision(
            &self.model,
            PromptBuilder::build(request.custom_prompt()),
            to_data_uri(request.image()),
            self.temperature,
        )
    }
}

#[async_trait]
impl<T: ChatCompletionTransport> ImageAnalyzer for OpenAiImageAnalyzer<T> {
    async fn analyze(&self, request: &AnalysisRequest) -> Result<SeoResult, AnalysisError> {
        let body = self.build_request(request);
        debug!(
            "Sending {} ({} bytes) to {}",
            request.image().name(),
            request.image().size(),
            self.endpoint
        );

        let reply = self
            .transport
            .post(&self.endpoint, &self.api_key, &body)
            .await
            .map_err(|e| {
                let message = error_chain_to_string(&e);
                error!("Error analyzing image: {}", message);
                AnalysisError::RequestFailed(message)
            })?;

        if !reply.is_success() {
            error!("API Error ({}): {}", reply.status, reply.body);
            let message = ApiErrorResponse::message_from_body(&reply.body)
                .unwrap_or_else(|| GENERIC_FAILURE_MESSAGE.to_string());
            return Err(AnalysisError::RequestFailed(message));
        }

        let response: ChatCompletionResponse = serde_json::from_str(&reply.body).map_err(|e| {
            error!("Invalid API Response: {} ({})", reply.body, e);
            AnalysisError::InvalidResponseShape
        })?;

        let content = response.first_content().ok_or_else(|| {
            error!("Invalid API Response: {}", reply.body);
            AnalysisError::InvalidResponseShape
        })?;

        ResultValidator::validate(content).map_err(|e| {
            error!("Parse Error: {}\nAPI Response: {}", e, content);
            AnalysisError::InvalidContent
        })
    }
}
