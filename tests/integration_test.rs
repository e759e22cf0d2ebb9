//! Integration tests for seo-optimizer
//!
//! These tests verify end-to-end functionality through the public API.
//! The live API test requires OPENAI_API_KEY to run.

use anyhow::Result;
use async_trait::async_trait;
use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use seo_optimizer::adapter::config::Config;
use seo_optimizer::adapter::openai::client::{ChatCompletionTransport, HttpReply};
use seo_optimizer::adapter::openai::models::ChatCompletionRequest;
use seo_optimizer::adapter::repositories::openai_image_analyzer::OpenAiImageAnalyzer;
use seo_optimizer::application::use_cases::upload_session::UploadSession;
use seo_optimizer::domain::entities::image_entry::{EntryStatus, ImageFile};
use seo_optimizer::domain::errors::{AnalysisError, SessionError, ValidationError};
use seo_optimizer::domain::services::result_validator::ResultValidator;

/// Get the path to test fixtures
fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
}

fn read_fixture(name: &str) -> String {
    fs::read_to_string(fixtures_path().join(name))
        .unwrap_or_else(|e| panic!("Failed to read {}: {}", name, e))
}

/// 用意した応答を順番に返すトランスポート
#[derive(Clone)]
struct ScriptedTransport {
    replies: Arc<Mutex<VecDeque<Result<HttpReply>>>>,
    requests: Arc<Mutex<Vec<ChatCompletionRequest>>>,
}

impl ScriptedTransport {
    fn new(replies: Vec<Result<HttpReply>>) -> Self {
        Self {
            replies: Arc::new(Mutex::new(replies.into())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[async_trait]
impl ChatCompletionTransport for ScriptedTransport {
    async fn post(
        &self,
        _url: &str,
        _api_key: &str,
        request: &ChatCompletionRequest,
    ) -> Result<HttpReply> {
        self.requests.lock().unwrap().push(request.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Err(anyhow::anyhow!("no scripted reply left")))
    }
}

fn test_config() -> Config {
    Config {
        api_key: Some("sk-test".to_string()),
        ..Config::default()
    }
}

fn image(name: &str) -> ImageFile {
    ImageFile::new(name, "image/png", vec![0x89, 0x50, 0x4E, 0x47])
}

fn session_with(
    replies: Vec<Result<HttpReply>>,
) -> (
    UploadSession<OpenAiImageAnalyzer<ScriptedTransport>>,
    ScriptedTransport,
) {
    let transport = ScriptedTransport::new(replies);
    let analyzer = OpenAiImageAnalyzer::new(transport.clone(), &test_config()).unwrap();
    (UploadSession::new(Arc::new(analyzer)), transport)
}

#[test]
fn test_fixture_files_exist() {
    assert!(fixtures_path().join("chat_completion.json").exists());
    assert!(fixtures_path().join("api_error.json").exists());
}

#[test]
fn test_validator_accepts_well_formed_results() {
    let payloads = [
        r#"{"title":"A","description":"B","tags":[]}"#,
        r#"{"title":"Linen Apron","description":"Stonewashed linen.","tags":["apron","linen","kitchen"]}"#,
        r#"{"tags":["z","a"],"description":"d","title":"t","extra":42}"#,
    ];

    for payload in payloads {
        let value: serde_json::Value = serde_json::from_str(payload).unwrap();
        let result = ResultValidator::validate(payload).unwrap();

        assert_eq!(result.title(), value["title"].as_str().unwrap());
        assert_eq!(result.description(), value["description"].as_str().unwrap());
        let tags: Vec<&str> = value["tags"]
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t.as_str().unwrap())
            .collect();
        assert_eq!(result.tags(), tags.as_slice());
    }
}

#[test]
fn test_validator_rejects_each_missing_field() {
    let cases = [
        (r#"{"description":"d","tags":[]}"#, "title"),
        (r#"{"title":"","description":"d","tags":[]}"#, "title"),
        (r#"{"title":"t","tags":[]}"#, "description"),
        (r#"{"title":"t","description":"d"}"#, "tags"),
        (r#"{"title":"t","description":"d","tags":"a, b"}"#, "tags"),
        (r#"{"title":"t","description":"d","tags":["a",1]}"#, "tags"),
    ];

    for (payload, field) in cases {
        assert_eq!(
            ResultValidator::validate(payload),
            Err(ValidationError::MissingField(field)),
            "payload: {}",
            payload
        );
    }
}

#[test]
fn test_validator_rejects_malformed_json() {
    for payload in ["", "{title:", "Sure! Here is your JSON"] {
        assert!(matches!(
            ResultValidator::validate(payload),
            Err(ValidationError::MalformedJson(_))
        ));
    }
}

#[tokio::test]
async fn test_fixture_response_through_session() {
    let reply = HttpReply::new(200, read_fixture("chat_completion.json"));
    let (session, transport) = session_with(vec![Ok(reply)]);
    let ids = session.add_images(vec![image("mug.png")]);

    let summary = session.run_analysis().await.unwrap();

    assert!(summary.is_success());
    assert_eq!(summary.analyzed_count, 1);
    assert_eq!(transport.request_count(), 1);

    let entry = session.entry(ids[0]).unwrap();
    assert_eq!(entry.status(), EntryStatus::Completed);
    let result = entry.result().unwrap();
    assert_eq!(result.title(), "Handmade Ceramic Coffee Mug - Speckled Blue");
    assert_eq!(
        result.tags(),
        ["ceramic mug", "handmade", "coffee cup", "pottery", "gift"]
    );
}

#[tokio::test]
async fn test_failed_item_does_not_stop_the_pass() {
    let ok = || Ok(HttpReply::new(200, read_fixture("chat_completion.json")));
    let (session, transport) = session_with(vec![
        ok(),
        Ok(HttpReply::new(429, read_fixture("api_error.json"))),
        ok(),
    ]);
    let ids = session.add_images(vec![image("1.png"), image("2.png"), image("3.png")]);

    let summary = session.run_analysis().await.unwrap();

    assert_eq!(transport.request_count(), 3);
    assert_eq!(summary.analyzed_count, 2);
    assert_eq!(summary.failed_count(), 1);
    assert_eq!(summary.failures[0].position, 2);
    assert_eq!(
        summary.failures[0].error,
        AnalysisError::RequestFailed(
            "Rate limit reached for gpt-4o in organization org-test on tokens per min.".to_string()
        )
    );

    assert!(session.entry(ids[0]).unwrap().result().is_some());
    assert!(session.entry(ids[1]).unwrap().is_pending());
    assert!(session.entry(ids[2]).unwrap().result().is_some());
    assert!(!session.is_busy());
}

#[tokio::test]
async fn test_second_pass_only_retries_pending() {
    let (session, transport) = session_with(vec![
        Ok(HttpReply::new(200, read_fixture("chat_completion.json"))),
        Err(anyhow::anyhow!("Connection reset by peer")),
        Ok(HttpReply::new(200, read_fixture("chat_completion.json"))),
    ]);
    let ids = session.add_images(vec![image("1.png"), image("2.png")]);

    let first = session.run_analysis().await.unwrap();
    assert_eq!(first.failed_count(), 1);
    assert_eq!(session.pending_count(), 1);

    let second = session.run_analysis().await.unwrap();

    assert!(second.is_success());
    assert_eq!(second.analyzed_count, 1);
    assert_eq!(transport.request_count(), 3);
    assert_eq!(session.pending_count(), 0);
    assert!(session.entry(ids[1]).unwrap().last_error().is_none());
}

#[tokio::test]
async fn test_empty_session_makes_no_requests() {
    let (session, transport) = session_with(vec![]);

    let result = session.run_analysis().await;

    assert_eq!(result.unwrap_err(), SessionError::NoImages);
    assert_eq!(transport.request_count(), 0);
}

#[tokio::test]
async fn test_remove_keeps_order_of_others() {
    let (session, _transport) = session_with(vec![]);
    let ids = session.add_images(vec![image("a.png"), image("b.png"), image("c.png")]);

    assert!(session.remove_image(ids[1]));
    assert!(!session.remove_image(ids[1]));

    let names: Vec<String> = session
        .entries()
        .iter()
        .map(|e| e.image().name().to_string())
        .collect();
    assert_eq!(names, vec!["a.png", "c.png"]);
}

/// Integration test that calls the real API
/// Run with: OPENAI_API_KEY=... cargo test --test integration_test -- --ignored
#[tokio::test]
#[ignore]
async fn test_live_api_analysis() {
    use seo_optimizer::adapter::openai::client::ReqwestTransport;

    let config = Config::default().with_env_overrides(|key| std::env::var(key).ok());
    if config.require_api_key().is_err() {
        eprintln!("Skipping test: OPENAI_API_KEY not set");
        return;
    }

    // 1x1 の透過PNG
    let png: Vec<u8> = vec![
        0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
        0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
        0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
        0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
        0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
    ];

    let transport = ReqwestTransport::new(config.timeout()).unwrap();
    let analyzer = OpenAiImageAnalyzer::new(transport, &config).unwrap();
    let session = UploadSession::new(Arc::new(analyzer));
    session.add_images(vec![ImageFile::new("pixel.png", "image/png", png)]);

    let summary = session.run_analysis().await.unwrap();

    assert_eq!(summary.analyzed_count + summary.failed_count(), 1);
}
