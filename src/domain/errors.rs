//! # Domain Errors
//!
//! 検証・解析・セッション操作の失敗理由

use thiserror::Error;

/// AIレスポンス本文（JSON）の検証エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// JSONとしてパースできない
    #[error("malformed JSON: {0}")]
    MalformedJson(String),

    /// フィールドが存在しない、または型が不正
    #[error("Invalid response: missing or invalid {0}")]
    MissingField(&'static str),
}

/// 画像1枚の解析エラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnalysisError {
    /// 通信エラー、または2xx以外のステータス
    #[error("{0}")]
    RequestFailed(String),

    /// `choices[0].message.content` が見つからない
    #[error("Invalid response format from API")]
    InvalidResponseShape,

    /// モデルの出力が `{title, description, tags}` の形をしていない
    #[error("Failed to parse API response")]
    InvalidContent,
}

/// セッション操作のエラー
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("analysis is already running")]
    AlreadyRunning,

    #[error("Please upload at least one image first")]
    NoImages,
}
