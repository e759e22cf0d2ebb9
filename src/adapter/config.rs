//! Configuration
//!
//! 設定ファイル（JSON、省略可）と環境変数から設定を読み込む

use anyhow::{bail, Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const API_KEY_ENV: &str = "OPENAI_API_KEY";
pub const BASE_URL_ENV: &str = "OPENAI_BASE_URL";
pub const MODEL_ENV: &str = "OPENAI_MODEL";

fn default_base_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.7
}

fn default_copy_fallback_path() -> String {
    "./seo-results.txt".to_string()
}

#[derive(Clone, Deserialize, Serialize)]
pub struct Config {
    /// APIキー。設定ファイルには書かず環境変数で渡すことを推奨
    #[serde(default, skip_serializing)]
    pub api_key: Option<String>,

    /// APIのベースURL。認証付きプロキシを指すこともできる
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_temperature")]
    pub temperature: f32,

    /// HTTPタイムアウト（秒）。未指定ならクライアント側のタイムアウトなし
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// クリップボードが使えない場合の書き出し先
    #[serde(default = "default_copy_fallback_path")]
    pub copy_fallback_path: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            timeout_secs: None,
            copy_fallback_path: default_copy_fallback_path(),
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .field("timeout_secs", &self.timeout_secs)
            .field("copy_fallback_path", &self.copy_fallback_path)
            .finish()
    }
}

impl Config {
    /// 設定を読み込む
    ///
    /// ファイルが存在しなければデフォルト値を使う。その後、環境変数で上書きする。
    pub fn load(path: &str) -> Result<Self> {
        let expanded = shellexpand::tilde(path).to_string();
        let config = if Path::new(&expanded).exists() {
            let content = fs::read_to_string(&expanded)
                .with_context(|| format!("Failed to read config file: {}", expanded))?;
            Self::from_json(&content)
                .with_context(|| format!("Failed to parse config file: {}", expanded))?
        } else {
            info!("No config file at {}, using defaults", expanded);
            Self::default()
        };

        Ok(config.with_env_overrides(|key| std::env::var(key).ok()))
    }

    pub fn from_json(content: &str) -> Result<Self> {
        Ok(serde_json::from_str(content)?)
    }

    /// 環境変数による上書き
    ///
    /// 空文字列の値は無視する
    pub fn with_env_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        let lookup = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(key) = lookup(API_KEY_ENV) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV) {
            self.base_url = url;
        }
        if let Some(model) = lookup(MODEL_ENV) {
            self.model = model;
        }
        self
    }

    /// APIキーを返す。未設定ならエラー
    pub fn require_api_key(&self) -> Result<&str> {
        match self.api_key.as_deref().map(str::trim) {
            Some(key) if !key.is_empty() => Ok(key),
            _ => bail!("{} is not set", API_KEY_ENV),
        }
    }

    /// Chat Completions エンドポイントのURL
    pub fn chat_completions_url(&self) -> String {
        format!("{}/v1/chat/completions", self.base_url.trim_end_matches('/'))
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout_secs.map(Duration::from_secs)
    }
}
