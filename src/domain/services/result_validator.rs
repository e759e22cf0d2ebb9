//! # Result Validator
//!
//! AIが返したJSON文字列を検証し、`SeoResult` に変換するドメインサービス

use serde_json::Value;

use crate::domain::entities::seo_result::SeoResult;
use crate::domain::errors::ValidationError;

/// レスポンス検証サービス
///
/// 型と存在のみを検証する。タイトル・説明文の長さはプロンプト上の目安であり、
/// ここでは検査しない。
pub struct ResultValidator;

impl ResultValidator {
    /// JSON文字列を検証して `SeoResult` を返す
    ///
    /// # Arguments
    ///
    /// * `raw_json` - モデルが返したメッセージ本文
    ///
    /// # Errors
    ///
    /// - パースできない場合は `MalformedJson`
    /// - `title` / `description` が空でない文字列でない場合は `MissingField`
    /// - `tags` が文字列のみの配列でない場合は `MissingField("tags")`
    ///
    /// # 例
    ///
    /// ```
    /// use seo_optimizer::domain::services::result_validator::ResultValidator;
    ///
    /// let result = ResultValidator::validate(
    ///     r#"{"title":"Retro Sunset Tee","description":"80s vibes.","tags":["retro","sunset"]}"#,
    /// )
    /// .unwrap();
    ///
    /// assert_eq!(result.title(), "Retro Sunset Tee");
    /// assert_eq!(result.tags(), ["retro", "sunset"]);
    /// ```
    pub fn validate(raw_json: &str) -> Result<SeoResult, ValidationError> {
        let value: Value = serde_json::from_str(raw_json)
            .map_err(|e| ValidationError::MalformedJson(e.to_string()))?;

        let title = required_text(&value, "title")?;
        let description = required_text(&value, "description")?;
        let tags = required_string_list(&value, "tags")?;

        Ok(SeoResult::new(title, description, tags))
    }
}

fn required_text(value: &Value, field: &'static str) -> Result<String, ValidationError> {
    match value.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        _ => Err(ValidationError::MissingField(field)),
    }
}

fn required_string_list(value: &Value, field: &'static str) -> Result<Vec<String>, ValidationError> {
    let items = value
        .get(field)
        .and_then(Value::as_array)
        .ok_or(ValidationError::MissingField(field))?;

    items
        .iter()
        .map(|item| {
            item.as_str()
                .map(str::to_string)
                .ok_or(ValidationError::MissingField(field))
        })
        .collect()
}
