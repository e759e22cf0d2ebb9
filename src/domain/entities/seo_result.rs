//! # SeoResult Value Object
//!
//! AIが生成したSEOメタデータ（検証済み）

use serde::Serialize;

/// SEOメタデータ
///
/// タイトル・説明文・タグの組。`ResultValidator` を通過した値だけが
/// この型になるため、構築後は不変。
///
/// タイトルは60文字以内、説明文は150〜160文字程度がプロンプト上の目安だが、
/// 長さはここでは強制しない。
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SeoResult {
    title: String,
    description: String,
    tags: Vec<String>,
}

impl SeoResult {
    pub(crate) fn new(title: String, description: String, tags: Vec<String>) -> Self {
        Self {
            title,
            description,
            tags,
        }
    }

    /// タイトル
    pub fn title(&self) -> &str {
        &self.title
    }

    /// 説明文
    pub fn description(&self) -> &str {
        &self.description
    }

    /// タグ（レスポンスでの順序を保持）
    pub fn tags(&self) -> &[String] {
        &self.tags
    }
}
