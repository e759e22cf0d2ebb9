//! # Prompt Builder
//!
//! モデルに送るテキストプロンプトを組み立てる

/// カスタムプロンプト未指定時に使うプロンプト
pub const DEFAULT_PROMPT: &str = "Generate a JSON response with the following fields for this image:\n{\n  \"title\": \"SEO-optimized title (max 60 chars)\",\n  \"description\": \"Compelling product description (150-160 chars)\",\n  \"tags\": [\"array\", \"of\", \"relevant\", \"keywords\"]\n}";

/// カスタムプロンプトの後ろに付けるJSON形式の指示
pub const JSON_FORMAT_INSTRUCTION: &str = "Format the response as JSON with the following structure:\n{\n  \"title\": \"string (max 60 chars)\",\n  \"description\": \"string (150-160 chars)\",\n  \"tags\": [\"array\", \"of\", \"strings\"]\n}";

/// プロンプト生成サービス
pub struct PromptBuilder;

impl PromptBuilder {
    /// プロンプトを組み立てる
    ///
    /// カスタムプロンプトが空でなければ、その後ろに空行とJSON形式の指示を付ける。
    /// それ以外はデフォルトプロンプトを返す。
    pub fn build(custom_prompt: Option<&str>) -> String {
        match custom_prompt.filter(|p| !p.trim().is_empty()) {
            Some(custom) => format!("{}\n\n{}", custom, JSON_FORMAT_INSTRUCTION),
            None => DEFAULT_PROMPT.to_string(),
        }
    }
}
