//! # AnalysisRequest Value Object
//!
//! 1枚の画像に対する解析リクエスト（永続化しない）

use super::image_entry::ImageFile;

#[derive(Debug, Clone)]
pub struct AnalysisRequest {
    image: ImageFile,
    custom_prompt: Option<String>,
}

impl AnalysisRequest {
    /// 新しい解析リクエストを作成
    ///
    /// 空白のみのカスタムプロンプトは指定なしとして扱う
    pub fn new(image: ImageFile, custom_prompt: Option<String>) -> Self {
        let custom_prompt = custom_prompt.filter(|p| !p.trim().is_empty());
        Self {
            image,
            custom_prompt,
        }
    }

    pub fn image(&self) -> &ImageFile {
        &self.image
    }

    pub fn custom_prompt(&self) -> Option<&str> {
        self.custom_prompt.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn image() -> ImageFile {
        ImageFile::new("a.jpg", "image/jpeg", vec![0xFF, 0xD8, 0xFF])
    }

    #[test]
    fn test_blank_prompt_is_dropped() {
        assert!(AnalysisRequest::new(image(), Some(String::new()))
            .custom_prompt()
            .is_none());
        assert!(AnalysisRequest::new(image(), Some("  \n".to_string()))
            .custom_prompt()
            .is_none());
    }

    #[test]
    fn test_custom_prompt_kept() {
        let request = AnalysisRequest::new(image(), Some("Write hashtags".to_string()));
        assert_eq!(request.custom_prompt(), Some("Write hashtags"));
        assert_eq!(request.image().name(), "a.jpg");
    }
}
