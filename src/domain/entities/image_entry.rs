//! # ImageEntry Entity
//!
//! アップロードされた画像1枚と、その解析状態を表すエンティティ

use std::fmt;
use std::sync::Arc;
use uuid::Uuid;

use super::seo_result::SeoResult;
use crate::domain::errors::AnalysisError;

/// 画像エントリの識別子
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageId(Uuid);

impl ImageId {
    /// 新しいランダムな識別子を生成
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ImageId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// 画像データ
///
/// バイト列は `Arc` で共有されるため、clone は安価。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageFile {
    name: String,
    mime_type: String,
    data: Arc<[u8]>,
}

impl ImageFile {
    /// 新しい画像データを作成
    ///
    /// # Arguments
    ///
    /// * `name` - 表示用のファイル名またはパス
    /// * `mime_type` - MIMEタイプ（例: "image/png"）
    /// * `data` - 画像のバイト列
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            data: data.into(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mime_type(&self) -> &str {
        &self.mime_type
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// バイト数
    #[inline]
    pub fn size(&self) -> usize {
        self.data.len()
    }
}

/// エントリの状態
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryStatus {
    /// 結果がまだない（未解析、または前回の解析が失敗）
    Pending,
    /// 結果あり。以降のパスでは再解析されない
    Completed,
}

/// 画像エントリ
///
/// `UploadSession` が排他的に所有する。エントリを破棄するとプレビューも
/// 画像データも解放される。
#[derive(Debug, Clone)]
pub struct ImageEntry {
    id: ImageId,
    image: ImageFile,
    preview: String,
    result: Option<SeoResult>,
    last_error: Option<AnalysisError>,
}

impl ImageEntry {
    /// 受け付けた画像から未解析のエントリを作成
    pub fn new(image: ImageFile) -> Self {
        let preview = image.name().to_string();
        Self {
            id: ImageId::new(),
            image,
            preview,
            result: None,
            last_error: None,
        }
    }

    pub fn id(&self) -> ImageId {
        self.id
    }

    pub fn image(&self) -> &ImageFile {
        &self.image
    }

    /// プレビュー表示用のハンドル
    pub fn preview(&self) -> &str {
        &self.preview
    }

    pub fn result(&self) -> Option<&SeoResult> {
        self.result.as_ref()
    }

    /// 直近の解析失敗の理由
    pub fn last_error(&self) -> Option<&AnalysisError> {
        self.last_error.as_ref()
    }

    pub fn status(&self) -> EntryStatus {
        if self.result.is_some() {
            EntryStatus::Completed
        } else {
            EntryStatus::Pending
        }
    }

    #[inline]
    pub fn is_pending(&self) -> bool {
        self.status() == EntryStatus::Pending
    }

    /// 解析結果を書き込む。以前の失敗理由はクリアされる
    pub(crate) fn complete(&mut self, result: SeoResult) {
        self.result = Some(result);
        self.last_error = None;
    }

    /// 解析失敗を記録する。既存の結果は上書きしない
    pub(crate) fn record_failure(&mut self, error: AnalysisError) {
        self.last_error = Some(error);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_image(name: &str) -> ImageFile {
        ImageFile::new(name, "image/png", vec![0x89, 0x50, 0x4E, 0x47])
    }

    #[test]
    fn test_new_entry_is_pending() {
        let entry = ImageEntry::new(create_test_image("shirt.png"));

        assert_eq!(entry.status(), EntryStatus::Pending);
        assert!(entry.result().is_none());
        assert!(entry.last_error().is_none());
        assert_eq!(entry.preview(), "shirt.png");
    }

    #[test]
    fn test_ids_are_unique() {
        let a = ImageEntry::new(create_test_image("a.png"));
        let b = ImageEntry::new(create_test_image("a.png"));

        assert_ne!(a.id(), b.id());
    }

    #[test]
    fn test_complete_clears_error() {
        let mut entry = ImageEntry::new(create_test_image("mug.png"));
        entry.record_failure(AnalysisError::InvalidResponseShape);
        assert!(entry.is_pending());

        entry.complete(SeoResult::new("T".to_string(), "D".to_string(), vec![]));

        assert_eq!(entry.status(), EntryStatus::Completed);
        assert!(entry.last_error().is_none());
    }

    #[test]
    fn test_failure_keeps_existing_result() {
        let mut entry = ImageEntry::new(create_test_image("mug.png"));
        entry.complete(SeoResult::new("T".to_string(), "D".to_string(), vec![]));

        entry.record_failure(AnalysisError::InvalidContent);

        assert_eq!(entry.result().map(|r| r.title()), Some("T"));
        assert_eq!(entry.last_error(), Some(&AnalysisError::InvalidContent));
    }

    #[test]
    fn test_image_file_clone_shares_data() {
        let image = create_test_image("poster.png");
        let cloned = image.clone();

        assert_eq!(image, cloned);
        assert_eq!(cloned.size(), 4);
        assert_eq!(cloned.mime_type(), "image/png");
    }
}
