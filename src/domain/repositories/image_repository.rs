//! # Image Repository Trait
//!
//! アップロードする画像の受け付けを抽象化

use anyhow::Result;
use async_trait::async_trait;
use std::path::PathBuf;

use crate::domain::entities::image_entry::ImageFile;

/// 受け付けるMIMEタイプ
pub const ACCEPTED_MIME_TYPES: [&str; 2] = ["image/png", "image/jpeg"];

/// 1枚あたりの推奨上限（5MB）。超えても受け付けるが警告する
pub const RECOMMENDED_MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// 画像リポジトリ
///
/// PNG / JPEG のみを受け付けた状態で画像を返す
#[async_trait]
pub trait ImageRepository: Send + Sync {
    /// 画像を読み込む
    ///
    /// # Arguments
    ///
    /// * `paths` - 画像ファイルまたはディレクトリのパス
    ///
    /// # Returns
    ///
    /// 受け付けた画像（入力順）
    async fn load_images(&self, paths: &[PathBuf]) -> Result<Vec<ImageFile>>;
}
