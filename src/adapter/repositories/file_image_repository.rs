//! File Image Repository Implementation
//!
//! ImageRepositoryのファイルシステム実装

use anyhow::{Context, Result};
use async_trait::async_trait;
use log::{info, warn};
use std::fs;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::adapter::openai::encoding::detect_image_mime;
use crate::domain::entities::image_entry::ImageFile;
use crate::domain::repositories::image_repository::{
    ImageRepository, ACCEPTED_MIME_TYPES, RECOMMENDED_MAX_IMAGE_BYTES,
};

/// ファイルシステムベースの画像リポジトリ
///
/// ディレクトリが渡された場合は配下の画像をパス順に列挙する
pub struct FileImageRepository;

impl FileImageRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 拡張子からMIMEタイプを判定する
    fn mime_from_extension(path: &Path) -> Option<&'static str> {
        let ext = path.extension()?.to_str()?.to_lowercase();
        match ext.as_str() {
            "png" => Some("image/png"),
            "jpg" | "jpeg" => Some("image/jpeg"),
            _ => None,
        }
    }

    /// 入力パスを画像ファイルのパスに展開する（内部実装）
    fn expand_paths(paths: &[PathBuf]) -> Vec<PathBuf> {
        let mut files = Vec::new();

        for path in paths {
            let expanded = PathBuf::from(shellexpand::tilde(&path.to_string_lossy()).as_ref());

            if expanded.is_dir() {
                let mut found: Vec<PathBuf> = WalkDir::new(&expanded)
                    .follow_links(true)
                    .into_iter()
                    .filter_map(|e| e.ok())
                    .map(|e| e.into_path())
                    .filter(|p| p.is_file() && Self::mime_from_extension(p).is_some())
                    .collect();
                found.sort();
                info!("Found {} images in {}", found.len(), expanded.display());
                files.extend(found);
            } else {
                files.push(expanded);
            }
        }

        files
    }

    /// 画像1枚を読み込む。PNG/JPEG以外は `None`
    fn load_image(path: &Path) -> Result<Option<ImageFile>> {
        let data =
            fs::read(path).with_context(|| format!("Failed to read image: {}", path.display()))?;

        let mime_type = match Self::mime_from_extension(path).or_else(|| detect_image_mime(&data)) {
            Some(mime) if ACCEPTED_MIME_TYPES.contains(&mime) => mime,
            _ => {
                warn!(
                    "Skipping {}: only PNG and JPEG images are supported",
                    path.display()
                );
                return Ok(None);
            }
        };

        if data.len() > RECOMMENDED_MAX_IMAGE_BYTES {
            warn!(
                "{} is {} bytes, larger than the recommended 5MB per image",
                path.display(),
                data.len()
            );
        }

        Ok(Some(ImageFile::new(
            path.display().to_string(),
            mime_type,
            data,
        )))
    }

    /// 画像を読み込む（同期処理）
    fn load_images_sync(paths: &[PathBuf]) -> Result<Vec<ImageFile>> {
        let mut images = Vec::new();
        for path in Self::expand_paths(paths) {
            if let Some(image) = Self::load_image(&path)? {
                images.push(image);
            }
        }
        Ok(images)
    }
}

#[async_trait]
impl ImageRepository for FileImageRepository {
    async fn load_images(&self, paths: &[PathBuf]) -> Result<Vec<ImageFile>> {
        let paths = paths.to_vec();
        tokio::task::spawn_blocking(move || Self::load_images_sync(&paths))
            .await
            .map_err(|e| anyhow::anyhow!("Failed to spawn blocking task: {}", e))?
    }
}

impl Default for FileImageRepository {
    fn default() -> Self {
        Self::new()
    }
}
