//! # Copy Results Use Case
//!
//! 解析結果をテキストに整形してクリップボードへコピーする

use log::{info, warn};
use std::sync::Arc;

use crate::domain::entities::seo_result::SeoResult;
use crate::domain::repositories::clipboard_repository::ClipboardRepository;
use crate::domain::services::result_formatter::ResultFormatter;

/// 結果コピーユースケース
pub struct CopyResultsUseCase<C: ClipboardRepository> {
    clipboard: Arc<C>,
}

impl<C: ClipboardRepository> CopyResultsUseCase<C> {
    pub fn new(clipboard: Arc<C>) -> Self {
        Self { clipboard }
    }

    /// 1件分をコピーする
    pub fn copy_result(&self, result: &SeoResult) -> bool {
        let copied = self.clipboard.copy_text(&ResultFormatter::format_result(result));
        if !copied {
            warn!("Failed to copy result \"{}\"", result.title());
        }
        copied
    }

    /// 全件をコピーする
    ///
    /// 結果が空の場合は何もコピーせず `false` を返す
    pub fn copy_all(&self, results: &[SeoResult]) -> bool {
        if results.is_empty() {
            return false;
        }

        let copied = self.clipboard.copy_text(&ResultFormatter::format_all(results));
        if copied {
            info!("Copied {} results", results.len());
        } else {
            warn!("Failed to copy {} results", results.len());
        }
        copied
    }
}
