//! # Analysis Summary DTO
//!
//! 解析パス1回分の結果のData Transfer Object

use crate::domain::entities::image_entry::ImageId;
use crate::domain::errors::AnalysisError;

/// 失敗した画像1枚分の情報
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFailure {
    /// エントリの識別子
    pub id: ImageId,
    /// パス開始時点でのセッション内の位置（1始まり）
    pub position: usize,
    /// 失敗理由
    pub error: AnalysisError,
}

/// 解析パスのサマリー
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnalysisSummary {
    /// 結果を書き込めた画像の数
    pub analyzed_count: usize,
    /// パス中に削除されたため処理しなかった画像の数
    pub skipped_count: usize,
    /// 失敗した画像
    pub failures: Vec<ItemFailure>,
}

impl AnalysisSummary {
    /// 失敗がなかったかチェックします。
    ///
    /// # 例
    ///
    /// ```
    /// use seo_optimizer::application::dto::analysis_summary::AnalysisSummary;
    ///
    /// let summary = AnalysisSummary {
    ///     analyzed_count: 3,
    ///     ..Default::default()
    /// };
    /// assert!(summary.is_success());
    /// assert_eq!(summary.failed_count(), 0);
    /// ```
    pub fn is_success(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_count(&self) -> usize {
        self.failures.len()
    }
}
