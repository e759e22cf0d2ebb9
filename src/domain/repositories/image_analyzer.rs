//! # Image Analyzer Trait
//!
//! 画像1枚をSEOメタデータに変換する外部解析の抽象化

use async_trait::async_trait;

use crate::domain::entities::analysis_request::AnalysisRequest;
use crate::domain::entities::seo_result::SeoResult;
use crate::domain::errors::AnalysisError;

/// 画像解析
///
/// 1回の呼び出しにつき外部リクエストはちょうど1回。リトライはしない。
#[async_trait]
pub trait ImageAnalyzer: Send + Sync {
    /// 画像を解析する
    ///
    /// # Arguments
    ///
    /// * `request` - 画像とカスタムプロンプト
    ///
    /// # Errors
    ///
    /// 通信・レスポンス形式・本文検証のいずれかに失敗した場合に `AnalysisError` を返す
    async fn analyze(&self, request: &AnalysisRequest) -> Result<SeoResult, AnalysisError>;
}
