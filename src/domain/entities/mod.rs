//! # Domain Entities
//!
//! ビジネスエンティティとバリューオブジェクトを定義するモジュール
//!
//! ## エンティティ
//!
//! - **ImageEntry**: アップロードされた画像と解析結果
//! - **ImageFile**: 画像データのバリューオブジェクト
//! - **SeoResult**: 検証済みのSEOメタデータ
//! - **AnalysisRequest**: 1回の解析リクエスト

pub mod analysis_request;
pub mod image_entry;
pub mod seo_result;
