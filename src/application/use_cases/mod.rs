//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **UploadSession**: 画像の追加・削除と逐次解析
//! - **CopyResultsUseCase**: 結果のクリップボードへのコピー

pub mod copy_results;
pub mod upload_session;
