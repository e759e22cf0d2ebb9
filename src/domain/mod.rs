//! # Domain Layer
//!
//! このモジュールはビジネスの核心的なルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - 外部依存を持たない（Rust標準ライブラリと最小限の依存のみ）
//! - HTTPやファイルシステムについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ImageEntry, SeoResultなど）
//! - **errors**: ドメインエラー（ValidationError, AnalysisError, SessionError）
//! - **repositories**: 外部協調者のtrait（インターフェース定義のみ）
//! - **services**: Domain Service（検証・プロンプト生成・整形）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
