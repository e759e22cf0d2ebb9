//! # SEO Optimizer
//!
//! 商品画像からVision対応の言語モデルAPIでSEO用のタイトル・説明文・タグを生成するツール
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: エンティティ、レスポンス検証、プロンプト生成（外部依存なし）
//! - **Application層**: アップロードセッションと逐次解析（ユースケース）
//! - **Adapter層**: 外部システムとの統合（Chat Completions API, ファイルシステム, クリップボード）
//! - **Driver層**: CLI、依存性注入

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;
