//! # Domain Services
//!
//! 特定のエンティティに属さないビジネスルール
//!
//! - **ResultValidator**: AIレスポンス本文の検証
//! - **PromptBuilder**: プロンプトの組み立て
//! - **ResultFormatter**: コピー用・表示用テキストの生成

pub mod prompt_builder;
pub mod result_formatter;
pub mod result_validator;
