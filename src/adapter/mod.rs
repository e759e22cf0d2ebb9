//! Adapter Layer
//!
//! 外部システム（Chat Completions API, ファイルシステム, クリップボード）との統合

pub mod config;
pub mod openai;
pub mod repositories;
