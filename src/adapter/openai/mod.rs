//! OpenAI-compatible Chat Completions Adapter
//!
//! Vision対応 Chat Completions API との統合

pub mod client;
pub mod encoding;
pub mod models;
