//! Repository Implementations
//!
//! Domain層のRepositoryトレイトの実装

pub mod file_image_repository;
pub mod openai_image_analyzer;
pub mod system_clipboard;
