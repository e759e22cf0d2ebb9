//! # Clipboard Repository Trait
//!
//! テキストのコピー先を抽象化

/// クリップボード
pub trait ClipboardRepository: Send + Sync {
    /// テキストをコピーする
    ///
    /// 失敗してもエラーは返さず、成否のみを返す
    fn copy_text(&self, text: &str) -> bool;
}
