//! System Clipboard
//!
//! ClipboardRepositoryの実装。システムのクリップボードが使えない環境
//! （SSH, ヘッドレス等）ではテキストファイルに書き出す
//!
//! X11/Wayland ではクリップボードの内容はプロセス終了とともに消えるため、
//! Linux ではシステムのクリップボードに加えて常にファイルにも書き出す

use log::{debug, info, warn};
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::repositories::clipboard_repository::ClipboardRepository;

/// プロセス終了後もシステムのクリップボードに内容が残るか
const SYSTEM_CLIPBOARD_OUTLIVES_PROCESS: bool = !cfg!(target_os = "linux");

pub struct SystemClipboard {
    fallback_path: PathBuf,
}

impl SystemClipboard {
    /// # Arguments
    ///
    /// * `fallback_path` - クリップボードが使えない場合の書き出し先
    pub fn new(fallback_path: impl AsRef<Path>) -> Self {
        let expanded = shellexpand::tilde(&fallback_path.as_ref().to_string_lossy()).to_string();
        Self {
            fallback_path: PathBuf::from(expanded),
        }
    }

    pub fn fallback_path(&self) -> &Path {
        &self.fallback_path
    }

    fn copy_to_system(text: &str) -> Result<(), arboard::Error> {
        let mut clipboard = arboard::Clipboard::new()?;
        clipboard.set_text(text)
    }

    /// システムのクリップボードへのコピー結果を受けて、必要ならファイルに書き出す
    fn deliver(&self, text: &str, system: Result<(), arboard::Error>) -> bool {
        match system {
            Ok(()) if SYSTEM_CLIPBOARD_OUTLIVES_PROCESS => true,
            Ok(()) => {
                debug!(
                    "Clipboard contents do not outlive this process, also writing {}",
                    self.fallback_path.display()
                );
                self.write_fallback(text)
            }
            Err(e) => {
                warn!("Clipboard not available: {}", e);
                self.write_fallback(text)
            }
        }
    }

    /// ファイルへの書き出し（同期処理）
    fn write_fallback(&self, text: &str) -> bool {
        if let Some(parent) = self.fallback_path.parent() {
            if !parent.as_os_str().is_empty() && fs::create_dir_all(parent).is_err() {
                return false;
            }
        }

        match fs::write(&self.fallback_path, text) {
            Ok(()) => {
                info!("Wrote results to {}", self.fallback_path.display());
                true
            }
            Err(e) => {
                warn!(
                    "Fallback: unable to write {}: {}",
                    self.fallback_path.display(),
                    e
                );
                false
            }
        }
    }
}

impl ClipboardRepository for SystemClipboard {
    fn copy_text(&self, text: &str) -> bool {
        self.deliver(text, Self::copy_to_system(text))
    }
}
