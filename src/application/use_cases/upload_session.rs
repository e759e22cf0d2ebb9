//! # Upload Session Use Case
//!
//! アップロードされた画像の一覧を保持し、未解析の画像を1枚ずつ順番に解析する

use log::{debug, error, info, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::application::dto::analysis_summary::{AnalysisSummary, ItemFailure};
use crate::domain::entities::analysis_request::AnalysisRequest;
use crate::domain::entities::image_entry::{ImageEntry, ImageFile, ImageId};
use crate::domain::entities::seo_result::SeoResult;
use crate::domain::errors::{AnalysisError, SessionError};
use crate::domain::repositories::image_analyzer::ImageAnalyzer;

#[derive(Debug, Default)]
struct SessionState {
    entries: Vec<ImageEntry>,
    custom_prompt: String,
    show_table: bool,
}

/// `busy` フラグを保持するガード。drop時に解放する
struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    fn acquire(flag: &'a AtomicBool) -> Option<Self> {
        flag.compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}

/// アップロードセッション
///
/// 画像エントリの順序付きリストを所有する。解析パスは同時に1つだけ実行でき、
/// 画像は常に1枚ずつ順番に解析される。画像の追加・削除は各画像の解析の
/// 合間に割り込める。
pub struct UploadSession<A: ImageAnalyzer> {
    analyzer: Arc<A>,
    state: Mutex<SessionState>,
    busy: AtomicBool,
}

impl<A: ImageAnalyzer> UploadSession<A> {
    /// 新しいセッションを作成
    ///
    /// # Arguments
    ///
    /// * `analyzer` - 画像解析の実装
    pub fn new(analyzer: Arc<A>) -> Self {
        Self {
            analyzer,
            state: Mutex::new(SessionState::default()),
            busy: AtomicBool::new(false),
        }
    }

    fn state(&self) -> MutexGuard<'_, SessionState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// 画像を末尾に追加する
    ///
    /// 重複排除はしない。追加順が保持される。
    ///
    /// # Returns
    ///
    /// 追加したエントリの識別子（入力順）
    pub fn add_images(&self, files: Vec<ImageFile>) -> Vec<ImageId> {
        let mut state = self.state();
        let ids = files
            .into_iter()
            .map(|file| {
                let entry = ImageEntry::new(file);
                let id = entry.id();
                state.entries.push(entry);
                id
            })
            .collect::<Vec<_>>();

        debug!(
            "Added {} images ({} total)",
            ids.len(),
            state.entries.len()
        );
        ids
    }

    /// 画像を削除する
    ///
    /// 該当するエントリがなければ何もしない
    ///
    /// # Returns
    ///
    /// 削除した場合は `true`
    pub fn remove_image(&self, id: ImageId) -> bool {
        let mut state = self.state();
        let before = state.entries.len();
        state.entries.retain(|entry| entry.id() != id);
        let removed = state.entries.len() != before;

        if removed {
            debug!("Removed image {}", id);
        }
        removed
    }

    /// カスタムプロンプトを設定する（空文字列でデフォルトに戻る）
    pub fn set_custom_prompt(&self, prompt: impl Into<String>) {
        self.state().custom_prompt = prompt.into();
    }

    pub fn custom_prompt(&self) -> String {
        self.state().custom_prompt.clone()
    }

    /// 解析パスの実行中かどうか
    pub fn is_busy(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// エントリのスナップショット
    pub fn entries(&self) -> Vec<ImageEntry> {
        self.state().entries.clone()
    }

    pub fn entry(&self, id: ImageId) -> Option<ImageEntry> {
        self.state().entries.iter().find(|e| e.id() == id).cloned()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.state().entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.state().entries.is_empty()
    }

    /// 結果がまだないエントリの数
    pub fn pending_count(&self) -> usize {
        self.state().entries.iter().filter(|e| e.is_pending()).count()
    }

    /// 結果を持つエントリの結果一覧（エントリ順）
    pub fn completed_results(&self) -> Vec<SeoResult> {
        self.state()
            .entries
            .iter()
            .filter_map(|e| e.result().cloned())
            .collect()
    }

    pub fn has_results(&self) -> bool {
        self.state().entries.iter().any(|e| e.result().is_some())
    }

    /// テーブル表示を切り替える
    ///
    /// # Returns
    ///
    /// 切り替え後の表示状態
    pub fn toggle_table(&self) -> bool {
        let mut state = self.state();
        state.show_table = !state.show_table;
        state.show_table
    }

    /// テーブルを表示すべきかどうか（結果が1件以上ある場合のみ）
    pub fn is_table_visible(&self) -> bool {
        let state = self.state();
        state.show_table && state.entries.iter().any(|e| e.result().is_some())
    }

    /// 未解析の画像を順番に解析する
    ///
    /// パス開始時点で結果を持たないエントリが対象。1枚の失敗は他の画像の
    /// 処理を止めない。結果は位置ではなく識別子でエントリに書き戻すため、
    /// パス中に削除されたエントリの結果は破棄される。パス中に追加された
    /// エントリは次のパスで処理される。
    ///
    /// # Errors
    ///
    /// - 別のパスが実行中の場合は `AlreadyRunning`
    /// - エントリが1つもない場合は `NoImages`（リクエストは発行しない）
    pub async fn run_analysis(&self) -> Result<AnalysisSummary, SessionError> {
        let _busy = BusyGuard::acquire(&self.busy).ok_or(SessionError::AlreadyRunning)?;

        let (pending, custom_prompt, total) = {
            let state = self.state();
            if state.entries.is_empty() {
                return Err(SessionError::NoImages);
            }

            let pending = state
                .entries
                .iter()
                .enumerate()
                .filter(|(_, entry)| entry.is_pending())
                .map(|(index, entry)| (index + 1, entry.id(), entry.image().clone()))
                .collect::<Vec<_>>();

            (pending, state.custom_prompt.clone(), state.entries.len())
        };

        info!(
            "Starting analysis pass: {} pending of {} images",
            pending.len(),
            total
        );

        let mut summary = AnalysisSummary::default();

        for (position, id, image) in pending {
            if self.entry(id).is_none() {
                debug!("Image {} was removed before analysis, skipping", position);
                summary.skipped_count += 1;
                continue;
            }

            let request = AnalysisRequest::new(image, Some(custom_prompt.clone()));

            match self.analyzer.analyze(&request).await {
                Ok(result) => {
                    if self.store_result(id, result) {
                        info!("Analyzed image {} ({})", position, request.image().name());
                        summary.analyzed_count += 1;
                    } else {
                        warn!(
                            "Image {} was removed during analysis, discarding result",
                            position
                        );
                        summary.skipped_count += 1;
                    }
                }
                Err(e) => {
                    error!("Error analyzing image {}: {}", position, e);
                    self.store_failure(id, e.clone());
                    summary.failures.push(ItemFailure {
                        id,
                        position,
                        error: e,
                    });
                }
            }
        }

        info!(
            "Analysis pass finished: {} analyzed, {} failed, {} skipped",
            summary.analyzed_count,
            summary.failed_count(),
            summary.skipped_count
        );

        Ok(summary)
    }

    fn store_result(&self, id: ImageId, result: SeoResult) -> bool {
        let mut state = self.state();
        match state.entries.iter_mut().find(|e| e.id() == id) {
            Some(entry) => {
                entry.complete(result);
                true
            }
            None => false,
        }
    }

    fn store_failure(&self, id: ImageId, error: AnalysisError) {
        let mut state = self.state();
        if let Some(entry) = state.entries.iter_mut().find(|e| e.id() == id) {
            entry.record_failure(error);
        }
    }
}
