//! Workflow Orchestration
//!
//! ワークフローのオーケストレーション

use anyhow::{Context, Result};
use log::info;
use std::sync::Arc;

use crate::adapter::config::Config;
use crate::adapter::openai::client::ReqwestTransport;
use crate::adapter::repositories::file_image_repository::FileImageRepository;
use crate::adapter::repositories::openai_image_analyzer::OpenAiImageAnalyzer;
use crate::adapter::repositories::system_clipboard::SystemClipboard;
use crate::application::use_cases::copy_results::CopyResultsUseCase;
use crate::application::use_cases::upload_session::UploadSession;
use crate::domain::entities::image_entry::{ImageEntry, ImageFile};
use crate::domain::repositories::clipboard_repository::ClipboardRepository;
use crate::domain::repositories::image_analyzer::ImageAnalyzer;
use crate::domain::repositories::image_repository::ImageRepository;
use crate::domain::services::result_formatter::ResultFormatter;

use super::cli::Args;

/// 解析結果をテキストにする
///
/// # Arguments
///
/// * `entries` - セッションのエントリ（順序どおり）
/// * `show_table` - テーブル表示をするか
/// * `as_json` - 結果をJSON配列として出力するか
pub fn render_report(entries: &[ImageEntry], show_table: bool, as_json: bool) -> Result<String> {
    if as_json {
        let results: Vec<_> = entries.iter().filter_map(|e| e.result()).collect();
        let json = serde_json::to_string_pretty(&results).context("Failed to serialize results")?;
        return Ok(json + "\n");
    }

    let mut out = String::new();

    for entry in entries {
        match (entry.result(), entry.last_error()) {
            (Some(result), _) => {
                out.push_str(&format!("─── {} ───\n", entry.preview()));
                out.push_str(&ResultFormatter::format_result(result));
                out.push('\n');
            }
            (None, Some(error)) => {
                out.push_str(&format!("✗ {}: {}\n\n", entry.preview(), error));
            }
            (None, None) => {}
        }
    }

    if show_table {
        let results: Vec<_> = entries.iter().filter_map(|e| e.result().cloned()).collect();
        out.push_str("Generated Results\n");
        out.push_str(&ResultFormatter::format_table(&results));
    }

    Ok(out)
}

/// SEO Generation Workflow
pub struct SeoWorkflow {
    config: Config,
}

impl SeoWorkflow {
    /// Create a new workflow instance with dependency injection
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the workflow against the configured API
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting SEO optimizer...");
        info!("Dry run: {}", args.dry_run);

        // APIキーは画像を読む前に確認する
        let analyzer = if args.dry_run {
            None
        } else {
            let transport = ReqwestTransport::new(self.config.timeout())?;
            let analyzer = OpenAiImageAnalyzer::new(transport, &self.config)?;
            println!("✓ Using model {} ({})", self.config.model, self.config.base_url);
            Some(Arc::new(analyzer))
        };

        let images = FileImageRepository::new()
            .load_images(&args.images)
            .await?;
        println!("✓ Loaded {} images", images.len());

        let Some(analyzer) = analyzer else {
            println!("✓ Dry-run mode (not calling the API)");
            println!("  Would analyze {} images:", images.len());
            for image in &images {
                println!(
                    "    - {} | {} | {} bytes",
                    image.name(),
                    image.mime_type(),
                    image.size()
                );
            }
            return Ok(());
        };

        let clipboard = Arc::new(SystemClipboard::new(&self.config.copy_fallback_path));
        let report = self
            .run(&args, analyzer, clipboard.clone(), images)
            .await?;
        print!("{}", report);

        if args.copy {
            println!("  Clipboard fallback file: {}", clipboard.fallback_path().display());
        }

        Ok(())
    }

    /// Analyze the given images with injected collaborators and return the rendered report
    pub async fn run<A: ImageAnalyzer, C: ClipboardRepository>(
        &self,
        args: &Args,
        analyzer: Arc<A>,
        clipboard: Arc<C>,
        images: Vec<ImageFile>,
    ) -> Result<String> {
        let session = UploadSession::new(analyzer);
        session.add_images(images);

        if let Some(prompt) = &args.prompt {
            session.set_custom_prompt(prompt.clone());
        }
        if args.table {
            session.toggle_table();
        }

        let summary = session.run_analysis().await?;

        for failure in &summary.failures {
            eprintln!(
                "✗ Failed to analyze image {}: {}",
                failure.position, failure.error
            );
        }
        println!(
            "✓ Analyzed {} images ({} failed)",
            summary.analyzed_count,
            summary.failed_count()
        );

        let report = render_report(&session.entries(), session.is_table_visible(), args.json)?;

        if args.copy {
            let use_case = CopyResultsUseCase::new(clipboard);
            if use_case.copy_all(&session.completed_results()) {
                println!("✓ Copied all results");
            } else {
                println!("⚠ Nothing was copied");
            }
        }

        Ok(report)
    }
}
