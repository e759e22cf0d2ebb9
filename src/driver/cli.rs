//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;
use std::path::PathBuf;

/// 商品画像からSEO用のタイトル・説明文・タグを生成するCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "seo-optimizer")]
#[command(about = "Generate SEO titles, descriptions and tags for product images", long_about = None)]
pub struct Args {
    /// Image files or directories (PNG, JPG, JPEG; max 5MB per image recommended)
    pub images: Vec<PathBuf>,

    /// Custom prompt; the JSON format instruction is appended automatically
    #[arg(short, long)]
    pub prompt: Option<String>,

    /// Config file path
    #[arg(short, long, default_value = "./seo-optimizer.json")]
    pub config: String,

    /// Show the table view of all results
    #[arg(long)]
    pub table: bool,

    /// Copy all results to the clipboard
    #[arg(long)]
    pub copy: bool,

    /// Print results as JSON
    #[arg(long)]
    pub json: bool,

    /// Dry run mode - list images without calling the API
    #[arg(long)]
    pub dry_run: bool,
}
