//! # Result Formatter
//!
//! コピー用テキストと表形式のテキストを生成する

use crate::domain::entities::seo_result::SeoResult;

pub struct ResultFormatter;

impl ResultFormatter {
    /// 1件分のコピー用テキスト
    pub fn format_result(result: &SeoResult) -> String {
        format!(
            "Title: {}\nDescription: {}\nTags: {}\n",
            result.title(),
            result.description(),
            result.tags().join(", ")
        )
    }

    /// 全件分のコピー用テキスト（番号は1始まり）
    pub fn format_all(results: &[SeoResult]) -> String {
        results
            .iter()
            .enumerate()
            .map(|(index, result)| {
                format!(
                    "=== Image {} ===\n{}\n",
                    index + 1,
                    Self::format_result(result)
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    /// テーブル表示用のテキスト
    ///
    /// 1件につき1行。セル内の改行は空白に、`|` は `\|` に置き換える。
    /// 結果が空の場合は空文字列を返す
    pub fn format_table(results: &[SeoResult]) -> String {
        if results.is_empty() {
            return String::new();
        }

        let mut lines = vec!["# | Title | Description | Tags".to_string()];
        for (index, result) in results.iter().enumerate() {
            lines.push(format!(
                "{} | {} | {} | {}",
                index + 1,
                table_cell(result.title()),
                table_cell(result.description()),
                table_cell(&result.tags().join(", "))
            ));
        }

        lines.join("\n") + "\n"
    }
}

fn table_cell(text: &str) -> String {
    text.split(['\r', '\n'])
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
        .replace('|', "\\|")
}
