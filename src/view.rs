//! Terminal rendering of the result, error, and summary panels.
//!
//! Pure formatting is kept separate from printing so the panel content is
//! testable without capturing stdout.

use colored::Colorize;

use crate::api::types::{SummaryResult, UploadResponse};
use crate::i18n::I18n;
use crate::session::Mode;

/// Inline preview length, in characters.
pub const PREVIEW_CHAR_LIMIT: usize = 500;

/// First `PREVIEW_CHAR_LIMIT` characters of the translated content, with
/// an ellipsis when truncated.
pub fn preview_snippet(content: &str) -> String {
    let mut chars = content.chars();
    let snippet: String = chars.by_ref().take(PREVIEW_CHAR_LIMIT).collect();
    if chars.next().is_some() {
        format!("{}...", snippet)
    } else {
        snippet
    }
}

/// Detail block shown after a successful upload; every metadata field is
/// optional and falls back to a localized placeholder.
pub fn format_upload_detail(i18n: &I18n, response: &UploadResponse) -> String {
    let unknown = i18n.t("unknown");
    let confidence = confidence_display(response.language_confidence.as_ref(), unknown);

    let mut lines = Vec::with_capacity(6);
    lines.push(i18n.t("translation_success").to_string());
    lines.push(format!(
        "{}{}",
        i18n.t("detail_processing_time"),
        response.processing_time.as_deref().unwrap_or(unknown)
    ));
    lines.push(format!(
        "{}{} ({}{})",
        i18n.t("detail_detected_language"),
        response.detected_language.as_deref().unwrap_or(unknown),
        i18n.t("detail_confidence"),
        confidence
    ));
    lines.push(format!(
        "{}{}",
        i18n.t("detail_direction"),
        response
            .translation_direction
            .as_deref()
            .unwrap_or(i18n.t("direction_default"))
    ));
    lines.push(format!(
        "{}{}{}",
        i18n.t("detail_original_length"),
        response.original_length.unwrap_or(0),
        i18n.t("chars_unit")
    ));
    lines.push(format!(
        "{}{}{}",
        i18n.t("detail_translated_length"),
        response.translated_length.unwrap_or(0),
        i18n.t("chars_unit")
    ));
    lines.join("\n")
}

fn confidence_display(value: Option<&serde_json::Value>, unknown: &str) -> String {
    match value {
        Some(serde_json::Value::String(s)) => s.clone(),
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(other) => other.to_string(),
        None => unknown.to_string(),
    }
}

/// Header naming the active input mode, the tab title analog.
pub fn render_mode_header(i18n: &I18n, mode: Mode) {
    println!("{}", i18n.t(mode.title_key()).bold());
}

pub fn render_result_panel(i18n: &I18n, preview: &str, download_url: Option<&str>) {
    println!();
    println!("{}", i18n.t("translation_complete").green().bold());
    println!("{}", i18n.t("translation_preview"));
    println!("{}", preview);
    if let Some(url) = download_url {
        println!("{} {}", i18n.t("download_file"), url.underline());
    }
}

pub fn render_text_result(i18n: &I18n, translated: &str) {
    println!();
    println!("{}", i18n.t("translated_text").green().bold());
    println!("{}", translated);
}

pub fn render_error_panel(i18n: &I18n, message: &str) {
    eprintln!();
    eprintln!("{} {}", i18n.t("processing_failed").red().bold(), message);
}

/// Success and failure forms render distinctly; a missing or empty
/// summary renders nothing at all.
pub fn render_summary_panel(i18n: &I18n, summary: &SummaryResult) {
    if summary.success && summary.content.is_some() {
        println!();
        println!("{}", i18n.t("ai_summary").cyan().bold());
        println!("{}", summary.content.as_deref().unwrap_or_default());
    } else if let Some(error) = &summary.error {
        println!();
        println!("{} {}", i18n.t("ai_summary").yellow().bold(), error.yellow());
    }
}

pub fn render_notification(message: &str) {
    println!();
    println!("{}", message.green());
}

pub fn render_char_count(i18n: &I18n, count: usize) {
    println!("{}{}", i18n.t("char_count"), count);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::{I18n, Locale, LocalePreference};
    use tempfile::tempdir;

    fn english() -> I18n {
        let dir = tempdir().unwrap();
        let preference = LocalePreference::new(dir.path());
        preference.store(Locale::En).unwrap();
        I18n::from_preference(preference)
    }

    #[test]
    fn test_preview_snippet_truncates_with_ellipsis() {
        let long: String = "a".repeat(PREVIEW_CHAR_LIMIT + 1);
        let snippet = preview_snippet(&long);
        assert_eq!(snippet.len(), PREVIEW_CHAR_LIMIT + 3);
        assert!(snippet.ends_with("..."));

        let exact: String = "b".repeat(PREVIEW_CHAR_LIMIT);
        assert_eq!(preview_snippet(&exact), exact);
    }

    #[test]
    fn test_preview_snippet_counts_characters_not_bytes() {
        let cjk: String = "好".repeat(PREVIEW_CHAR_LIMIT + 10);
        let snippet = preview_snippet(&cjk);
        assert_eq!(snippet.chars().count(), PREVIEW_CHAR_LIMIT + 3);
    }

    #[test]
    fn test_upload_detail_defaults_to_placeholders() {
        let i18n = english();
        let response: UploadResponse = serde_json::from_str(r#"{"success": true}"#).unwrap();
        let detail = format_upload_detail(&i18n, &response);

        assert!(detail.contains("Processing time: unknown"));
        assert!(detail.contains("Detected language: unknown"));
        assert!(detail.contains("Direction: Chinese → English"));
        assert!(detail.contains("Original length: 0 characters"));
    }

    #[test]
    fn test_upload_detail_uses_reported_metadata() {
        let i18n = english();
        let body = r#"{
            "success": true,
            "processing_time": "2.4s",
            "detected_language": "zh",
            "language_confidence": 0.97,
            "translation_direction": "zh → en",
            "original_length": 120,
            "translated_length": 118
        }"#;
        let response: UploadResponse = serde_json::from_str(body).unwrap();
        let detail = format_upload_detail(&i18n, &response);

        assert!(detail.contains("Processing time: 2.4s"));
        assert!(detail.contains("Detected language: zh (confidence: 0.97)"));
        assert!(detail.contains("Direction: zh → en"));
        assert!(detail.contains("Translated length: 118 characters"));
    }

    #[test]
    fn test_confidence_accepts_string_and_number() {
        assert_eq!(
            confidence_display(Some(&serde_json::json!("high")), "unknown"),
            "high"
        );
        assert_eq!(
            confidence_display(Some(&serde_json::json!(0.5)), "unknown"),
            "0.5"
        );
        assert_eq!(confidence_display(None, "unknown"), "unknown");
    }
}
