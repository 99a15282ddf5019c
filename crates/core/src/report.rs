//! Report text validation and history previews.
//!
//! The extractor accepts any string; these limits are applied by the HTTP
//! layer before a report is persisted.

use crate::error::CoreError;

/// Maximum length of a submitted report in characters.
pub const MAX_REPORT_TEXT_LENGTH: usize = 50_000;

/// Maximum length of the history-list excerpt in characters (before the ellipsis).
pub const MAX_PREVIEW_LENGTH: usize = 120;

/// Validate report text: must contain non-whitespace and be within the length limit.
pub fn validate_report_text(text: &str) -> Result<(), CoreError> {
    if text.trim().is_empty() {
        return Err(CoreError::Validation(
            "Report text must not be empty".to_string(),
        ));
    }
    let len = text.chars().count();
    if len > MAX_REPORT_TEXT_LENGTH {
        return Err(CoreError::Validation(format!(
            "Report text exceeds maximum length of {MAX_REPORT_TEXT_LENGTH} characters (got {len})"
        )));
    }
    Ok(())
}

/// Single-line excerpt of a report for history lists.
///
/// Collapses all whitespace runs to one space and cuts at
/// [`MAX_PREVIEW_LENGTH`] characters, appending `...` when cut.
pub fn preview(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= MAX_PREVIEW_LENGTH {
        return collapsed;
    }
    let cut: String = collapsed.chars().take(MAX_PREVIEW_LENGTH).collect();
    format!("{}...", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn empty_report_rejected() {
        assert_matches!(validate_report_text(""), Err(CoreError::Validation(_)));
        assert_matches!(validate_report_text(" \n\t"), Err(CoreError::Validation(_)));
    }

    #[test]
    fn report_at_limit_accepted() {
        let text = "a".repeat(MAX_REPORT_TEXT_LENGTH);
        assert!(validate_report_text(&text).is_ok());
    }

    #[test]
    fn report_over_limit_rejected() {
        let text = "a".repeat(MAX_REPORT_TEXT_LENGTH + 1);
        let err = validate_report_text(&text).unwrap_err();
        assert!(err.to_string().contains("maximum length"));
    }

    #[test]
    fn limit_counts_characters_not_bytes() {
        let text = "é".repeat(MAX_REPORT_TEXT_LENGTH);
        assert!(validate_report_text(&text).is_ok());
    }

    #[test]
    fn short_preview_is_collapsed_only() {
        assert_eq!(preview("Knee   pain.\n\nMild."), "Knee pain. Mild.");
    }

    #[test]
    fn long_preview_is_cut_with_ellipsis() {
        let text = "word ".repeat(100);
        let p = preview(&text);
        assert!(p.ends_with("..."));
        assert!(p.chars().count() <= MAX_PREVIEW_LENGTH + 3);
    }
}
