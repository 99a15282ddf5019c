//! Finding severity model and keyword classification.
//!
//! Severity is graded by scanning a window of report text for keywords from
//! three fixed buckets. Buckets are checked in priority order (severe, then
//! moderate, then mild) and the first bucket with any hit wins, regardless
//! of where in the window the keyword appears.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ---------------------------------------------------------------------------
// Keyword buckets
// ---------------------------------------------------------------------------

/// Keywords that grade a finding as [`Severity::Severe`].
pub const SEVERE_KEYWORDS: &[&str] = &[
    "severe",
    "critical",
    "acute",
    "serious",
    "major",
    "significant",
];

/// Keywords that grade a finding as [`Severity::Moderate`].
pub const MODERATE_KEYWORDS: &[&str] = &["moderate", "notable", "substantial"];

/// Keywords that grade a finding as [`Severity::Mild`].
pub const MILD_KEYWORDS: &[&str] = &["mild", "minor", "slight", "minimal", "small"];

/// All valid severity strings, in descending order.
const VALID_SEVERITY_STRINGS: &[&str] = &["severe", "moderate", "mild"];

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Three-valued severity attached to every finding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Severe,
    Moderate,
    Mild,
}

impl Severity {
    /// String representation for database storage and JSON.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Severe => "severe",
            Self::Moderate => "moderate",
            Self::Mild => "mild",
        }
    }

    /// Parse a severity from its lowercase string form.
    pub fn from_str(s: &str) -> Result<Self, CoreError> {
        match s {
            "severe" => Ok(Self::Severe),
            "moderate" => Ok(Self::Moderate),
            "mild" => Ok(Self::Mild),
            _ => Err(CoreError::Validation(format!(
                "Invalid severity '{s}'. Must be one of: {}",
                VALID_SEVERITY_STRINGS.join(", ")
            ))),
        }
    }

    /// Numeric rank, higher is worse. Used to pick the worst severity of a group.
    pub fn rank(&self) -> u8 {
        match self {
            Self::Severe => 3,
            Self::Moderate => 2,
            Self::Mild => 1,
        }
    }

    /// Hex colour used to shade a body region on the diagram.
    pub fn color(&self) -> &'static str {
        match self {
            Self::Severe => "#dc2626",
            Self::Moderate => "#f59e0b",
            Self::Mild => "#fbbf24",
        }
    }

    /// Grade a window of text by keyword bucket priority.
    ///
    /// The window is lower-cased before scanning. Matching is plain substring
    /// containment, so "majority" counts as "major". Defaults to `Mild`.
    pub fn classify(window: &str) -> Self {
        let lower = window.to_lowercase();
        let hit = |bucket: &[&str]| bucket.iter().any(|kw| lower.contains(kw));

        if hit(SEVERE_KEYWORDS) {
            Self::Severe
        } else if hit(MODERATE_KEYWORDS) {
            Self::Moderate
        } else {
            // Mild keywords and "no keyword at all" grade the same.
            Self::Mild
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
