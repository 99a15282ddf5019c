//! Report-to-findings extraction.
//!
//! A keyword/regex scan over free-text report text. Every (body part,
//! condition) pair from two fixed vocabularies is searched in either order
//! (`part ... condition` or `condition ... part`), and each pair with at
//! least one match yields one [`Finding`]. The scan is pure and total:
//! input that produces no finding yields the single sentinel finding.
//!
//! Matching is lexical only. Negated mentions ("no fracture of the hand")
//! are reported like any other co-occurrence.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::severity::Severity;

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

/// Canonical body-part terms, in output order.
///
/// The laterality/position modifiers at the end are body-part tokens in
/// their own right, so "fracture in the left femur" is a (Left, Fracture)
/// finding even though "femur" is not listed.
pub const BODY_PARTS: &[&str] = &[
    "head", "neck", "shoulder", "arm", "elbow", "wrist", "hand", "chest", "heart", "lung",
    "abdomen", "stomach", "liver", "kidney", "spine", "back", "hip", "leg", "knee", "ankle",
    "foot", "left", "right", "upper", "lower",
];

/// Canonical condition terms, in output order within a body part.
pub const CONDITIONS: &[&str] = &[
    "fracture",
    "break",
    "crack",
    "lesion",
    "tumor",
    "inflammation",
    "swelling",
    "pain",
    "strain",
    "sprain",
    "tear",
    "rupture",
    "dislocation",
    "disease",
    "abnormality",
    "damage",
    "cyst",
];

/// Body part of the finding returned when nothing is extracted.
pub const SENTINEL_BODY_PART: &str = "General";
/// Condition of the finding returned when nothing is extracted.
pub const SENTINEL_CONDITION: &str = "Assessment";
/// Description of the finding returned when nothing is extracted.
pub const SENTINEL_DESCRIPTION: &str = "Report received for analysis";

/// A severity adjective separated from the match by one of these belongs
/// to the previous sentence.
const SENTENCE_TERMINATORS: &[char] = &['.', '!', '?', ';'];

// ---------------------------------------------------------------------------
// Finding
// ---------------------------------------------------------------------------

/// A single extracted (body part, condition, severity, description) tuple.
///
/// Serializes as `{ "bodyPart", "condition", "severity", "description" }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    /// Capitalized canonical body part, e.g. `"Shoulder"`.
    pub body_part: String,
    /// Capitalized canonical condition, e.g. `"Inflammation"`.
    pub condition: String,
    pub severity: Severity,
    /// The first matched substring, verbatim from the report.
    pub description: String,
}

impl Finding {
    /// The placeholder finding substituted when extraction yields nothing.
    pub fn sentinel() -> Self {
        Self {
            body_part: SENTINEL_BODY_PART.to_string(),
            condition: SENTINEL_CONDITION.to_string(),
            severity: Severity::Mild,
            description: SENTINEL_DESCRIPTION.to_string(),
        }
    }

    /// Whether this is the "nothing extracted" placeholder.
    pub fn is_sentinel(&self) -> bool {
        *self == Self::sentinel()
    }
}

// ---------------------------------------------------------------------------
// Extractor contract
// ---------------------------------------------------------------------------

/// The `text -> findings` contract callers depend on.
///
/// Implementations must be total (never fail, never return an empty list)
/// and safe to share across request handlers.
pub trait Extractor: Send + Sync {
    fn extract(&self, report_text: &str) -> Vec<Finding>;
}

/// Keyword/regex implementation of [`Extractor`] backed by [`extract`].
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordExtractor;

impl Extractor for KeywordExtractor {
    fn extract(&self, report_text: &str) -> Vec<Finding> {
        extract(report_text)
    }
}

// ---------------------------------------------------------------------------
// Compiled patterns
// ---------------------------------------------------------------------------

/// Per-term presence checks, used to skip pairs that cannot match.
static BODY_PART_TERMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BODY_PARTS
        .iter()
        .map(|part| compile(&format!(r"(?i)\b{}\b", regex::escape(part))))
        .collect()
});

static CONDITION_TERMS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    CONDITIONS
        .iter()
        .map(|condition| compile(&format!(r"(?i){}", condition_term(condition))))
        .collect()
});

/// One pattern per (body part, condition) pair, indexed
/// `part_index * CONDITIONS.len() + condition_index`.
static PAIR_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    BODY_PARTS
        .iter()
        .flat_map(|part| {
            CONDITIONS
                .iter()
                .map(move |condition| compile(&pair_pattern(part, condition)))
        })
        .collect()
});

/// A whole-word condition, optionally pluralised ("lesions", "tears").
fn condition_term(condition: &str) -> String {
    format!(r"\b{}(?:s|es)?\b", regex::escape(condition))
}

/// Either ordering, non-greedy gap, case-insensitive.
fn pair_pattern(body_part: &str, condition: &str) -> String {
    let part = regex::escape(body_part);
    let condition = condition_term(condition);
    format!(r"(?i)\b{part}\b.*?{condition}|{condition}.*?\b{part}\b")
}

fn compile(pattern: &str) -> Regex {
    // Patterns are built from the fixed vocabulary above.
    Regex::new(pattern).expect("vocabulary pattern must compile")
}

// ---------------------------------------------------------------------------
// Extraction
// ---------------------------------------------------------------------------

/// Extract findings from free-text report text.
///
/// Output order follows the vocabulary (body parts outer, conditions
/// inner), never the position of matches in the text. Returns exactly
/// `[Finding::sentinel()]` when no pair co-occurs.
pub fn extract(report_text: &str) -> Vec<Finding> {
    let present_parts: Vec<usize> = BODY_PART_TERMS
        .iter()
        .enumerate()
        .filter(|(_, re)| re.is_match(report_text))
        .map(|(i, _)| i)
        .collect();
    let present_conditions: Vec<usize> = CONDITION_TERMS
        .iter()
        .enumerate()
        .filter(|(_, re)| re.is_match(report_text))
        .map(|(i, _)| i)
        .collect();

    let mut findings = Vec::new();

    for &part_idx in &present_parts {
        for &condition_idx in &present_conditions {
            let pattern = &PAIR_PATTERNS[part_idx * CONDITIONS.len() + condition_idx];
            let Some(m) = pattern.find(report_text) else {
                continue;
            };

            let window = classification_window(report_text, m.start(), m.end());
            findings.push(Finding {
                body_part: capitalize(BODY_PARTS[part_idx]),
                condition: capitalize(CONDITIONS[condition_idx]),
                severity: Severity::classify(window),
                description: m.as_str().to_string(),
            });
        }
    }

    if findings.is_empty() {
        findings.push(Finding::sentinel());
    }
    findings
}

/// The text graded for severity: the match plus the word directly before it.
///
/// A severity adjective usually precedes the noun it grades ("severe
/// fracture in the left femur" matches only "fracture in the left"). The
/// preceding word is not included when a sentence terminator or a line
/// break separates it from the match.
fn classification_window(text: &str, start: usize, end: usize) -> &str {
    let before = text[..start].trim_end();
    let gap = &text[before.len()..start];
    if before.is_empty() || gap.contains('\n') || before.ends_with(SENTENCE_TERMINATORS) {
        return &text[start..end];
    }

    let word_start = before
        .char_indices()
        .rev()
        .find(|(_, c)| c.is_whitespace())
        .map(|(i, c)| i + c.len_utf8())
        .unwrap_or(0);
    &text[word_start..end]
}

/// Uppercase the first character, leave the rest unchanged.
fn capitalize(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
