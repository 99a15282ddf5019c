//! Prompt construction for the illustrative diagnosis image.

use crate::extraction::Finding;

/// Maximum prompt length in characters sent to the image generator.
pub const MAX_IMAGE_PROMPT_LENGTH: usize = 1_000;

const PROMPT_PREFIX: &str = "Clean medical illustration of a human body, front view, \
                             neutral background, with highlighted areas showing: ";

const PROMPT_FALLBACK: &str = "no specific findings, general health assessment";

/// Build a deterministic image prompt from extracted findings.
///
/// Each finding becomes `"<severity> <condition> of the <body part>"`. The
/// sentinel finding produces a generic assessment prompt. The result never
/// exceeds [`MAX_IMAGE_PROMPT_LENGTH`] characters.
pub fn build_image_prompt(findings: &[Finding]) -> String {
    let described: Vec<String> = findings
        .iter()
        .filter(|f| !f.is_sentinel())
        .map(|f| {
            format!(
                "{} {} of the {}",
                f.severity,
                f.condition.to_lowercase(),
                f.body_part.to_lowercase()
            )
        })
        .collect();

    let body = if described.is_empty() {
        PROMPT_FALLBACK.to_string()
    } else {
        described.join("; ")
    };

    let prompt = format!("{PROMPT_PREFIX}{body}");
    if prompt.chars().count() <= MAX_IMAGE_PROMPT_LENGTH {
        prompt
    } else {
        prompt.chars().take(MAX_IMAGE_PROMPT_LENGTH).collect()
    }
}
