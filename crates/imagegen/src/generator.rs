//! Image generator contract.

use std::time::Duration;

use async_trait::async_trait;
use serde::Serialize;

/// A generated image reference.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GeneratedImage {
    pub url: String,
}

/// Errors from image generation.
#[derive(Debug, thiserror::Error)]
pub enum ImageGenError {
    /// The HTTP request itself failed (network, DNS, TLS, timeout).
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The image service returned a non-2xx status code.
    #[error("Image API error ({status}): {body}")]
    Api {
        /// HTTP status code.
        status: u16,
        /// Raw response body for debugging.
        body: String,
    },

    /// A 2xx response carried no image URL.
    #[error("Image API response did not contain an image URL")]
    MissingUrl,

    /// The caller's time budget ran out before the generator answered.
    #[error("Image generation did not finish within {0:?}")]
    TimedOut(Duration),
}

/// Turns a free-text prompt into an image URL.
///
/// Calls may be slow and may fail; callers decide whether a failure is fatal.
#[async_trait]
pub trait ImageGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError>;
}

/// Run `generator` with a hard time budget.
///
/// The budget is enforced here rather than trusted to the implementation,
/// so a caller holding its own deadline never outlives it waiting on an image.
pub async fn generate_within(
    generator: &dyn ImageGenerator,
    prompt: &str,
    budget: Duration,
) -> Result<GeneratedImage, ImageGenError> {
    tokio::time::timeout(budget, generator.generate(prompt))
        .await
        .map_err(|_| ImageGenError::TimedOut(budget))?
}
