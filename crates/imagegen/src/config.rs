use std::time::Duration;

/// Default image size requested from the service.
const DEFAULT_IMAGE_SIZE: &str = "512x512";
/// Default request timeout in seconds.
const DEFAULT_TIMEOUT_SECS: u64 = 20;

/// Image generation configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ImageGenConfig {
    /// Base URL of the images API, e.g. `https://images.example.com/v1`.
    pub base_url: String,
    /// Optional bearer token.
    pub api_key: Option<String>,
    /// Requested image size, e.g. `512x512`.
    pub size: String,
    /// Per-request timeout.
    pub timeout: Duration,
}

impl ImageGenConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var              | Required | Default   |
    /// |----------------------|----------|-----------|
    /// | `IMAGE_API_URL`      | no       | --        |
    /// | `IMAGE_API_KEY`      | no       | --        |
    /// | `IMAGE_SIZE`         | no       | `512x512` |
    /// | `IMAGE_TIMEOUT_SECS` | no       | `20`      |
    ///
    /// Returns `None` when `IMAGE_API_URL` is unset or empty, which disables
    /// image generation.
    ///
    /// # Panics
    ///
    /// Panics if `IMAGE_TIMEOUT_SECS` is set but not a valid u64.
    pub fn from_env() -> Option<Self> {
        let base_url = std::env::var("IMAGE_API_URL")
            .ok()
            .map(|s| s.trim().trim_end_matches('/').to_string())
            .filter(|s| !s.is_empty())?;

        let api_key = std::env::var("IMAGE_API_KEY")
            .ok()
            .filter(|s| !s.is_empty());

        let size = std::env::var("IMAGE_SIZE").unwrap_or_else(|_| DEFAULT_IMAGE_SIZE.into());

        let timeout_secs: u64 = std::env::var("IMAGE_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_TIMEOUT_SECS.to_string())
            .parse()
            .expect("IMAGE_TIMEOUT_SECS must be a valid u64");

        Some(Self {
            base_url,
            api_key,
            size,
            timeout: Duration::from_secs(timeout_secs),
        })
    }

    /// Configuration for a given base URL with default size and timeout.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            api_key: None,
            size: DEFAULT_IMAGE_SIZE.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}
