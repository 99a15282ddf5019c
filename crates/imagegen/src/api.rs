//! HTTP client for an OpenAI-style images API.
//!
//! Sends `POST {base_url}/images/generations` with `{ "prompt", "size" }`
//! and accepts either `{ "url": ... }` or `{ "data": [{ "url": ... }] }`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::config::ImageGenConfig;
use crate::generator::{GeneratedImage, ImageGenError, ImageGenerator};

/// HTTP-backed [`ImageGenerator`].
pub struct HttpImageGenerator {
    client: reqwest::Client,
    config: ImageGenConfig,
}

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    prompt: &'a str,
    size: &'a str,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    url: Option<String>,
    #[serde(default)]
    data: Vec<ImageData>,
}

#[derive(Debug, Deserialize)]
struct ImageData {
    url: Option<String>,
}

impl GenerateResponse {
    fn into_url(self) -> Option<String> {
        self.url
            .or_else(|| self.data.into_iter().find_map(|d| d.url))
            .filter(|u| !u.is_empty())
    }
}

impl HttpImageGenerator {
    /// Create a client from configuration.
    pub fn new(config: ImageGenConfig) -> Result<Self, ImageGenError> {
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .build()?;
        Ok(Self { client, config })
    }

    fn endpoint(&self) -> String {
        format!("{}/images/generations", self.config.base_url)
    }

    /// Ensure the response has a success status code, returning the body
    /// text in a [`ImageGenError::Api`] otherwise.
    async fn ensure_success(
        response: reqwest::Response,
    ) -> Result<reqwest::Response, ImageGenError> {
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "<unreadable body>".to_string());
            return Err(ImageGenError::Api {
                status: status.as_u16(),
                body,
            });
        }
        Ok(response)
    }
}

#[async_trait]
impl ImageGenerator for HttpImageGenerator {
    async fn generate(&self, prompt: &str) -> Result<GeneratedImage, ImageGenError> {
        let mut request = self.client.post(self.endpoint()).json(&GenerateRequest {
            prompt,
            size: &self.config.size,
        });
        if let Some(key) = &self.config.api_key {
            request = request.bearer_auth(key);
        }

        let response = Self::ensure_success(request.send().await?).await?;
        let parsed: GenerateResponse = response.json().await?;
        let url = parsed.into_url().ok_or(ImageGenError::MissingUrl)?;

        tracing::debug!(%url, "Image generated");
        Ok(GeneratedImage { url })
    }
}
