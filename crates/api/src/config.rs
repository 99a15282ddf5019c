use std::time::Duration;

use crate::auth::jwt::JwtConfig;

/// Default minimum password length for self-registration.
const DEFAULT_MIN_PASSWORD_LENGTH: usize = 8;
/// Default time allowed for one image generation call, in seconds.
const DEFAULT_IMAGE_BUDGET_SECS: u64 = 20;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Minimum accepted password length at registration (default: `8`).
    pub min_password_length: usize,
    /// Hard limit on a single image generation call (default: 20s).
    /// Always shorter than the request timeout.
    pub image_budget: Duration,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `MIN_PASSWORD_LENGTH`  | `8`                        |
    /// | `IMAGE_BUDGET_SECS`    | `20`                       |
    ///
    /// JWT settings are read by [`JwtConfig::from_env`].
    ///
    /// # Panics
    ///
    /// Panics if a value does not parse, or if `IMAGE_BUDGET_SECS` is not
    /// strictly below `REQUEST_TIMEOUT_SECS`.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let min_password_length: usize = std::env::var("MIN_PASSWORD_LENGTH")
            .unwrap_or_else(|_| DEFAULT_MIN_PASSWORD_LENGTH.to_string())
            .parse()
            .expect("MIN_PASSWORD_LENGTH must be a valid usize");

        let image_budget_secs: u64 = std::env::var("IMAGE_BUDGET_SECS")
            .unwrap_or_else(|_| DEFAULT_IMAGE_BUDGET_SECS.to_string())
            .parse()
            .expect("IMAGE_BUDGET_SECS must be a valid u64");
        let image_budget = image_budget_within(image_budget_secs, request_timeout_secs)
            .unwrap_or_else(|msg| panic!("{msg}"));

        let jwt = JwtConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            min_password_length,
            image_budget,
            jwt,
        }
    }
}

/// The image budget must leave room to answer before the request times out.
fn image_budget_within(budget_secs: u64, request_timeout_secs: u64) -> Result<Duration, String> {
    if budget_secs == 0 || budget_secs >= request_timeout_secs {
        return Err(format!(
            "IMAGE_BUDGET_SECS ({budget_secs}) must be between 1 and \
             REQUEST_TIMEOUT_SECS ({request_timeout_secs}) exclusive"
        ));
    }
    Ok(Duration::from_secs(budget_secs))
}

/// Split a comma-separated origin list, dropping blanks.
fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
