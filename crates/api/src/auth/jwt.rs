//! Access and refresh tokens.
//!
//! Access tokens are HS256 JWTs that carry only the user id; every
//! diagnosis lookup is scoped by that id. Refresh tokens are opaque UUIDs
//! handed to the client once, with only their SHA-256 kept in
//! `user_sessions`.

use bodymap_core::types::{DbId, Timestamp};
use chrono::Utc;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

const DEFAULT_ACCESS_EXPIRY_MINS: i64 = 15;
const DEFAULT_REFRESH_EXPIRY_DAYS: i64 = 7;

/// Access-token payload.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Claims {
    /// Owning user id.
    pub sub: DbId,
    pub exp: i64,
    pub iat: i64,
    /// Per-token UUID so two tokens issued in the same second still differ.
    pub jti: String,
}

#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expiry_mins: i64,
    pub refresh_token_expiry_days: i64,
}

impl JwtConfig {
    /// Read token settings from the environment.
    ///
    /// | Env Var                    | Required | Default |
    /// |----------------------------|----------|---------|
    /// | `JWT_SECRET`               | **yes**  | --      |
    /// | `JWT_ACCESS_EXPIRY_MINS`   | no       | `15`    |
    /// | `JWT_REFRESH_EXPIRY_DAYS`  | no       | `7`     |
    ///
    /// # Panics
    ///
    /// Panics if `JWT_SECRET` is missing or empty, or if either expiry is
    /// not a positive integer.
    pub fn from_env() -> Self {
        let secret = std::env::var("JWT_SECRET").unwrap_or_default();
        assert!(!secret.is_empty(), "JWT_SECRET must be set and non-empty");

        Self {
            secret,
            access_token_expiry_mins: positive_from_env(
                "JWT_ACCESS_EXPIRY_MINS",
                DEFAULT_ACCESS_EXPIRY_MINS,
            ),
            refresh_token_expiry_days: positive_from_env(
                "JWT_REFRESH_EXPIRY_DAYS",
                DEFAULT_REFRESH_EXPIRY_DAYS,
            ),
        }
    }

    /// Sign an access token for `user_id`, valid for `access_token_expiry_mins`.
    pub fn issue_access_token(&self, user_id: DbId) -> Result<String, jsonwebtoken::errors::Error> {
        let iat = Utc::now().timestamp();
        let claims = Claims {
            sub: user_id,
            exp: iat + self.access_token_expiry_mins * 60,
            iat,
            jti: Uuid::new_v4().to_string(),
        };
        encode(
            &Header::new(Algorithm::HS256),
            &claims,
            &EncodingKey::from_secret(self.secret.as_bytes()),
        )
    }

    /// Check signature and expiry, returning the claims.
    pub fn verify_access_token(&self, token: &str) -> Result<Claims, jsonwebtoken::errors::Error> {
        let mut validation = Validation::new(Algorithm::HS256);
        validation.set_required_spec_claims(&["exp", "sub"]);
        decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.secret.as_bytes()),
            &validation,
        )
        .map(|data| data.claims)
    }

    /// When a refresh token issued now stops being accepted.
    pub fn refresh_expires_at(&self) -> Timestamp {
        Utc::now() + chrono::Duration::days(self.refresh_token_expiry_days)
    }
}

fn positive_from_env(name: &str, default: i64) -> i64 {
    let value = match std::env::var(name) {
        Ok(raw) => raw
            .parse()
            .unwrap_or_else(|_| panic!("{name} must be an integer, got '{raw}'")),
        Err(_) => default,
    };
    assert!(value > 0, "{name} must be positive");
    value
}

/// A newly minted refresh token. `plaintext` goes to the client, `hash` to the database.
pub struct RefreshToken {
    pub plaintext: String,
    pub hash: String,
}

impl RefreshToken {
    pub fn mint() -> Self {
        let plaintext = Uuid::new_v4().to_string();
        let hash = Self::hash_of(&plaintext);
        Self { plaintext, hash }
    }

    /// Lowercase hex SHA-256, the form stored in `user_sessions.refresh_token_hash`.
    pub fn hash_of(token: &str) -> String {
        format!("{:x}", Sha256::digest(token.as_bytes()))
    }
}
