//! The [`CurrentUser`] extractor: who owns the diagnoses this request touches.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use bodymap_core::error::CoreError;
use bodymap_core::types::DbId;

use crate::error::AppError;
use crate::state::AppState;

/// The user id from a valid `Authorization: Bearer <access token>` header.
///
/// Handlers taking this parameter answer 401 before running when the
/// header is missing, malformed, expired or signed with another secret.
#[derive(Debug, Clone, Copy)]
pub struct CurrentUser {
    pub user_id: DbId,
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).map_err(unauthorized)?;
        let claims = state
            .config
            .jwt
            .verify_access_token(token)
            .map_err(|_| unauthorized("Invalid or expired token"))?;
        Ok(CurrentUser {
            user_id: claims.sub,
        })
    }
}

/// The token part of a `Bearer` authorization header.
fn bearer_token(headers: &HeaderMap) -> Result<&str, &'static str> {
    let value = headers
        .get(AUTHORIZATION)
        .ok_or("Missing Authorization header")?
        .to_str()
        .map_err(|_| "Authorization header is not valid ASCII")?;
    match value.split_once(' ') {
        Some((scheme, token)) if scheme.eq_ignore_ascii_case("bearer") && !token.trim().is_empty() => {
            Ok(token.trim())
        }
        _ => Err("Invalid Authorization format. Expected: Bearer <token>"),
    }
}

fn unauthorized(msg: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(msg.to_string()))
}
