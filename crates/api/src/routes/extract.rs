use axum::routing::post;
use axum::Router;

use crate::handlers::extract;
use crate::state::AppState;

/// `POST /extract` (requires auth).
pub fn router() -> Router<AppState> {
    Router::new().route("/extract", post(extract::extract))
}
