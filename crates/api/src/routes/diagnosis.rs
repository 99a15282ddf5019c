//! Route definitions for the `/diagnoses` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::diagnosis;
use crate::state::AppState;

/// Routes mounted at `/diagnoses`. All require auth.
///
/// ```text
/// GET, POST    /                -> list, create
/// GET, DELETE  /{id}            -> get_by_id, delete
/// GET          /{id}/body-map   -> body_map
/// POST         /{id}/image      -> generate_image
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(diagnosis::list).post(diagnosis::create))
        .route("/{id}", get(diagnosis::get_by_id).delete(diagnosis::delete))
        .route("/{id}/body-map", get(diagnosis::body_map))
        .route("/{id}/image", post(diagnosis::generate_image))
}
