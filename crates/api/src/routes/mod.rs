pub mod auth;
pub mod diagnosis;
pub mod extract;
pub mod health;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/register                       register (public)
/// /auth/login                          login (public)
/// /auth/refresh                        refresh (public)
/// /auth/logout                         logout (requires auth)
/// /auth/me                             current user (requires auth)
///
/// /extract                             extract findings, no persistence
///
/// /diagnoses                           create, list
/// /diagnoses/{id}                      get, delete
/// /diagnoses/{id}/body-map             grouped diagram data
/// /diagnoses/{id}/image                (re)generate image
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/diagnoses", diagnosis::router())
        .merge(extract::router())
}
