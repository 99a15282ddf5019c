use std::sync::Arc;

use bodymap_core::extraction::Extractor;
use bodymap_imagegen::ImageGenerator;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: bodymap_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Finding extractor applied to submitted reports.
    pub extractor: Arc<dyn Extractor>,
    /// Image generator; `None` when `IMAGE_API_URL` is not configured.
    pub image_generator: Option<Arc<dyn ImageGenerator>>,
}
