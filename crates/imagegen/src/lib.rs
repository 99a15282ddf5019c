//! Illustrative image generation for diagnoses.
//!
//! - [`generator`] -- the [`ImageGenerator`] trait callers depend on.
//! - [`api`] -- HTTP client implementation against an images API.
//! - [`config`] -- environment configuration.

pub mod api;
pub mod config;
pub mod generator;

pub use api::HttpImageGenerator;
pub use config::ImageGenConfig;
pub use generator::{generate_within, GeneratedImage, ImageGenError, ImageGenerator};
