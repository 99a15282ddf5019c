//! Body Map domain core.
//!
//! Pure domain logic with no I/O: the report-to-findings extractor, the
//! severity model, report validation, body-diagram grouping and image
//! prompt construction. Shared id/timestamp types and [`error::CoreError`]
//! live here so the database and HTTP crates agree on them.

pub mod body_map;
pub mod error;
pub mod extraction;
pub mod image_prompt;
pub mod report;
pub mod roles;
pub mod severity;
pub mod types;
