//! Diagnosis entity model and DTOs.

use bodymap_core::extraction::Finding;
use bodymap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A diagnosis row from the `diagnoses` table.
///
/// `findings` is the JSON snapshot of the extractor output taken when the
/// report was analysed; the `findings` table holds the same data as rows.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Diagnosis {
    pub id: DbId,
    pub user_id: DbId,
    pub report_text: String,
    pub findings: serde_json::Value,
    pub generated_image_url: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new diagnosis.
#[derive(Debug)]
pub struct CreateDiagnosis<'a> {
    pub user_id: DbId,
    pub report_text: &'a str,
    pub findings: &'a [Finding],
}
