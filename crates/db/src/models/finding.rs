//! Finding row model.

use bodymap_core::error::CoreError;
use bodymap_core::extraction::Finding;
use bodymap_core::severity::Severity;
use bodymap_core::types::{DbId, Timestamp};
use serde::Serialize;
use sqlx::FromRow;

/// A row from the `findings` table.
///
/// Serialized with the same camelCase keys as [`Finding`] so clients see a
/// single finding shape.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FindingRecord {
    pub id: DbId,
    pub diagnosis_id: DbId,
    pub body_part: String,
    pub condition: String,
    pub severity: String,
    pub description: Option<String>,
    /// Index in the extractor output.
    pub sort_order: i32,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl FindingRecord {
    /// Convert back to the domain [`Finding`].
    pub fn to_finding(&self) -> Result<Finding, CoreError> {
        Ok(Finding {
            body_part: self.body_part.clone(),
            condition: self.condition.clone(),
            severity: Severity::from_str(&self.severity).map_err(|_| {
                CoreError::Internal(format!(
                    "finding {} has unknown severity '{}'",
                    self.id, self.severity
                ))
            })?,
            description: self.description.clone().unwrap_or_default(),
        })
    }
}
