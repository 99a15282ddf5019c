//! Errors raised by the domain layer.
//!
//! The HTTP crate maps each variant to a status code; nothing here knows
//! about HTTP.

use crate::types::DbId;

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// No row with this id, or the row belongs to another user.
    #[error("{entity} {id} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// Caller input rejected: empty report, unknown severity, weak password.
    #[error("Validation failed: {0}")]
    Validation(String),

    /// Missing, expired or revoked credentials.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// Stored data the domain cannot interpret.
    #[error("Internal error: {0}")]
    Internal(String),
}
