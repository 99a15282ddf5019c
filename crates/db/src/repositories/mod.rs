//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod diagnosis_repo;
pub mod finding_repo;
pub mod session_repo;
pub mod user_repo;

pub use diagnosis_repo::DiagnosisRepo;
pub use finding_repo::FindingRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;

/// Default page size for list queries.
pub const DEFAULT_LIMIT: i64 = 50;
/// Upper bound on page size for list queries.
pub const MAX_LIMIT: i64 = 200;

/// Clamp an optional page size to `1..=MAX_LIMIT`, defaulting to [`DEFAULT_LIMIT`].
pub fn clamp_limit(limit: Option<i64>) -> i64 {
    limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT)
}

/// Clamp an optional offset to be non-negative, defaulting to 0.
pub fn clamp_offset(offset: Option<i64>) -> i64 {
    offset.unwrap_or(0).max(0)
}
