//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A create DTO for inserts

pub mod diagnosis;
pub mod finding;
pub mod session;
pub mod user;
