pub mod auth;
pub mod diagnosis;
pub mod extract;
