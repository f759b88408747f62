//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers.
//!
//! - [`services::user_service::UserService`] - User CRUD with email uniqueness checks

pub mod services;
