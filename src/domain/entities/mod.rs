//! Core domain entities.
//!
//! Entities are plain data structures. Creation and partial updates use
//! separate input types:
//! - [`NewUser`] - For inserting records
//! - [`UserPatch`] - For partial updates

pub mod user;

pub use user::{NewUser, User, UserPatch};
