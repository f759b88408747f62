//! Utility functions shared across layers.
//!
//! - [`email_normalizer`] - Email normalization and validation
//! - [`db_error`] - Mapping of storage constraint violations

pub mod db_error;
pub mod email_normalizer;
