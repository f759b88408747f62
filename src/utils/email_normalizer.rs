//! Email normalization and validation.
//!
//! Every value assigned to a user's email passes through [`validate_email`],
//! both when a user is created and when the address is changed later.

use regex::Regex;
use std::sync::LazyLock;

use crate::error::AppError;

/// Accepted shape of a normalized email address.
static EMAIL_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[\w.-]+@[\w.-]+\.\w+$").unwrap());

/// Errors that can occur during email validation.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EmailValidationError {
    #[error("Email is not valid.")]
    Invalid,
}

impl From<EmailValidationError> for AppError {
    fn from(e: EmailValidationError) -> Self {
        AppError::validation(e.to_string())
    }
}

/// Normalizes an email address and checks it against [`EMAIL_REGEX`].
///
/// Surrounding whitespace is trimmed and the address is lowercased before
/// matching. Normalizing an already normalized address returns it unchanged.
///
/// # Errors
///
/// Returns [`EmailValidationError::Invalid`] if the normalized value does not
/// look like `local@domain.tld`.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(validate_email(" Ada@Example.com ").unwrap(), "ada@example.com");
/// assert!(validate_email("bad-email").is_err());
/// ```
pub fn validate_email(raw: &str) -> Result<String, EmailValidationError> {
    let normalized = raw.trim().to_lowercase();

    if !EMAIL_REGEX.is_match(&normalized) {
        return Err(EmailValidationError::Invalid);
    }

    Ok(normalized)
}
