//! Domain entity representing a registered user.

use chrono::{DateTime, Utc};

use crate::utils::email_normalizer::{EmailValidationError, validate_email};

/// A stored user record.
///
/// `email` is always held in normalized form. `created_at` is assigned by
/// storage and never leaves the service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub created_at: DateTime<Utc>,
}

/// Input data for inserting a new user.
///
/// Build it with [`NewUser::new`] so the email is normalized and validated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl NewUser {
    /// Creates insert input, normalizing the email.
    ///
    /// # Errors
    ///
    /// Returns [`EmailValidationError::Invalid`] if the email is malformed.
    pub fn new(
        first_name: String,
        last_name: String,
        email: &str,
        phone: String,
    ) -> Result<Self, EmailValidationError> {
        Ok(Self {
            first_name,
            last_name,
            email: validate_email(email)?,
            phone,
        })
    }
}

/// Partial update of a user. `None` leaves a column unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPatch {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UserPatch {
    /// Sets a new email, normalizing it first.
    ///
    /// # Errors
    ///
    /// Returns [`EmailValidationError::Invalid`] if the email is malformed.
    pub fn set_email(&mut self, raw: &str) -> Result<(), EmailValidationError> {
        self.email = Some(validate_email(raw)?);
        Ok(())
    }

    /// True when no column would change.
    pub fn is_empty(&self) -> bool {
        self.first_name.is_none()
            && self.last_name.is_none()
            && self.email.is_none()
            && self.phone.is_none()
    }

    /// Applies the patch to an in-memory copy of a user.
    pub fn apply_to(self, user: &mut User) {
        if let Some(first_name) = self.first_name {
            user.first_name = first_name;
        }
        if let Some(last_name) = self.last_name {
            user.last_name = last_name;
        }
        if let Some(email) = self.email {
            user.email = email;
        }
        if let Some(phone) = self.phone {
            user.phone = phone;
        }
    }
}
