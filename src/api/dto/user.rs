//! DTOs for the user endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::error::AppError;

/// Request body for `POST /users`.
///
/// Every field is optional in the JSON, but all four must be present and
/// non-empty for the request to pass validation.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateUserRequest {
    #[validate(
        required(message = "first_name is required"),
        length(min = 1, message = "first_name must not be empty")
    )]
    pub first_name: Option<String>,

    #[validate(
        required(message = "last_name is required"),
        length(min = 1, message = "last_name must not be empty")
    )]
    pub last_name: Option<String>,

    #[validate(required(message = "email is required"))]
    pub email: Option<String>,

    #[validate(
        required(message = "phone is required"),
        length(min = 1, message = "phone must not be empty")
    )]
    pub phone: Option<String>,
}

impl CreateUserRequest {
    /// Validates the request and converts it into insert input.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if a field is missing or the email is malformed.
    pub fn into_new_user(self) -> Result<NewUser, AppError> {
        self.validate()?;

        let new_user = NewUser::new(
            self.first_name.unwrap_or_default(),
            self.last_name.unwrap_or_default(),
            self.email.as_deref().unwrap_or_default(),
            self.phone.unwrap_or_default(),
        )?;

        Ok(new_user)
    }
}

/// Request body for `PATCH /users/{id}`.
///
/// Absent, `null` and empty-string fields are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateUserRequest {
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl UpdateUserRequest {
    /// Converts the request into a patch, normalizing a supplied email.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the email is malformed.
    pub fn into_patch(self) -> Result<UserPatch, AppError> {
        let mut patch = UserPatch {
            first_name: non_empty(self.first_name),
            last_name: non_empty(self.last_name),
            email: None,
            phone: non_empty(self.phone),
        };

        if let Some(email) = non_empty(self.email) {
            patch.set_email(&email)?;
        }

        Ok(patch)
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

/// Serialized user. `created_at` is deliberately absent.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            first_name: u.first_name,
            last_name: u.last_name,
            email: u.email,
            phone: u.phone,
        }
    }
}

/// Confirmation body for successful writes.
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<UserResponse>,
}

impl MessageResponse {
    pub fn ok(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            code: 200,
            data: None,
        }
    }

    pub fn with_data(mut self, user: User) -> Self {
        self.data = Some(user.into());
        self
    }
}
