//! Application error type shared by every layer.
//!
//! [`AppError`] is the only error handlers return. Its HTTP status and JSON
//! body are decided in one place, [`AppError::status_code`] and
//! [`AppError::to_error_body`], so handlers never build error responses by hand.

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use validator::ValidationErrors;

/// Errors produced while serving a request.
#[derive(Debug, Error)]
pub enum AppError {
    /// Malformed input, e.g. an email that does not match the accepted pattern.
    #[error("{0}")]
    Validation(String),

    /// A unique column already holds the submitted value.
    #[error("{0}")]
    Conflict(String),

    /// No user exists for the requested id.
    #[error("No user found")]
    NotFound,

    /// Storage failures and anything else unexpected.
    #[error("{0}")]
    Internal(String),
}

/// JSON body returned for every failed request.
///
/// `error` is only present for 400 and 500 responses.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub message: String,
    pub code: u16,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl AppError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::Conflict(message.into())
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }

    /// Conflict raised when another user already owns the email address.
    pub fn email_taken() -> Self {
        Self::conflict("Email address already taken")
    }

    /// Conflict raised when another user already owns the phone number.
    pub fn phone_taken() -> Self {
        Self::conflict("Phone number already taken")
    }

    /// HTTP status for each error kind.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Conflict(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::NotFound => StatusCode::NOT_FOUND,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Builds the JSON body sent to the client.
    pub fn to_error_body(&self) -> ErrorBody {
        let code = self.status_code().as_u16();
        match self {
            Self::Validation(detail) => ErrorBody {
                message: "An error was encountered".to_string(),
                code,
                error: Some(format!("Error: {detail}")),
            },
            Self::Conflict(message) => ErrorBody {
                message: message.clone(),
                code,
                error: None,
            },
            Self::NotFound => ErrorBody {
                message: self.to_string(),
                code,
                error: None,
            },
            Self::Internal(detail) => ErrorBody {
                message: "Internal Server Error".to_string(),
                code,
                error: Some(format!("Error: {detail}")),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let Self::Internal(detail) = &self {
            tracing::error!(error = %detail, "Request failed with internal error");
        }

        (self.status_code(), Json(self.to_error_body())).into_response()
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        Self::Internal(e.to_string())
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut messages: Vec<String> = errors
            .field_errors()
            .into_iter()
            .flat_map(|(field, errs)| {
                let field = field.to_string();
                errs.iter()
                    .map(move |e| match &e.message {
                        Some(message) => message.to_string(),
                        None => format!("{field} is invalid"),
                    })
                    .collect::<Vec<_>>()
            })
            .collect();
        messages.sort();
        messages.dedup();

        Self::Validation(messages.join("; "))
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Validation(rejection.body_text())
    }
}
