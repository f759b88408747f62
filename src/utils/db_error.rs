//! Translation of storage constraint violations into [`AppError`]s.

use crate::error::AppError;

/// Unique constraint on `users.email`.
pub const EMAIL_UNIQUE_CONSTRAINT: &str = "uq_users_email";

/// Unique constraint on `users.phone`.
pub const PHONE_UNIQUE_CONSTRAINT: &str = "uq_users_phone";

/// Returns the violated constraint name if `e` is a unique violation.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Maps an error from an `INSERT` or `UPDATE` on `users`.
///
/// Unique violations become the same 422 conflicts the application-level
/// pre-checks produce; everything else is internal.
pub fn map_user_write_error(e: sqlx::Error) -> AppError {
    let conflict = match unique_violation_constraint(&e) {
        Some(EMAIL_UNIQUE_CONSTRAINT) => Some(AppError::email_taken()),
        Some(PHONE_UNIQUE_CONSTRAINT) => Some(AppError::phone_taken()),
        Some(other) => Some(AppError::conflict(format!(
            "Unique constraint violation: {other}"
        ))),
        None => None,
    };

    conflict.unwrap_or_else(|| AppError::from(e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_database_error_is_not_a_unique_violation() {
        assert!(unique_violation_constraint(&sqlx::Error::RowNotFound).is_none());
        assert!(unique_violation_constraint(&sqlx::Error::PoolTimedOut).is_none());
    }

    #[test]
    fn test_non_database_error_maps_to_internal() {
        let err = map_user_write_error(sqlx::Error::PoolTimedOut);
        assert!(matches!(err, AppError::Internal(_)));
    }
}
