//! User management service.

use std::sync::Arc;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service implementing the user CRUD rules.
///
/// Emails are checked for uniqueness before every write. The repository's own
/// constraint handling covers the window between the check and the write.
pub struct UserService {
    repository: Arc<dyn UserRepository>,
}

impl UserService {
    /// Creates a new user service over any repository backend.
    pub fn new(repository: Arc<dyn UserRepository>) -> Self {
        Self { repository }
    }

    /// Lists every user ordered by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn list_users(&self) -> Result<Vec<User>, AppError> {
        self.repository.find_all().await
    }

    /// Retrieves a user by id.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn get_user(&self, id: i64) -> Result<User, AppError> {
        self.repository
            .find_by_id(id)
            .await?
            .ok_or(AppError::NotFound)
    }

    /// Creates a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Conflict`] if the email (or phone) is already taken.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn create_user(&self, new_user: NewUser) -> Result<User, AppError> {
        if self
            .repository
            .find_by_email(&new_user.email)
            .await?
            .is_some()
        {
            tracing::debug!(email = %new_user.email, "Rejected duplicate email on create");
            return Err(AppError::email_taken());
        }

        let user = self.repository.insert(new_user).await?;
        tracing::info!(user_id = user.id, "User created");

        Ok(user)
    }

    /// Applies a partial update to a user.
    ///
    /// An empty patch returns the stored user unchanged. A new email is
    /// rejected only when it belongs to a different user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Conflict`] if the email (or phone) is taken by another user.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn update_user(&self, id: i64, patch: UserPatch) -> Result<User, AppError> {
        let existing = self.get_user(id).await?;

        if let Some(email) = patch.email.as_deref()
            && let Some(owner) = self.repository.find_by_email(email).await?
            && owner.id != id
        {
            tracing::debug!(user_id = id, email, "Rejected email already owned by another user");
            return Err(AppError::email_taken());
        }

        if patch.is_empty() {
            return Ok(existing);
        }

        let user = self
            .repository
            .update(id, patch)
            .await?
            .ok_or(AppError::NotFound)?;
        tracing::info!(user_id = id, "User updated");

        Ok(user)
    }

    /// Deletes a user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the user does not exist.
    /// Returns [`AppError::Internal`] on storage errors.
    pub async fn delete_user(&self, id: i64) -> Result<(), AppError> {
        self.get_user(id).await?;

        if !self.repository.delete(id).await? {
            return Err(AppError::NotFound);
        }
        tracing::info!(user_id = id, "User deleted");

        Ok(())
    }

    /// Verifies that storage answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if storage is unreachable.
    pub async fn check_storage(&self) -> Result<(), AppError> {
        self.repository.ping().await
    }
}
