//! In-memory implementation of the user repository.
//!
//! Used for tests and local experiments. Enforces the same uniqueness rules
//! as the `users` table constraints.

use async_trait::async_trait;
use chrono::Utc;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

use crate::domain::entities::{NewUser, User, UserPatch};
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

#[derive(Default)]
struct Table {
    last_id: i64,
    rows: BTreeMap<i64, User>,
}

impl Table {
    /// Checks `email` and `phone` against every row except `skip_id`.
    fn check_unique(
        &self,
        email: Option<&str>,
        phone: Option<&str>,
        skip_id: Option<i64>,
    ) -> Result<(), AppError> {
        let others = self.rows.values().filter(|u| Some(u.id) != skip_id);

        for user in others {
            if email.is_some_and(|e| e == user.email) {
                return Err(AppError::email_taken());
            }
            if phone.is_some_and(|p| p == user.phone) {
                return Err(AppError::phone_taken());
            }
        }

        Ok(())
    }
}

/// User repository backed by a `BTreeMap` behind an async lock.
///
/// Ids are assigned sequentially starting at 1 and never reused.
#[derive(Default)]
pub struct InMemoryUserRepository {
    table: RwLock<Table>,
}

impl InMemoryUserRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|u| u.email == email).cloned())
    }

    async fn insert(&self, new_user: NewUser) -> Result<User, AppError> {
        let mut table = self.table.write().await;
        table.check_unique(Some(&new_user.email), Some(&new_user.phone), None)?;

        table.last_id += 1;
        let user = User {
            id: table.last_id,
            first_name: new_user.first_name,
            last_name: new_user.last_name,
            email: new_user.email,
            phone: new_user.phone,
            created_at: Utc::now(),
        };
        table.rows.insert(user.id, user.clone());

        Ok(user)
    }

    async fn update(&self, id: i64, patch: UserPatch) -> Result<Option<User>, AppError> {
        let mut table = self.table.write().await;
        if !table.rows.contains_key(&id) {
            return Ok(None);
        }

        table.check_unique(patch.email.as_deref(), patch.phone.as_deref(), Some(id))?;

        let Some(user) = table.rows.get_mut(&id) else {
            return Ok(None);
        };
        patch.apply_to(user);

        Ok(Some(user.clone()))
    }

    async fn delete(&self, id: i64) -> Result<bool, AppError> {
        let mut table = self.table.write().await;
        Ok(table.rows.remove(&id).is_some())
    }

    async fn ping(&self) -> Result<(), AppError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_user(email: &str, phone: &str) -> NewUser {
        NewUser::new("Ada".to_string(), "Lovelace".to_string(), email, phone.to_string())
            .unwrap()
    }

    #[tokio::test]
    async fn test_insert_assigns_sequential_ids() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(new_user("a@example.com", "1")).await.unwrap();
        let second = repo.insert(new_user("b@example.com", "2")).await.unwrap();

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_ids_are_not_reused_after_delete() {
        let repo = InMemoryUserRepository::new();

        let first = repo.insert(new_user("a@example.com", "1")).await.unwrap();
        assert!(repo.delete(first.id).await.unwrap());

        let second = repo.insert(new_user("b@example.com", "2")).await.unwrap();
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("a@example.com", "1")).await.unwrap();

        let result = repo.insert(new_user("a@example.com", "2")).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        assert_eq!(repo.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_insert_rejects_duplicate_phone() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("a@example.com", "1")).await.unwrap();

        let result = repo.insert(new_user("b@example.com", "1")).await;

        let err = result.unwrap_err();
        assert_eq!(err.to_string(), "Phone number already taken");
    }

    #[tokio::test]
    async fn test_update_allows_keeping_own_email() {
        let repo = InMemoryUserRepository::new();
        let user = repo.insert(new_user("a@example.com", "1")).await.unwrap();

        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            first_name: Some("Augusta".to_string()),
            ..Default::default()
        };
        let updated = repo.update(user.id, patch).await.unwrap().unwrap();

        assert_eq!(updated.first_name, "Augusta");
        assert_eq!(updated.email, "a@example.com");
    }

    #[tokio::test]
    async fn test_update_rejects_other_users_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("a@example.com", "1")).await.unwrap();
        let second = repo.insert(new_user("b@example.com", "2")).await.unwrap();

        let patch = UserPatch {
            email: Some("a@example.com".to_string()),
            ..Default::default()
        };
        let result = repo.update(second.id, patch).await;

        assert!(matches!(result, Err(AppError::Conflict(_))));
        let unchanged = repo.find_by_id(second.id).await.unwrap().unwrap();
        assert_eq!(unchanged.email, "b@example.com");
    }

    #[tokio::test]
    async fn test_update_missing_returns_none() {
        let repo = InMemoryUserRepository::new();

        let result = repo.update(42, UserPatch::default()).await.unwrap();

        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_find_by_email() {
        let repo = InMemoryUserRepository::new();
        repo.insert(new_user("find@example.com", "1")).await.unwrap();

        assert!(repo.find_by_email("find@example.com").await.unwrap().is_some());
        assert!(repo.find_by_email("other@example.com").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_missing_returns_false() {
        let repo = InMemoryUserRepository::new();
        assert!(!repo.delete(1).await.unwrap());
    }
}
