//! Shared application state injected into every handler.

use std::sync::Arc;

use crate::application::services::UserService;
use crate::domain::repositories::UserRepository;

/// Handler context, built once at startup and cloned per request.
#[derive(Clone)]
pub struct AppState {
    pub user_service: Arc<UserService>,
}

impl AppState {
    pub fn new(user_service: Arc<UserService>) -> Self {
        Self { user_service }
    }

    /// Wires a [`UserService`] over the given repository.
    pub fn from_repository(repository: Arc<dyn UserRepository>) -> Self {
        Self::new(Arc::new(UserService::new(repository)))
    }
}
