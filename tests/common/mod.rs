#![allow(dead_code)]

use async_trait::async_trait;
use axum_test::TestServer;
use serde_json::{Value, json};
use std::sync::Arc;
use user_registry::domain::entities::{NewUser, User, UserPatch};
use user_registry::domain::repositories::UserRepository;
use user_registry::error::AppError;
use user_registry::infrastructure::persistence::InMemoryUserRepository;
use user_registry::routes::router;
use user_registry::state::AppState;

/// Repository whose every call fails, standing in for an unreachable database.
pub struct FailingRepository;

#[async_trait]
impl UserRepository for FailingRepository {
    async fn find_all(&self) -> Result<Vec<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_id(&self, _id: i64) -> Result<Option<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn insert(&self, _new_user: NewUser) -> Result<User, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn update(&self, _id: i64, _patch: UserPatch) -> Result<Option<User>, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn delete(&self, _id: i64) -> Result<bool, AppError> {
        Err(AppError::internal("connection refused"))
    }

    async fn ping(&self) -> Result<(), AppError> {
        Err(AppError::internal("connection refused"))
    }
}

pub fn create_test_state() -> AppState {
    AppState::from_repository(Arc::new(InMemoryUserRepository::new()))
}

pub fn make_server() -> TestServer {
    TestServer::new(router(create_test_state())).unwrap()
}

pub fn make_failing_server() -> TestServer {
    TestServer::new(router(AppState::from_repository(Arc::new(FailingRepository)))).unwrap()
}

pub fn ada() -> Value {
    json!({
        "first_name": "Ada",
        "last_name": "Lovelace",
        "email": " Ada@Example.com ",
        "phone": "123"
    })
}

pub fn grace() -> Value {
    json!({
        "first_name": "Grace",
        "last_name": "Hopper",
        "email": "grace@example.com",
        "phone": "456"
    })
}

/// Creates a user through the API and returns its id.
pub async fn create_user(server: &TestServer, body: Value) -> i64 {
    let response = server.post("/users").json(&body).await;
    response.assert_status_ok();
    response.json::<Value>()["data"]["id"].as_i64().unwrap()
}
