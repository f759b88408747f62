//! Handlers for the user collection and item endpoints.

use axum::{
    Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
};

use crate::api::dto::user::{CreateUserRequest, MessageResponse, UpdateUserRequest, UserResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Resolves the `{id}` path segment.
///
/// Anything that is not an integer cannot name a user, so it is reported as
/// not found rather than as a bad request.
fn user_id(path: Result<Path<i64>, PathRejection>) -> Result<i64, AppError> {
    path.map(|Path(id)| id).map_err(|_| AppError::NotFound)
}

/// Lists all users.
///
/// # Endpoint
///
/// `GET /users`
///
/// Returns a JSON array ordered by id; an empty table yields `[]`.
pub async fn list_users_handler(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = state.user_service.list_users().await?;

    Ok(Json(users.into_iter().map(UserResponse::from).collect()))
}

/// Creates a user.
///
/// # Endpoint
///
/// `POST /users`
///
/// # Request Body
///
/// ```json
/// {
///   "first_name": "Ada",
///   "last_name": "Lovelace",
///   "email": " Ada@Example.com ",
///   "phone": "123"
/// }
/// ```
///
/// # Errors
///
/// Returns 400 if a field is missing or the email is malformed.
/// Returns 422 if the email is already taken.
/// Returns 500 on storage errors.
pub async fn create_user_handler(
    State(state): State<AppState>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let Json(payload) = payload?;
    let new_user = payload.into_new_user()?;

    let user = state.user_service.create_user(new_user).await?;

    Ok(Json(
        MessageResponse::ok("User account created successfully").with_data(user),
    ))
}

/// Returns a single user.
///
/// # Endpoint
///
/// `GET /users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this id.
pub async fn get_user_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<UserResponse>, AppError> {
    let id = user_id(path)?;
    let user = state.user_service.get_user(id).await?;

    Ok(Json(user.into()))
}

/// Partially updates a user.
///
/// # Endpoint
///
/// `PATCH /users/{id}`
///
/// Only fields present with a non-empty value are changed. A new email is
/// normalized and must not belong to another user.
///
/// # Errors
///
/// Returns 404 if no user has this id.
/// Returns 400 if the email is malformed.
/// Returns 422 if the email is taken by another user.
/// Returns 500 on storage errors.
pub async fn update_user_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = user_id(path)?;

    let patch = match payload
        .map_err(AppError::from)
        .and_then(|Json(payload)| payload.into_patch())
    {
        Ok(patch) => patch,
        Err(e) => {
            // An unknown id is reported as 404 even when the body is invalid.
            state.user_service.get_user(id).await?;
            return Err(e);
        }
    };

    let user = state.user_service.update_user(id, patch).await?;

    Ok(Json(
        MessageResponse::ok("Account updated successfully").with_data(user),
    ))
}

/// Deletes a user.
///
/// # Endpoint
///
/// `DELETE /users/{id}`
///
/// # Errors
///
/// Returns 404 if no user has this id.
/// Returns 500 on storage errors.
pub async fn delete_user_handler(
    State(state): State<AppState>,
    path: Result<Path<i64>, PathRejection>,
) -> Result<Json<MessageResponse>, AppError> {
    let id = user_id(path)?;
    state.user_service.delete_user(id).await?;

    Ok(Json(MessageResponse::ok(format!(
        "User with id {id} was deleted successfully"
    ))))
}
