//! User record API endpoints.

use std::sync::Arc;

use api_protocol::{
    requests::UserFormBody,
    responses::{MessageResponse, UpdatedUserResponse, UserResponse, UsersResponse},
};
use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use entities::UserDraft;
use user_store::UserStore;
use uuid::Uuid;

use crate::error::{ApiError, ApiResult};
use crate::state::AppState;

const FORM_NOT_SUBMITTED: &str = "Form not submitted correctly.";

/// Extracts a draft from a request body.
///
/// An unreadable body, a missing field, and a non-string field all collapse
/// into the same validation failure; field content is checked afterwards.
fn parse_form(payload: Result<Json<UserFormBody>, JsonRejection>) -> ApiResult<UserDraft> {
    let Json(body) = payload.map_err(|_| ApiError::Validation(FORM_NOT_SUBMITTED.to_string()))?;
    body.into_draft()
        .ok_or_else(|| ApiError::Validation(FORM_NOT_SUBMITTED.to_string()))
}

/// Parses a path identifier into a UUID.
fn parse_id(id: &str) -> ApiResult<Uuid> {
    id.parse().map_err(|_| ApiError::InvalidId)
}

/// Validates field content, concatenating every failing field's message.
fn validate_draft(draft: &UserDraft) -> ApiResult<()> {
    draft
        .validate()
        .map_err(|messages| ApiError::Validation(messages.join(",")))
}

/// Creates a user record.
pub async fn create_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    payload: Result<Json<UserFormBody>, JsonRejection>,
) -> ApiResult<(StatusCode, Json<UserResponse>)> {
    let draft = parse_form(payload)?;
    validate_draft(&draft)?;

    // Create cannot fail with not-found; only duplicates are client faults.
    let user = state.store.create_user(draft).await.map_err(|e| match e {
        user_store::StoreError::Duplicate { field } => ApiError::Duplicate(field),
        other => ApiError::Internal(other),
    })?;

    tracing::info!(user_id = %user.id, "User created");

    Ok((
        StatusCode::CREATED,
        Json(UserResponse { user: user.into() }),
    ))
}

/// Lists all user records.
pub async fn list_users<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
) -> ApiResult<Json<UsersResponse>> {
    let users = state.store.list_users().await.map_err(ApiError::Internal)?;

    Ok(Json(UsersResponse {
        users: users.into_iter().map(Into::into).collect(),
    }))
}

/// Gets a user record by ID.
pub async fn get_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ApiResult<Json<UserResponse>> {
    let id = parse_id(&id)?;

    let user = state
        .store
        .get_user(id)
        .await
        .map_err(ApiError::Internal)?
        .ok_or(ApiError::NotFound("Could not find user."))?;

    Ok(Json(UserResponse { user: user.into() }))
}

/// Replaces all four business fields of a user record.
pub async fn update_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
    payload: Result<Json<UserFormBody>, JsonRejection>,
) -> ApiResult<Json<UpdatedUserResponse>> {
    // Body shape first, then identifier, then field content.
    let draft = parse_form(payload)?;
    let id = parse_id(&id)?;
    validate_draft(&draft)?;

    let user = state
        .store
        .update_user(id, draft)
        .await
        .map_err(|e| ApiError::from_store(e, "Could not update user."))?;

    tracing::info!(user_id = %user.id, "User updated");

    Ok(Json(UpdatedUserResponse {
        updated_user: user.into(),
    }))
}

/// Deletes a user record.
pub async fn delete_user<S: UserStore>(
    State(state): State<Arc<AppState<S>>>,
    Path(id): Path<String>,
) -> ApiResult<Json<MessageResponse>> {
    let id = parse_id(&id)?;

    state
        .store
        .delete_user(id)
        .await
        .map_err(|e| ApiError::from_store(e, "Could not delete user."))?;

    tracing::info!(user_id = %id, "User deleted");

    Ok(Json(MessageResponse {
        message: "User deleted successfully.".to_string(),
    }))
}
