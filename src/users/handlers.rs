use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Json, Router,
};
use tracing::{info, instrument};
use uuid::Uuid;

use crate::{
    auth::jwt::AuthUser,
    error::ApiError,
    state::AppState,
    users::{
        dto::{MessageResponse, UserListItem},
        repo::{User, UserStatus},
    },
};

pub fn user_routes() -> Router<AppState> {
    Router::new()
        .route("/users", get(list_users))
        .route("/users/:id/block", post(block_user))
        .route("/users/:id/unblock", post(unblock_user))
        .route("/users/:id", delete(delete_user))
}

#[instrument(skip(state))]
pub async fn list_users(
    State(state): State<AppState>,
    AuthUser(_caller): AuthUser,
) -> Result<Json<Vec<UserListItem>>, ApiError> {
    let users = User::list_all(&state.db).await?;
    Ok(Json(users.into_iter().map(UserListItem::from).collect()))
}

#[instrument(skip(state))]
pub async fn block_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    set_status(&state, caller, id, UserStatus::Blocked).await?;
    Ok(Json(MessageResponse {
        message: "user blocked".into(),
    }))
}

#[instrument(skip(state))]
pub async fn unblock_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    set_status(&state, caller, id, UserStatus::Active).await?;
    Ok(Json(MessageResponse {
        message: "user unblocked".into(),
    }))
}

#[instrument(skip(state))]
pub async fn delete_user(
    State(state): State<AppState>,
    AuthUser(caller): AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<MessageResponse>, ApiError> {
    let removed = User::delete(&state.db, id).await?;
    if !removed {
        return Err(ApiError::NotFound("user not found".into()));
    }
    info!(user_id = %id, caller = %caller, "user deleted");
    Ok(Json(MessageResponse {
        message: "user deleted".into(),
    }))
}

/// Shared by block/unblock: the update is unconditional, so re-applying the
/// current status succeeds without changing anything.
async fn set_status(
    state: &AppState,
    caller: Uuid,
    id: Uuid,
    status: UserStatus,
) -> Result<(), ApiError> {
    let updated = User::set_status(&state.db, id, status).await?;
    if !updated {
        return Err(ApiError::NotFound("user not found".into()));
    }
    info!(user_id = %id, caller = %caller, status = ?status, "status updated");
    Ok(())
}
