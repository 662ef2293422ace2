use axum::extract::{Path, State};
use tracing::info;

use crate::api::{ApiResponse, ApiResult, JsonBody};
use crate::database::manager::DatabaseError;
use crate::database::models::{Record, User};
use crate::database::repository::{Repository, Table};
use crate::error::ApiError;

use super::AppState;

/// POST /users
pub async fn create(
    State(state): State<AppState>,
    JsonBody(user): JsonBody<User>,
) -> ApiResult<User> {
    user.validate()?;
    let row = Repository::<User>::new(state.pool)
        .insert(user.fields())
        .await
        .map_err(taken)?;
    info!("Created user {} ({})", row.user_id, row.username);
    Ok(ApiResponse::created(row))
}

/// PUT /users/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(user): JsonBody<User>,
) -> ApiResult<User> {
    user.validate()?;
    let row = Repository::<User>::new(state.pool)
        .update(id, user.fields())
        .await
        .map_err(taken)?;
    info!("Updated user {}", id);
    Ok(ApiResponse::success(row))
}

/// Unique username/email violations read the same for users and accounts
pub(super) fn taken(err: DatabaseError) -> ApiError {
    match err {
        DatabaseError::Conflict(_) => ApiError::conflict("Username or Email already taken"),
        other => other.into(),
    }
}
