use axum::extract::{Path, State};
use tracing::info;

use crate::api::{ApiResponse, ApiResult, JsonBody};
use crate::database::models::{Product, Record, Release};
use crate::database::repository::{Repository, Table};
use crate::error::ApiError;

use super::AppState;

/// POST /releases - the referenced product must exist
pub async fn create(
    State(state): State<AppState>,
    JsonBody(release): JsonBody<Release>,
) -> ApiResult<Release> {
    release.validate()?;
    ensure_product(&state, release.product_id).await?;

    let row = Repository::<Release>::new(state.pool)
        .insert(release.fields())
        .await?;
    info!("Created release {} for product {}", row.release_id, row.product_id);
    Ok(ApiResponse::created(row))
}

/// PUT /releases/:id
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(release): JsonBody<Release>,
) -> ApiResult<Release> {
    release.validate()?;
    ensure_product(&state, release.product_id).await?;

    let row = Repository::<Release>::new(state.pool)
        .update(id, release.fields())
        .await?;
    info!("Updated release {}", id);
    Ok(ApiResponse::success(row))
}

async fn ensure_product(state: &AppState, product_id: i32) -> Result<(), ApiError> {
    let exists = Repository::<Product>::new(state.pool.clone())
        .exists(product_id)
        .await?;
    if !exists {
        return Err(ApiError::bad_request(format!("Product ID {} does not exist.", product_id)));
    }
    Ok(())
}
