use axum::extract::{Path, State};
use serde_json::{json, Value};
use tracing::info;

use crate::api::{ApiResponse, ApiResult, JsonBody};
use crate::database::models::Record;
use crate::database::repository::{Repository, Table};

use super::AppState;

/// GET /{collection}
pub async fn list<T: Record + Table>(State(state): State<AppState>) -> ApiResult<Vec<T>> {
    let rows = Repository::<T>::new(state.pool).select_all().await?;
    Ok(ApiResponse::success(rows))
}

/// GET /{collection}/:id
pub async fn show<T: Record + Table>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<T> {
    let row = Repository::<T>::new(state.pool).select_404(id).await?;
    Ok(ApiResponse::success(row))
}

/// POST /{collection}
pub async fn create<T: Record + Table>(
    State(state): State<AppState>,
    JsonBody(record): JsonBody<T>,
) -> ApiResult<T> {
    record.validate()?;
    let row = Repository::<T>::new(state.pool).insert(record.fields()).await?;
    info!("Created {} {}", T::COLLECTION, row.key());
    Ok(ApiResponse::created(row))
}

/// PUT /{collection}/:id - replaces every writable column
pub async fn update<T: Record + Table>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    JsonBody(record): JsonBody<T>,
) -> ApiResult<T> {
    record.validate()?;
    let row = Repository::<T>::new(state.pool).update(id, record.fields()).await?;
    info!("Updated {} {}", T::COLLECTION, id);
    Ok(ApiResponse::success(row))
}

/// DELETE /{collection}/:id
pub async fn delete<T: Record + Table>(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> ApiResult<Value> {
    Repository::<T>::new(state.pool).delete(id).await?;
    info!("Deleted {} {}", T::COLLECTION, id);
    Ok(ApiResponse::success(json!({ "deleted": id })))
}
