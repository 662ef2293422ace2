use axum::extract::{Query, State};
use serde::Deserialize;

use crate::api::{ApiResponse, ApiResult};
use crate::database::models::{ShortExpiry, Summary};
use crate::database::service;
use crate::error::ApiError;

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct ShortExpiryQuery {
    /// Alert window in days; falls back to INVENTORY_SHORT_EXPIRY_DAYS
    pub days: Option<i32>,
}

/// GET /shortexpiry[?days=N]
pub async fn short_expiry(
    State(state): State<AppState>,
    Query(query): Query<ShortExpiryQuery>,
) -> ApiResult<Vec<ShortExpiry>> {
    let days = query.days.unwrap_or(state.config.inventory.short_expiry_days);
    if days < 0 {
        return Err(ApiError::bad_request("days must not be negative"));
    }
    let rows = service::short_expiry(&state.pool, days).await?;
    Ok(ApiResponse::success(rows))
}

/// GET /summary
pub async fn summary(State(state): State<AppState>) -> ApiResult<Summary> {
    let summary = service::summary(&state.pool, state.config.inventory.short_expiry_days).await?;
    Ok(ApiResponse::success(summary))
}
