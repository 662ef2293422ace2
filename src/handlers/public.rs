use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::{json, Value};

use crate::config::Environment;
use crate::database::manager::DatabaseManager;

use super::AppState;

/// GET / - service banner
pub async fn root() -> Json<Value> {
    let version = env!("CARGO_PKG_VERSION");

    Json(json!({
        "success": true,
        "data": {
            "name": "Pharmacy Inventory API",
            "version": version,
            "description": "Drug inventory backend: stock, releases and short-expiry alerts",
            "endpoints": {
                "products": "/products[/:id]",
                "stocks": "/stocks[/:id]",
                "releases": "/releases[/:id]",
                "users": "/users[/:id]",
                "shortexpiry": "/shortexpiry?days=N",
                "summary": "/summary",
                "auth": "/signup, /signin, /forgot-password",
                "health": "/health",
            }
        }
    }))
}

/// GET /health - 200 when the database answers, 503 otherwise
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let now = chrono::Utc::now();

    match DatabaseManager::health_check(&state.pool).await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "database": "ok"
                }
            })),
        ),
        Err(e) => {
            // Connection strings can leak through driver errors
            let detail = if state.config.environment == Environment::Production {
                "unavailable".to_string()
            } else {
                e.to_string()
            };
            (
                StatusCode::SERVICE_UNAVAILABLE,
                Json(json!({
                    "success": false,
                    "error": "database unavailable",
                    "code": "SERVICE_UNAVAILABLE",
                    "data": {
                        "status": "degraded",
                        "timestamp": now,
                        "database_error": detail
                    }
                })),
            )
        }
    }
}
