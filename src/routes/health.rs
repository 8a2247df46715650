use axum::{extract::State, Json};
use serde_json::{json, Value};

use crate::AppState;

/// Health check endpoint
///
/// Returns the health status of the service and its document store.
/// Used by load balancers and monitoring systems.
pub async fn health_check(State(state): State<AppState>) -> Json<Value> {
    let store_status = if state.store.ping().await {
        "connected"
    } else {
        "disconnected"
    };

    Json(json!({
        "status": if store_status == "connected" { "healthy" } else { "unhealthy" },
        "service": "Food Donation Platform Backend",
        "database": store_status,
        "environment": state.config.environment,
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
