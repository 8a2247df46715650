use axum::Json;
use serde_json::{json, Value};

/// Home endpoint with a short API listing
pub async fn home() -> Json<Value> {
    Json(json!({
        "message": "Food Donation Platform Backend API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "POST /api/donors": "Submit a food donation",
            "POST /api/ngos": "Submit an NGO food request",
            "GET /api/health": "Health check",
            "GET /": "This help message",
        },
    }))
}
