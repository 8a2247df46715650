//! Integration tests for the Food Donation Platform Backend API
//!
//! These tests verify the complete request/response cycle for all endpoints
//! and that accepted submissions land verbatim in the right collection.

use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::{get, post},
    Router,
};
use http_body_util::BodyExt;
use redb::{Database, ReadableTable, TableDefinition};
use serde_json::{json, Value};
use std::sync::Arc;
use tempfile::TempDir;
use tower::ServiceExt;

use food_donation_server::store::{tables, RedbStore};

// =============================================================================
// Test Helpers
// =============================================================================

/// Create a test configuration
fn test_config() -> food_donation_server::Config {
    food_donation_server::Config {
        server_host: "127.0.0.1".to_string(),
        server_port: 0,                // Random port
        database_path: "".to_string(), // Will be set per test
        allowed_origins: vec!["http://localhost:3000".to_string()],
        environment: "test".to_string(),
    }
}

/// Create a test database in a temporary directory
fn create_test_db(temp_dir: &TempDir) -> Arc<Database> {
    let db_path = temp_dir.path().join("test.db");
    let db = Database::create(&db_path).expect("Failed to create test database");

    // Initialize collection tables
    let write_txn = db.begin_write().unwrap();
    {
        let _ = write_txn.open_table(tables::DONATIONS).unwrap();
        let _ = write_txn.open_table(tables::NGO_REQUESTS).unwrap();
    }
    write_txn.commit().unwrap();

    Arc::new(db)
}

/// Create a test app router
fn create_test_app(db: Arc<Database>) -> Router {
    use food_donation_server::routes::*;

    let config = test_config();
    let state = food_donation_server::AppState {
        store: RedbStore::new(db),
        config,
    };

    Router::new()
        .route("/", get(home))
        .route("/api/health", get(health_check))
        .route("/api/donors", post(submit_donation))
        .route("/api/ngos", post(submit_ngo_request))
        .with_state(state)
}

/// Read every document in a collection table back as JSON
fn read_documents(db: &Arc<Database>, table: TableDefinition<u64, &[u8]>) -> Vec<Value> {
    let read_txn = db.begin_read().unwrap();
    let table = read_txn.open_table(table).unwrap();
    table
        .iter()
        .unwrap()
        .map(|entry| {
            let (_, bytes) = entry.unwrap();
            serde_json::from_slice(bytes.value()).unwrap()
        })
        .collect()
}

/// Parse response body as JSON
async fn body_to_json(body: Body) -> Value {
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Create a POST request with JSON body
fn make_post_request(uri: &str, body: String) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(body))
        .unwrap()
}

/// Create a GET request
fn make_get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// A complete donor payload
fn donor_body() -> Value {
    json!({
        "foodType": "Rice",
        "quantity": "5kg",
        "expiryTime": "24",
        "location": "Downtown"
    })
}

/// A complete NGO payload
fn ngo_body() -> Value {
    json!({
        "ngoName": "Food Bank NYC",
        "foodNeeded": "Rice, Bread, Vegetables",
        "location": "Manhattan, NY"
    })
}

// =============================================================================
// Health and Metadata Tests
// =============================================================================

#[tokio::test]
async fn test_health_check_returns_healthy() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db);

    let response = app.oneshot(make_get_request("/api/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");
    assert!(body["version"].as_str().is_some());
}

#[tokio::test]
async fn test_home_lists_endpoints() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db);

    let response = app.oneshot(make_get_request("/")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert!(body["endpoints"]["POST /api/donors"].as_str().is_some());
    assert!(body["endpoints"]["POST /api/ngos"].as_str().is_some());
}

// =============================================================================
// Donor Submission Tests
// =============================================================================

#[tokio::test]
async fn test_submit_donation_creates_one_record() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let before = chrono::Utc::now().timestamp();
    let response = app
        .oneshot(make_post_request("/api/donors", donor_body().to_string()))
        .await
        .unwrap();
    let after = chrono::Utc::now().timestamp();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "Donation submitted successfully! Your food donation has been recorded."
    );
    assert!(body["createdAt"].as_str().is_some());

    let donations = read_documents(&db, tables::DONATIONS);
    assert_eq!(donations.len(), 1);

    let record = &donations[0];
    assert_eq!(record["foodType"], "Rice");
    assert_eq!(record["quantity"], "5kg");
    assert_eq!(record["expiryTime"], 24);
    assert_eq!(record["location"], "Downtown");
    assert_eq!(record["type"], "donor");

    let timestamp = record["timestamp"].as_i64().unwrap();
    assert!(timestamp >= before && timestamp <= after);

    // Nothing leaked into the other collection
    assert!(read_documents(&db, tables::NGO_REQUESTS).is_empty());
}

#[tokio::test]
async fn test_submit_donation_numeric_expiry() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = donor_body();
    body["expiryTime"] = json!(48);

    let response = app
        .oneshot(make_post_request("/api/donors", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let donations = read_documents(&db, tables::DONATIONS);
    assert_eq!(donations[0]["expiryTime"], 48);
}

#[tokio::test]
async fn test_submit_donation_unparseable_expiry_is_tolerated() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = donor_body();
    body["expiryTime"] = json!("a few days");

    let response = app
        .oneshot(make_post_request("/api/donors", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let donations = read_documents(&db, tables::DONATIONS);
    assert_eq!(donations.len(), 1);
    assert_eq!(donations[0]["expiryTime"], Value::Null);
}

#[tokio::test]
async fn test_submit_donation_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = donor_body();
    body.as_object_mut().unwrap().remove("foodType");

    let response = app
        .oneshot(make_post_request("/api/donors", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Missing required field: foodType");

    // Nothing was written
    assert!(read_documents(&db, tables::DONATIONS).is_empty());
}

#[tokio::test]
async fn test_submit_donation_blank_location() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = donor_body();
    body["location"] = json!("   ");

    let response = app
        .oneshot(make_post_request("/api/donors", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["error"], "Missing required field: location");
    assert!(read_documents(&db, tables::DONATIONS).is_empty());
}

#[tokio::test]
async fn test_submit_donation_ignores_client_timestamp() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = donor_body();
    body["timestamp"] = json!(12345);

    let response = app
        .oneshot(make_post_request("/api/donors", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let donations = read_documents(&db, tables::DONATIONS);
    let timestamp = donations[0]["timestamp"].as_i64().unwrap();
    assert_ne!(timestamp, 12345);
    assert!(timestamp >= chrono::Utc::now().timestamp() - 60);
}

#[tokio::test]
async fn test_double_submission_creates_duplicate_records() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);

    // The HTTP layer has no duplicate guard: two identical submissions
    // are two records
    for _ in 0..2 {
        let app = create_test_app(db.clone());
        let response = app
            .oneshot(make_post_request("/api/donors", donor_body().to_string()))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
    }

    assert_eq!(read_documents(&db, tables::DONATIONS).len(), 2);
}

// =============================================================================
// NGO Request Submission Tests
// =============================================================================

#[tokio::test]
async fn test_submit_ngo_request_creates_one_record() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let response = app
        .oneshot(make_post_request("/api/ngos", ngo_body().to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["success"], true);
    assert_eq!(
        body["message"],
        "NGO request submitted successfully! Your food request has been recorded."
    );

    let requests = read_documents(&db, tables::NGO_REQUESTS);
    assert_eq!(requests.len(), 1);

    let record = &requests[0];
    assert_eq!(record["ngoName"], "Food Bank NYC");
    assert_eq!(record["foodNeeded"], "Rice, Bread, Vegetables");
    assert_eq!(record["location"], "Manhattan, NY");
    assert_eq!(record["type"], "ngo");
    assert!(record["timestamp"].as_i64().is_some());

    assert!(read_documents(&db, tables::DONATIONS).is_empty());
}

#[tokio::test]
async fn test_submit_ngo_request_missing_field() {
    let temp_dir = TempDir::new().unwrap();
    let db = create_test_db(&temp_dir);
    let app = create_test_app(db.clone());

    let mut body = ngo_body();
    body.as_object_mut().unwrap().remove("ngoName");

    let response = app
        .oneshot(make_post_request("/api/ngos", body.to_string()))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = body_to_json(response.into_body()).await;
    assert_eq!(body["error"], "Missing required field: ngoName");
    assert!(read_documents(&db, tables::NGO_REQUESTS).is_empty());
}
