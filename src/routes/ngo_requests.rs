use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{NgoRequestSubmission, Submission};
use crate::routes::SubmitResponse;
use crate::store::DocumentStore;
use crate::AppState;

/// Record an NGO food request
///
/// Mirrors the donation handler: presence validation, one document
/// appended to the ngoRequests collection, store-assigned timestamp.
pub async fn submit_ngo_request(
    State(state): State<AppState>,
    Json(payload): Json<NgoRequestSubmission>,
) -> Result<Json<SubmitResponse>> {
    payload.validate()?;

    let kind = NgoRequestSubmission::KIND;
    let document = payload.into_document();
    let receipt = state.store.append(kind.collection(), document).await?;

    tracing::info!(
        "NGO request recorded: collection={} id={}",
        kind.collection(),
        receipt.id
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: kind.success_message().to_string(),
        created_at: receipt.written_at_rfc3339(),
    }))
}
