use axum::{extract::State, Json};

use crate::error::Result;
use crate::models::{DonationSubmission, Submission};
use crate::routes::SubmitResponse;
use crate::store::DocumentStore;
use crate::AppState;

/// Record a food donation
///
/// Validates required-field presence only, then appends exactly one
/// document to the donations collection. The store assigns the record's
/// timestamp at write time.
pub async fn submit_donation(
    State(state): State<AppState>,
    Json(payload): Json<DonationSubmission>,
) -> Result<Json<SubmitResponse>> {
    payload.validate()?;

    let kind = DonationSubmission::KIND;
    let document = payload.into_document();
    let receipt = state.store.append(kind.collection(), document).await?;

    tracing::info!(
        "Donation recorded: collection={} id={}",
        kind.collection(),
        receipt.id
    );

    Ok(Json(SubmitResponse {
        success: true,
        message: kind.success_message().to_string(),
        created_at: receipt.written_at_rfc3339(),
    }))
}
