pub mod donations;
pub mod health;
pub mod home;
pub mod ngo_requests;

pub use donations::submit_donation;
pub use health::health_check;
pub use home::home;
pub use ngo_requests::submit_ngo_request;

use serde::Serialize;

/// Response body for a successful submission
#[derive(Debug, Serialize)]
pub struct SubmitResponse {
    pub success: bool,
    pub message: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}
