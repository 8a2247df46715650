/// Collection receiving donor submissions
pub const DONATIONS_COLLECTION: &str = "donations";

/// Collection receiving NGO request submissions
pub const NGO_REQUESTS_COLLECTION: &str = "ngoRequests";

/// Document field carrying the store-assigned creation time
pub const TIMESTAMP_FIELD: &str = "timestamp";

/// Document field carrying the submission kind tag
pub const TYPE_FIELD: &str = "type";

// =============================================================================
// User-Facing Messages
// =============================================================================

/// Confirmation shown after a successful donor submission
pub const DONATION_SUCCESS_MESSAGE: &str =
    "Donation submitted successfully! Your food donation has been recorded.";

/// Confirmation shown after a successful NGO request submission
pub const NGO_SUCCESS_MESSAGE: &str =
    "NGO request submitted successfully! Your food request has been recorded.";

/// Generic error shown when a donor submission fails
pub const DONATION_ERROR_MESSAGE: &str = "Error submitting donation. Please try again.";

/// Generic error shown when an NGO request submission fails
pub const NGO_ERROR_MESSAGE: &str = "Error submitting NGO request. Please try again.";

// =============================================================================
// Submit Button Labels
// =============================================================================

/// Label shown while a submission is in flight
pub const SUBMITTING_LABEL: &str = "Submitting...";

/// Idle label on the donor form's submit button
pub const DONATION_IDLE_LABEL: &str = "Submit Donation";

/// Idle label on the NGO form's submit button
pub const NGO_IDLE_LABEL: &str = "Submit Request";
