pub mod donation;
pub mod kind;
pub mod request;

pub use donation::{DonationSubmission, ExpiryHours};
pub use kind::FormKind;
pub use request::NgoRequestSubmission;

use crate::store::Document;

/// A form payload that can become exactly one stored record
pub trait Submission {
    /// The form this payload originates from
    const KIND: FormKind;

    /// Build the record to append: the submitted fields plus the kind's
    /// type tag. The store adds the timestamp.
    fn into_document(self) -> Document;
}
