use crate::constants::*;

/// Which of the two forms a submission originates from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Donor,
    Ngo,
}

impl FormKind {
    /// Constant tag written into every record of this kind
    pub fn type_tag(self) -> &'static str {
        match self {
            FormKind::Donor => "donor",
            FormKind::Ngo => "ngo",
        }
    }

    /// Collection this kind's records are appended to
    pub fn collection(self) -> &'static str {
        match self {
            FormKind::Donor => DONATIONS_COLLECTION,
            FormKind::Ngo => NGO_REQUESTS_COLLECTION,
        }
    }

    /// Confirmation shown after a successful submission
    pub fn success_message(self) -> &'static str {
        match self {
            FormKind::Donor => DONATION_SUCCESS_MESSAGE,
            FormKind::Ngo => NGO_SUCCESS_MESSAGE,
        }
    }

    /// Generic error shown when a submission fails
    pub fn error_message(self) -> &'static str {
        match self {
            FormKind::Donor => DONATION_ERROR_MESSAGE,
            FormKind::Ngo => NGO_ERROR_MESSAGE,
        }
    }

    /// Submit button label while no submission is in flight
    pub fn idle_label(self) -> &'static str {
        match self {
            FormKind::Donor => DONATION_IDLE_LABEL,
            FormKind::Ngo => NGO_IDLE_LABEL,
        }
    }
}
