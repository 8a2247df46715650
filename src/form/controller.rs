use crate::constants::SUBMITTING_LABEL;
use crate::form::StatusPanel;
use crate::models::{FormKind, Submission};
use crate::store::DocumentStore;

/// Hooks a concrete form surface implements so the submission workflow
/// stays independent of any particular UI toolkit.
pub trait FormSurface {
    type Submission: Submission;

    /// Read the fields as currently entered
    fn collect_fields(&self) -> Self::Submission;

    /// Reset every field back to empty/default
    fn clear(&mut self);
}

/// How a submit attempt ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The record was created and the form cleared
    Recorded,
    /// The write failed; the form contents are preserved for retry
    Failed,
    /// A previous submission has not settled yet; nothing was done
    InFlight,
}

/// Drives one form's submission workflow against a document store.
///
/// The store is passed in explicitly so tests can substitute a double.
/// At most one write is in flight per form: while a submission is pending
/// the submit control is disabled and further attempts are ignored, and
/// the busy label is restored when the write settles rather than on a
/// fixed timer.
pub struct FormController<S> {
    kind: FormKind,
    store: S,
    pub panel: StatusPanel,
    in_flight: bool,
}

impl<S: DocumentStore> FormController<S> {
    pub fn new(kind: FormKind, store: S) -> Self {
        Self {
            kind,
            store,
            panel: StatusPanel::new(),
            in_flight: false,
        }
    }

    pub fn kind(&self) -> FormKind {
        self.kind
    }

    /// Current submit button label
    pub fn button_label(&self) -> &'static str {
        if self.in_flight {
            SUBMITTING_LABEL
        } else {
            self.kind.idle_label()
        }
    }

    /// Whether the submit control accepts another attempt
    pub fn button_enabled(&self) -> bool {
        !self.in_flight
    }

    /// Collect the form's fields, append one record to the kind's
    /// collection, and render the outcome on the status panel.
    ///
    /// On success the form is cleared; on failure it is left intact so
    /// the submitter can retry manually. No automatic retry.
    pub async fn submit<F>(&mut self, form: &mut F) -> SubmitOutcome
    where
        F: FormSurface,
    {
        if self.in_flight {
            tracing::debug!(kind = ?self.kind, "Submit ignored: write already in flight");
            return SubmitOutcome::InFlight;
        }
        self.in_flight = true;

        let document = form.collect_fields().into_document();
        let result = self.store.append(self.kind.collection(), document).await;
        self.in_flight = false;

        match result {
            Ok(receipt) => {
                tracing::info!(
                    kind = ?self.kind,
                    id = receipt.id,
                    "Submission recorded in {}",
                    self.kind.collection()
                );
                self.panel.show(self.kind.success_message());
                form.clear();
                SubmitOutcome::Recorded
            }
            Err(e) => {
                tracing::error!(kind = ?self.kind, "Error submitting form: {:?}", e);
                self.panel.show(self.kind.error_message());
                SubmitOutcome::Failed
            }
        }
    }
}
