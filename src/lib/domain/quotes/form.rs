//! Form state and the submission state machine

use crate::domain::quotes::models::quote_request::{QuoteField, QuoteRequest};

/// The lifecycle of one submission attempt
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SubmissionState {
    /// No submission in flight; the form accepts a new attempt
    #[default]
    Idle,

    /// A dispatch is in flight; further attempts are rejected
    Submitting,

    /// The last attempt was delivered and the draft was cleared
    Succeeded,

    /// The last attempt failed and the draft was preserved
    Failed,
}

/// The mutable draft of a [`QuoteRequest`] plus the current [`SubmissionState`]
///
/// Owns both exclusively. Callers mutate fields through [`QuoteForm::set_field`]
/// and drive the state machine only through [`QuoteForm::begin_submission`] and
/// [`QuoteForm::finish_submission`]; no operation here can fail.
#[derive(Clone, Debug, Default)]
pub struct QuoteForm {
    draft: QuoteRequest,
    state: SubmissionState,
}

impl QuoteForm {
    /// Create an empty form in the `Idle` state
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field of the draft
    ///
    /// No validation is performed; required-ness and email syntax are the
    /// rendering layer's concern.
    pub fn set_field(&mut self, field: QuoteField, value: &str) {
        let slot = match field {
            QuoteField::Name => &mut self.draft.name,
            QuoteField::Email => &mut self.draft.email,
            QuoteField::Phone => &mut self.draft.phone,
            QuoteField::Establishment => &mut self.draft.establishment,
            QuoteField::Message => &mut self.draft.message,
        };

        *slot = value.to_string();
    }

    /// Set all five fields back to the empty string
    pub fn reset(&mut self) {
        self.draft = QuoteRequest::default();
    }

    /// The current draft
    pub fn draft(&self) -> &QuoteRequest {
        &self.draft
    }

    /// The current submission state
    pub fn state(&self) -> SubmissionState {
        self.state
    }

    /// Guarded `Idle` -> `Submitting` transition
    ///
    /// Returns a snapshot of the draft for the attempt to dispatch. When a
    /// submission is already in flight the call has no side effect and returns
    /// `None`; field edits made after the snapshot never join the attempt.
    pub fn begin_submission(&mut self) -> Option<QuoteRequest> {
        if self.state != SubmissionState::Idle {
            return None;
        }

        self.state = SubmissionState::Submitting;

        Some(self.draft.clone())
    }

    /// Record the outcome of the in-flight attempt and finalize back to `Idle`
    ///
    /// A delivered attempt clears the draft; a failed one preserves it so the
    /// visitor can resubmit the same data. `Succeeded` and `Failed` are
    /// transient: the form is immediately reusable for the next attempt.
    pub fn finish_submission(&mut self, sent: bool) {
        if sent {
            self.state = SubmissionState::Succeeded;
            self.reset();
        } else {
            self.state = SubmissionState::Failed;
        }

        self.state = SubmissionState::Idle;
    }
}
