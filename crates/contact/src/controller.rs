use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::{validate, ContactMessage, MessageSink, SubmissionState, ValidationReport};

/// Result of a single call to [`SubmissionController::submit`].
#[derive(Debug, PartialEq, Eq)]
pub enum SubmissionOutcome {
    /// The sink accepted the message; the draft has been cleared.
    Sent,
    /// The sink rejected the message; the draft is preserved for a retry.
    Failed(String),
    /// The draft failed validation; no state transition occurred and the
    /// sink was never invoked.
    Invalid(ValidationReport),
    /// Another submission was already in flight; no-op.
    InFlight,
}

struct Inner {
    draft: ContactMessage,
    state: SubmissionState,
}

/// Owns the contact form draft and drives the submission lifecycle.
///
/// One controller is bound to the page view; its state lives as long as the
/// process and is never persisted. The draft/state pair sits behind a mutex
/// that is only held for state reads and transitions, never across the sink
/// call, so the rest of the site stays responsive while a submission is
/// outstanding.
pub struct SubmissionController {
    sink: Box<dyn MessageSink>,
    inner: Mutex<Inner>,
}

impl SubmissionController {
    pub fn new(sink: impl MessageSink + 'static) -> Self {
        Self {
            sink: Box::new(sink),
            inner: Mutex::new(Inner {
                draft: ContactMessage::default(),
                state: SubmissionState::Idle,
            }),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Pure per-field check of a draft; see [`validate`].
    pub fn validate(&self, draft: &ContactMessage) -> ValidationReport {
        validate(draft)
    }

    pub fn state(&self) -> SubmissionState {
        self.lock().state.clone()
    }

    /// The current draft. After a failed attempt this still carries the
    /// submitted field values so the user can retry without retyping.
    pub fn draft(&self) -> ContactMessage {
        self.lock().draft.clone()
    }

    /// Submit a draft to the sink.
    ///
    /// Only one submission may be in flight at a time; a call made while one
    /// is outstanding returns [`SubmissionOutcome::InFlight`] without touching
    /// the draft or the sink. An invalid draft returns
    /// [`SubmissionOutcome::Invalid`] with no state transition. Once the sink
    /// call begins it runs to completion; there is no timeout or cancellation.
    pub async fn submit(&self, draft: ContactMessage) -> SubmissionOutcome {
        {
            let mut inner = self.lock();
            if inner.state.is_submitting() {
                tracing::debug!("submit ignored: a submission is already in flight");
                return SubmissionOutcome::InFlight;
            }

            let report = validate(&draft);
            if !report.is_empty() {
                return SubmissionOutcome::Invalid(report);
            }

            inner.state = SubmissionState::Submitting;
            inner.draft = draft.clone();
        }

        match self.sink.send(&draft).await {
            Ok(()) => {
                let mut inner = self.lock();
                inner.state = SubmissionState::Succeeded;
                inner.draft = ContactMessage::default();
                SubmissionOutcome::Sent
            }
            Err(reason) => {
                tracing::warn!(%reason, "contact message delivery failed");
                let mut inner = self.lock();
                inner.state = SubmissionState::Failed(reason.clone());
                SubmissionOutcome::Failed(reason)
            }
        }
    }
}
