/// Lifecycle of the contact form submission, one value at a time.
///
/// Created fresh per controller, never persisted. `Submitting` is the only
/// blocking state; the three rest states accept a new submit action.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum SubmissionState {
    /// No attempt made yet.
    #[default]
    Idle,
    /// A submission is in flight; resubmission is a no-op until it resolves.
    Submitting,
    /// The last attempt completed and the draft has been cleared.
    Succeeded,
    /// The last attempt failed; the draft is preserved for a retry.
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Whether the state accepts a new submit action.
    pub fn is_rest(&self) -> bool {
        !self.is_submitting()
    }
}
