use axum::{
    extract::{Form, State},
    response::Response,
};
use folio_contact::{ContactMessage, Field, SubmissionOutcome, ValidationReport};
use serde::Deserialize;

use crate::{routes::AppState, template::Template};

/// View model for the contact section: field values, inline per-field errors
/// and the page-level result banner.
#[derive(Default)]
pub struct ContactView {
    pub name: String,
    pub email: String,
    pub message: String,
    pub name_error: Option<String>,
    pub email_error: Option<String>,
    pub message_error: Option<String>,
    pub success: bool,
    pub failure: Option<String>,
}

impl ContactView {
    pub fn from_draft(draft: &ContactMessage) -> Self {
        Self {
            name: draft.name.clone(),
            email: draft.email.clone(),
            message: draft.body.clone(),
            ..Self::default()
        }
    }

    pub fn with_errors(draft: &ContactMessage, report: &ValidationReport) -> Self {
        let mut view = Self::from_draft(draft);
        view.name_error = report.message(Field::Name).map(str::to_owned);
        view.email_error = report.message(Field::Email).map(str::to_owned);
        view.message_error = report.message(Field::Body).map(str::to_owned);
        view
    }

    fn succeeded() -> Self {
        Self {
            success: true,
            ..Self::default()
        }
    }

    fn failed(draft: &ContactMessage, reason: String) -> Self {
        let mut view = Self::from_draft(draft);
        view.failure = Some(reason);
        view
    }
}

#[derive(Deserialize)]
pub struct ActionInput {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub async fn action(
    template: Template,
    State(app_state): State<AppState>,
    Form(input): Form<ActionInput>,
) -> Response {
    let draft = ContactMessage {
        name: input.name,
        email: input.email,
        body: input.message,
    };

    // Validation errors block the submit action; the controller never sees
    // an invalid draft through this path.
    let report = app_state.contact.validate(&draft);
    if !report.is_empty() {
        let view = ContactView::with_errors(&draft, &report);
        return super::index::page_response(template, &app_state, None, None, view);
    }

    let view = match app_state.contact.submit(draft.clone()).await {
        SubmissionOutcome::Sent => ContactView::succeeded(),
        SubmissionOutcome::Failed(reason) => ContactView::failed(&draft, reason),
        SubmissionOutcome::Invalid(report) => ContactView::with_errors(&draft, &report),
        // A submission is already in flight; keep the page as-is without
        // reporting an error.
        SubmissionOutcome::InFlight => ContactView::from_draft(&draft),
    };

    super::index::page_response(template, &app_state, None, None, view)
}
