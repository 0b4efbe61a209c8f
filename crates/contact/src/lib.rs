//! Contact form core: draft validation and the submission state machine.
//!
//! The rest of the site is stateless rendering over compiled-in data; this
//! crate holds the one piece with a real behavioral contract. A
//! [`SubmissionController`] owns the in-progress [`ContactMessage`] draft,
//! validates it field by field, and drives the
//! idle -> submitting -> succeeded | failed lifecycle against an opaque
//! [`MessageSink`].

mod controller;
mod message;
mod sink;
mod state;

pub use controller::{SubmissionController, SubmissionOutcome};
pub use message::{validate, ContactMessage, ErrorKind, Field, FieldError, ValidationReport};
pub use sink::{MessageSink, SimulatedSink};
pub use state::SubmissionState;
