//! Error types for debate runs.
//!
//! [`GenerationError`] is raised at the text-generator boundary; [`DebateError`] is what
//! handlers, the scheduler and the runner return. A generation failure is carried
//! unchanged inside [`DebateError::Generation`].

use thiserror::Error;

use crate::graph::Role;
use crate::state::Step;

/// Failure to produce text from the external generator (network, auth, quota, bad response).
///
/// Never accompanied by partial output: a generator either returns the whole text or this.
#[derive(Debug, Error)]
pub enum GenerationError {
    /// The request could not be built (e.g. invalid model parameters).
    #[error("request build failed: {0}")]
    Request(String),

    /// The provider rejected or failed the call.
    #[error("provider error: {0}")]
    Provider(String),

    /// The provider answered but the response carried no usable text.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

/// Error returned by a debate run.
#[derive(Debug, Error)]
pub enum DebateError {
    /// The generator failed; the run stops before the failing role produces a snapshot.
    #[error("generation failed: {0}")]
    Generation(#[from] GenerationError),

    /// A handler needed a field that no earlier handler wrote.
    #[error("{role} requires `{field}` but it is not set")]
    MissingField { role: Role, field: &'static str },

    /// A handler was invoked at a step it has no behavior for.
    #[error("{role} cannot handle step {step}")]
    InvalidStep { role: Role, step: Step },

    /// A step change that is not the single legal successor.
    #[error("invalid step transition: {from} -> {to}")]
    InvalidTransition { from: Step, to: Step },

    /// A write-once result field was written twice.
    #[error("`{field}` is already set")]
    FieldAlreadySet { field: &'static str },

    /// Runs need a non-empty topic.
    #[error("topic must not be empty")]
    EmptyTopic,
}
