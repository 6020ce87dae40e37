//! Role handlers: Judge, Affirmative, Negative.
//!
//! Each handler owns a shared [`TextGenerator`](crate::llm::TextGenerator). The two
//! advocates are the same shape (topic in, case out) and share [`open_case`].

mod affirmative;
mod judge;
mod negative;

pub use affirmative::AffirmativeHandler;
pub use judge::JudgeHandler;
pub use negative::NegativeHandler;

use crate::error::DebateError;
use crate::graph::Role;
use crate::llm::TextGenerator;
use crate::state::{Step, TurnState};

/// Fails with `InvalidStep` unless `state.step == expected`.
pub(crate) fn expect_step(role: Role, state: &TurnState, expected: Step) -> Result<(), DebateError> {
    if state.step != expected {
        return Err(DebateError::InvalidStep {
            role,
            step: state.step,
        });
    }
    Ok(())
}

/// Generates an advocate's opening case: system = the role's instruction, user = topic.
pub(crate) async fn open_case(
    role: Role,
    llm: &dyn TextGenerator,
    state: &TurnState,
) -> Result<String, DebateError> {
    let topic = state.require_topic(role)?;
    let instruction = state.instructions.for_role(role);
    tracing::debug!(role = %role, "Generating opening case");
    let case = llm.generate(instruction, &[topic.to_string()]).await?;
    Ok(case)
}
