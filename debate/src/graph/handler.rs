//! Step handler trait: one role's turn in the scheduler.

use async_trait::async_trait;

use crate::error::DebateError;
use crate::state::TurnState;

use super::Role;

/// One role's turn: state in, updated state out.
///
/// A handler reads the fields it needs, optionally calls the text generator, writes its
/// own result field and advances `step` to the marker the router uses to pick the next
/// handler. A step it has no behavior for is `DebateError::InvalidStep`.
///
/// **Interaction**: Registered with [`SchedulerBuilder::add_handler`](super::SchedulerBuilder::add_handler);
/// invoked by [`Scheduler::run`](super::Scheduler::run).
#[async_trait]
pub trait StepHandler: Send + Sync {
    /// Role this handler plays. Must be unique within a scheduler.
    fn role(&self) -> Role;

    /// One turn. Errors abort the run; the scheduler does not retry.
    async fn handle(&self, state: TurnState) -> Result<TurnState, DebateError>;
}
