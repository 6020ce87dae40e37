//! Structured logging for scheduler runs: run start/complete/error, handler start/complete,
//! routing decisions.

use crate::error::DebateError;
use crate::state::{Step, TurnState};

use super::{Role, Route};

/// Log run start, before the entry handler is invoked.
pub fn log_run_start(state: &TurnState) {
    tracing::info!(topic = %state.topic, "Starting debate run");
}

/// Log handler start with the state it receives.
pub fn log_handler_start(role: Role, state: &TurnState) {
    tracing::debug!(role = %role, step = %state.step, "Starting handler");
    tracing::trace!(role = %role, state = ?state, "Handler input state");
}

/// Log handler completion with the step it wrote.
pub fn log_handler_complete(role: Role, step: Step) {
    tracing::debug!(role = %role, step = %step, "Handler complete");
}

/// Log the router decision for the step just written.
pub fn log_route(from: Role, step: Step, route: Route) {
    tracing::debug!(from = %from, step = %step, route = ?route, "Routing");
}

/// Log run completion (router returned `Stop`).
pub fn log_run_complete() {
    tracing::info!("Debate run complete");
}

/// Log a failure that aborts the run.
pub fn log_run_error(role: Role, error: &DebateError) {
    tracing::error!(role = %role, ?error, "Debate run failed");
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Instructions;

    #[test]
    fn test_logging_functions() {
        let state = TurnState::new("t", Instructions::default()).unwrap();
        log_run_start(&state);
        log_handler_start(Role::Judge, &state);
        log_handler_complete(Role::Judge, Step::AffirmativeOpen);
        log_route(Role::Judge, Step::AffirmativeOpen, Route::Handler(Role::Affirmative));
        log_run_complete();
        log_run_error(Role::Negative, &DebateError::EmptyTopic);
    }
}
