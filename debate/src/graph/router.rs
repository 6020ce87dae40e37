//! Routing: the step just written decides which handler runs next.

use crate::state::Step;

use super::Role;

/// Handler invoked first on every run, before any step has been routed.
pub const ENTRY_ROLE: Role = Role::Judge;

/// Router decision after a handler returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Route {
    /// Invoke this role's handler next.
    Handler(Role),
    /// End the run.
    Stop,
}

/// Pure router: maps the step written by the last handler to the next handler.
///
/// `Terminal` (and any marker no handler is waiting on) stops the run; this is the
/// only termination condition.
pub fn route(step: Step) -> Route {
    match step {
        Step::AffirmativeOpen => Route::Handler(Role::Affirmative),
        Step::NegativeOpen => Route::Handler(Role::Negative),
        Step::Judgement => Route::Handler(Role::Judge),
        Step::Initial | Step::Terminal => Route::Stop,
    }
}
