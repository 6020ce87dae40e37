//! Scheduler: runs the handlers in routed order and yields a snapshot after each one.
//!
//! Built by [`SchedulerBuilder::build`](super::SchedulerBuilder::build). The entry edge
//! is hard-wired to the Judge; after that the [`route`] function alone picks the next
//! handler. Nothing runs until the returned stream is polled, and each poll runs at most
//! one handler.

use std::sync::Arc;

use futures::stream::{self, BoxStream, StreamExt};
use serde::Serialize;
use tracing::Instrument;

use crate::error::DebateError;
use crate::state::TurnState;

use super::logging::{
    log_handler_complete, log_handler_start, log_route, log_run_complete, log_run_error,
    log_run_start,
};
use super::{route, Role, Route, SchedulerBuilder, StepHandler, ENTRY_ROLE};

/// One stream element: the role that just ran and the state it produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Turn {
    pub role: Role,
    pub state: TurnState,
}

/// Lazy, finite, ordered stream of turns for one run.
///
/// Ends after the turn whose step routes to `Stop`, or right after the first `Err`.
pub type TurnStream = BoxStream<'static, Result<Turn, DebateError>>;

/// Where the stream is between polls.
enum Cursor {
    Start(TurnState),
    Next { role: Role, state: TurnState },
    Done,
}

/// Immutable scheduler over the three role handlers.
///
/// Cloning is cheap (handlers are shared); one scheduler can serve many independent runs
/// concurrently since every run owns its own `TurnState`.
#[derive(Clone)]
pub struct Scheduler {
    judge: Arc<dyn StepHandler>,
    affirmative: Arc<dyn StepHandler>,
    negative: Arc<dyn StepHandler>,
}

impl Scheduler {
    /// Empty builder.
    pub fn builder() -> SchedulerBuilder {
        SchedulerBuilder::new()
    }

    pub(crate) fn from_handlers(
        judge: Arc<dyn StepHandler>,
        affirmative: Arc<dyn StepHandler>,
        negative: Arc<dyn StepHandler>,
    ) -> Self {
        Self {
            judge,
            affirmative,
            negative,
        }
    }

    fn handler(&self, role: Role) -> &Arc<dyn StepHandler> {
        match role {
            Role::Judge => &self.judge,
            Role::Affirmative => &self.affirmative,
            Role::Negative => &self.negative,
        }
    }

    /// Streams one turn per handler invocation, starting with the Judge.
    ///
    /// Handlers run inside the tracing span that is current when `run` is called. Errors
    /// are yielded unchanged as the last element; the failing role yields no snapshot.
    /// Not restartable: pass a fresh initial state to run again.
    pub fn run(&self, initial: TurnState) -> TurnStream {
        let scheduler = self.clone();
        let span = tracing::Span::current();
        stream::unfold(Cursor::Start(initial), move |cursor| {
            let scheduler = scheduler.clone();
            let span = span.clone();
            async move {
                let (role, state) = match cursor {
                    Cursor::Start(state) => {
                        span.in_scope(|| log_run_start(&state));
                        (ENTRY_ROLE, state)
                    }
                    Cursor::Next { role, state } => (role, state),
                    Cursor::Done => return None,
                };
                match scheduler.step(role, state).instrument(span).await {
                    Ok((turn, next)) => Some((Ok(turn), next)),
                    Err(e) => Some((Err(e), Cursor::Done)),
                }
            }
        })
        .boxed()
    }

    /// Runs to completion and returns the final state (the one carrying the verdict).
    pub async fn invoke(&self, initial: TurnState) -> Result<TurnState, DebateError> {
        let mut last = initial.clone();
        let mut turns = self.run(initial);
        while let Some(turn) = turns.next().await {
            last = turn?.state;
        }
        Ok(last)
    }

    /// One handler invocation plus the routing decision for what follows.
    async fn step(&self, role: Role, state: TurnState) -> Result<(Turn, Cursor), DebateError> {
        log_handler_start(role, &state);
        let state = self.handler(role).handle(state).await.map_err(|e| {
            log_run_error(role, &e);
            e
        })?;
        log_handler_complete(role, state.step);

        let route = route(state.step);
        log_route(role, state.step, route);
        let next = match route {
            Route::Handler(next_role) => Cursor::Next {
                role: next_role,
                state: state.clone(),
            },
            Route::Stop => {
                log_run_complete();
                Cursor::Done
            }
        };
        Ok((Turn { role, state }, next))
    }
}
