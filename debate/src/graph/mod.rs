//! Turn scheduler: three role handlers, a routing function and a hard-wired entry.
//!
//! Build with [`Scheduler::builder`], register the Judge, Affirmative and Negative
//! handlers, then [`Scheduler::run`] a fresh [`TurnState`](crate::TurnState) to get a lazy
//! stream of [`Turn`]s: Judge, Affirmative, Negative, Judge.

mod build_error;
mod builder;
mod handler;
mod logging;
mod role;
mod router;
mod scheduler;

pub use build_error::BuildError;
pub use builder::SchedulerBuilder;
pub use handler::StepHandler;
pub use logging::{
    log_handler_complete, log_handler_start, log_route, log_run_complete, log_run_error,
    log_run_start,
};
pub use role::Role;
pub use router::{route, Route, ENTRY_ROLE};
pub use scheduler::{Scheduler, Turn, TurnStream};
