//! # Debate
//!
//! A fixed-order turn scheduler for a three-role debate: a Judge frames the topic, an
//! Affirmative and a Negative advocate each open a case, and the Judge delivers a verdict.
//! One shared [`TurnState`] flows through every handler (state in, state out) and a step
//! marker on that state decides who runs next.
//!
//! ## Main modules
//!
//! - [`graph`]: [`Role`], [`StepHandler`], [`route`], [`Scheduler`] and [`SchedulerBuilder`].
//!   [`Scheduler::run`] yields one [`Turn`] per handler invocation as a lazy stream.
//! - [`agent`]: the three role handlers ([`JudgeHandler`], [`AffirmativeHandler`], [`NegativeHandler`]).
//! - [`state`]: [`TurnState`], [`Step`], [`Instructions`].
//! - [`llm`]: [`TextGenerator`] trait, [`MockGenerator`], OpenAI-compatible [`ChatOpenAI`].
//! - [`prompts`]: default role instructions, YAML and env overrides.
//! - [`runner`]: [`DebateRunner`] wiring all of the above per topic.
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use futures::StreamExt;
//! use debate::{DebateRunner, Instructions, MockGenerator};
//!
//! # async fn demo() -> Result<(), debate::DebateError> {
//! let runner = DebateRunner::new(Arc::new(MockGenerator::with_reply("ok")), Instructions::default());
//! let mut run = runner.stream("Should remote work be mandatory?")?;
//! while let Some(turn) = run.turns.next().await {
//!     let turn = turn?;
//!     println!("{}: {}", turn.role, turn.state.step);
//! }
//! # Ok(())
//! # }
//! ```

pub mod agent;
pub mod error;
pub mod graph;
pub mod llm;
pub mod message;
pub mod prompts;
pub mod runner;
pub mod state;

pub use agent::{AffirmativeHandler, JudgeHandler, NegativeHandler};
pub use error::{DebateError, GenerationError};
pub use graph::{
    route, BuildError, Role, Route, Scheduler, SchedulerBuilder, StepHandler, Turn, TurnStream,
    ENTRY_ROLE,
};
pub use llm::{ChatOpenAI, GenerateCall, MockGenerator, TextGenerator};
pub use message::Message;
pub use runner::{DebateOutcome, DebateRun, DebateRunner, RunnerConfig, SetupError};
pub use state::{Instructions, Step, TurnState};

#[cfg(test)]
mod test_logging {
    use ctor::ctor;
    use tracing_subscriber::layer::SubscriberExt;
    use tracing_subscriber::util::SubscriberInitExt;
    use tracing_subscriber::EnvFilter;
    use tracing_subscriber::Layer;

    #[ctor]
    fn init() {
        let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
        let _ = tracing_subscriber::registry()
            .with(
                tracing_subscriber::fmt::layer()
                    .with_test_writer()
                    .with_filter(filter),
            )
            .try_init();
    }
}
