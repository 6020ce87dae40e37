//! Debate runner: one scheduler, fresh state and run id per topic.
//!
//! [`DebateRunner::stream`] is for incremental display; [`DebateRunner::run`] drives the
//! whole sequence and returns a [`DebateOutcome`]. [`RunnerConfig::from_env`] and
//! [`DebateRunner::from_config`] build an OpenAI-backed runner.

use std::path::PathBuf;
use std::sync::Arc;

use futures::StreamExt;
use serde::Serialize;

use crate::agent::{AffirmativeHandler, JudgeHandler, NegativeHandler};
use crate::error::DebateError;
use crate::graph::{Role, Scheduler, TurnStream};
use crate::llm::{ChatOpenAI, TextGenerator, DEFAULT_MODEL, DEFAULT_TEMPERATURE};
use crate::prompts;
use crate::state::{Instructions, TurnState};

/// Env var selecting the model.
pub const ENV_MODEL: &str = "DEBATE_MODEL";
/// Env var selecting the temperature.
pub const ENV_TEMPERATURE: &str = "DEBATE_TEMPERATURE";
/// Env var pointing at a prompts YAML file.
pub const ENV_PROMPTS_FILE: &str = "DEBATE_PROMPTS_FILE";

/// Error building a runner from configuration.
#[derive(Debug, thiserror::Error)]
pub enum SetupError {
    #[error(transparent)]
    Prompts(#[from] prompts::LoadError),
    #[error("invalid temperature {0:?}: expected a number between 0 and 2")]
    InvalidTemperature(String),
}

/// Settings for an OpenAI-backed runner.
#[derive(Clone, Debug, PartialEq)]
pub struct RunnerConfig {
    pub model: String,
    pub temperature: Option<f32>,
    pub prompts_file: Option<PathBuf>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            temperature: Some(DEFAULT_TEMPERATURE),
            prompts_file: None,
        }
    }
}

impl RunnerConfig {
    /// Defaults overlaid with `DEBATE_MODEL`, `DEBATE_TEMPERATURE`, `DEBATE_PROMPTS_FILE`.
    pub fn from_env() -> Result<Self, SetupError> {
        Self::from_env_with_temperature(None)
    }

    /// Like [`from_env`](Self::from_env), but a given `temperature` replaces
    /// `DEBATE_TEMPERATURE`, which is then not read at all.
    pub fn from_env_with_temperature(temperature: Option<f32>) -> Result<Self, SetupError> {
        let mut config = Self::default();
        if let Some(model) = env_non_empty(ENV_MODEL) {
            config.model = model;
        }
        match temperature {
            Some(t) => config.temperature = Some(t),
            None => {
                if let Some(raw) = env_non_empty(ENV_TEMPERATURE) {
                    config.temperature = Some(parse_temperature(&raw)?);
                }
            }
        }
        config.prompts_file = env_non_empty(ENV_PROMPTS_FILE).map(PathBuf::from);
        Ok(config)
    }
}

/// Parses a temperature in `0.0..=2.0`.
pub fn parse_temperature(raw: &str) -> Result<f32, SetupError> {
    match raw.trim().parse::<f32>() {
        Ok(t) if (0.0..=2.0).contains(&t) => Ok(t),
        _ => Err(SetupError::InvalidTemperature(raw.to_string())),
    }
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

/// A started run: its id and the lazy stream of turns.
pub struct DebateRun {
    pub run_id: String,
    pub turns: TurnStream,
}

/// Everything a finished run produced.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct DebateOutcome {
    pub run_id: String,
    pub display_text: String,
    pub affirmative_case: String,
    pub negative_case: String,
    pub verdict: String,
}

/// Runs debates over one scheduler and one set of default instructions.
///
/// **Interaction**: Builds a [`Scheduler`] whose three handlers share one generator.
/// Every run gets a fresh [`TurnState`] and a UUID run id; handler calls of that run are
/// traced inside a `debate_run` span carrying the id.
#[derive(Clone)]
pub struct DebateRunner {
    scheduler: Scheduler,
    instructions: Instructions,
}

impl DebateRunner {
    /// Judge, Affirmative and Negative handlers over `llm`.
    pub fn new(llm: Arc<dyn TextGenerator>, instructions: Instructions) -> Self {
        let scheduler = Scheduler::from_handlers(
            Arc::new(JudgeHandler::new(llm.clone())),
            Arc::new(AffirmativeHandler::new(llm.clone())),
            Arc::new(NegativeHandler::new(llm)),
        );
        Self::with_scheduler(scheduler, instructions)
    }

    /// Uses a prebuilt scheduler (e.g. with custom handlers).
    pub fn with_scheduler(scheduler: Scheduler, instructions: Instructions) -> Self {
        Self {
            scheduler,
            instructions,
        }
    }

    /// OpenAI-backed runner; instructions from the prompts file (if any) plus env overrides.
    pub fn from_config(config: &RunnerConfig) -> Result<Self, SetupError> {
        let instructions = prompts::load_or_default(config.prompts_file.as_deref())?;
        let llm = ChatOpenAI::new(config.model.clone()).with_temperature(config.temperature);
        tracing::info!(model = %config.model, temperature = ?config.temperature, "Debate runner configured");
        Ok(Self::new(Arc::new(llm), instructions))
    }

    /// Default instructions applied to runs started with [`stream`](Self::stream).
    pub fn instructions(&self) -> &Instructions {
        &self.instructions
    }

    /// Starts a run with the runner's instructions.
    pub fn stream(&self, topic: impl Into<String>) -> Result<DebateRun, DebateError> {
        self.stream_with(topic, self.instructions.clone())
    }

    /// Starts a run with instructions overridden for this run only.
    pub fn stream_with(
        &self,
        topic: impl Into<String>,
        instructions: Instructions,
    ) -> Result<DebateRun, DebateError> {
        let state = TurnState::new(topic, instructions)?;
        let run_id = uuid::Uuid::new_v4().to_string();
        let span = tracing::info_span!("debate_run", run_id = %run_id);
        let turns = span.in_scope(|| self.scheduler.run(state));
        Ok(DebateRun { run_id, turns })
    }

    /// Runs the whole sequence and collects the results.
    pub async fn run(&self, topic: impl Into<String>) -> Result<DebateOutcome, DebateError> {
        let DebateRun { run_id, mut turns } = self.stream(topic)?;
        let mut last = None;
        while let Some(turn) = turns.next().await {
            last = Some(turn?.state);
        }
        let state = last.ok_or(DebateError::MissingField {
            role: Role::Judge,
            field: "verdict",
        })?;
        Ok(DebateOutcome {
            run_id,
            display_text: require(state.display_text, Role::Judge, "display_text")?,
            affirmative_case: require(state.affirmative_case, Role::Judge, "affirmative_case")?,
            negative_case: require(state.negative_case, Role::Judge, "negative_case")?,
            verdict: require(state.verdict, Role::Judge, "verdict")?,
        })
    }
}

fn require(value: Option<String>, role: Role, field: &'static str) -> Result<String, DebateError> {
    value.ok_or(DebateError::MissingField { role, field })
}
