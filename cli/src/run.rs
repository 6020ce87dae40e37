//! Streaming run: resolve options, start the debate, write each turn as it arrives.

use std::io::Write;
use std::path::PathBuf;

use debate::runner::{parse_temperature, RunnerConfig, SetupError};
use debate::{DebateError, DebateRunner, Instructions};
use futures::StreamExt;

use crate::display::{format_turn, TurnRecord};

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Setup(#[from] SetupError),
    #[error(transparent)]
    Debate(#[from] DebateError),
    #[error("write output: {0}")]
    Io(#[from] std::io::Error),
    #[error("encode output: {0}")]
    Json(#[from] serde_json::Error),
}

/// Everything the binary collects from args; `None` means "use env / defaults".
#[derive(Clone, Debug, Default)]
pub struct RunOptions {
    pub topic: String,
    pub judge_instruction: Option<String>,
    pub affirmative_instruction: Option<String>,
    pub negative_instruction: Option<String>,
    pub prompts_file: Option<PathBuf>,
    pub model: Option<String>,
    pub temperature: Option<String>,
    pub json: bool,
}

impl RunOptions {
    /// Env-derived runner config with flag values layered on top.
    pub fn runner_config(&self) -> Result<RunnerConfig, SetupError> {
        let temperature = self.temperature.as_deref().map(parse_temperature).transpose()?;
        let mut config = RunnerConfig::from_env_with_temperature(temperature)?;
        if let Some(model) = &self.model {
            config.model = model.clone();
        }
        if let Some(path) = &self.prompts_file {
            config.prompts_file = Some(path.clone());
        }
        Ok(config)
    }

    /// `base` with any per-role flag applied.
    pub fn instructions(&self, base: Instructions) -> Instructions {
        let pick = |flag: &Option<String>, default: String| match flag {
            Some(v) if !v.trim().is_empty() => v.clone(),
            _ => default,
        };
        Instructions {
            judge: pick(&self.judge_instruction, base.judge),
            affirmative: pick(&self.affirmative_instruction, base.affirmative),
            negative: pick(&self.negative_instruction, base.negative),
        }
    }
}

/// Builds an OpenAI-backed runner from `opts` and streams the debate to `out`.
pub async fn run<W: Write>(opts: &RunOptions, out: &mut W) -> Result<(), RunError> {
    let runner = DebateRunner::from_config(&opts.runner_config()?)?;
    let instructions = opts.instructions(runner.instructions().clone());
    stream_to(&runner, &opts.topic, instructions, opts.json, out).await
}

/// Writes each turn as soon as it is yielded; the first error stops the run.
pub async fn stream_to<W: Write>(
    runner: &DebateRunner,
    topic: &str,
    instructions: Instructions,
    json: bool,
    out: &mut W,
) -> Result<(), RunError> {
    let mut run = runner.stream_with(topic, instructions)?;
    tracing::info!(run_id = %run.run_id, json, "Debate started");
    while let Some(turn) = run.turns.next().await {
        let turn = turn?;
        if json {
            serde_json::to_writer(&mut *out, &TurnRecord::new(&run.run_id, &turn))?;
            writeln!(out)?;
        } else {
            out.write_all(format_turn(&turn).as_bytes())?;
        }
        out.flush()?;
    }
    Ok(())
}
