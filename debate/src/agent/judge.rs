//! Judge handler: opens the debate and, once both cases are in, delivers the verdict.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DebateError;
use crate::graph::{Role, StepHandler};
use crate::llm::TextGenerator;
use crate::prompts::{judgement_turns, topic_banner};
use crate::state::{Step, TurnState};

/// Invoked twice per run.
///
/// - At `Initial`: echoes the topic into `display_text` and moves to `AffirmativeOpen`,
///   without calling the generator.
/// - At `Judgement`: sends topic and both cases to the generator, writes `verdict` and
///   moves to `Terminal`.
///
/// Any other step is `InvalidStep`.
pub struct JudgeHandler {
    llm: Arc<dyn TextGenerator>,
}

impl JudgeHandler {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }

    fn open(&self, mut state: TurnState) -> Result<TurnState, DebateError> {
        let banner = topic_banner(state.require_topic(Role::Judge)?);
        state.set_display_text(banner)?;
        state.advance(Step::AffirmativeOpen)?;
        Ok(state)
    }

    async fn judge(&self, mut state: TurnState) -> Result<TurnState, DebateError> {
        let turns = judgement_turns(
            state.require_topic(Role::Judge)?,
            state.require_affirmative_case(Role::Judge)?,
            state.require_negative_case(Role::Judge)?,
        );
        tracing::debug!(role = %Role::Judge, "Generating verdict");
        let verdict = self.llm.generate(&state.instructions.judge, &turns).await?;
        state.set_verdict(verdict)?;
        state.advance(Step::Terminal)?;
        Ok(state)
    }
}

#[async_trait]
impl StepHandler for JudgeHandler {
    fn role(&self) -> Role {
        Role::Judge
    }

    async fn handle(&self, state: TurnState) -> Result<TurnState, DebateError> {
        match state.step {
            Step::Initial => self.open(state),
            Step::Judgement => self.judge(state).await,
            step => Err(DebateError::InvalidStep {
                role: Role::Judge,
                step,
            }),
        }
    }
}
