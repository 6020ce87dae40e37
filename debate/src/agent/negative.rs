//! Negative handler: argues against the topic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DebateError;
use crate::graph::{Role, StepHandler};
use crate::llm::TextGenerator;
use crate::state::{Step, TurnState};

use super::{expect_step, open_case};

/// Valid only at `NegativeOpen`: writes `negative_case`, moves to `Judgement`.
pub struct NegativeHandler {
    llm: Arc<dyn TextGenerator>,
}

impl NegativeHandler {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl StepHandler for NegativeHandler {
    fn role(&self) -> Role {
        Role::Negative
    }

    async fn handle(&self, mut state: TurnState) -> Result<TurnState, DebateError> {
        expect_step(Role::Negative, &state, Step::NegativeOpen)?;
        let case = open_case(Role::Negative, self.llm.as_ref(), &state).await?;
        state.set_negative_case(case)?;
        state.advance(Step::Judgement)?;
        Ok(state)
    }
}
