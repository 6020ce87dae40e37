//! Affirmative handler: argues for the topic.

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::DebateError;
use crate::graph::{Role, StepHandler};
use crate::llm::TextGenerator;
use crate::state::{Step, TurnState};

use super::{expect_step, open_case};

/// Valid only at `AffirmativeOpen`: writes `affirmative_case`, moves to `NegativeOpen`.
pub struct AffirmativeHandler {
    llm: Arc<dyn TextGenerator>,
}

impl AffirmativeHandler {
    pub fn new(llm: Arc<dyn TextGenerator>) -> Self {
        Self { llm }
    }
}

#[async_trait]
impl StepHandler for AffirmativeHandler {
    fn role(&self) -> Role {
        Role::Affirmative
    }

    async fn handle(&self, mut state: TurnState) -> Result<TurnState, DebateError> {
        expect_step(Role::Affirmative, &state, Step::AffirmativeOpen)?;
        let case = open_case(Role::Affirmative, self.llm.as_ref(), &state).await?;
        state.set_affirmative_case(case)?;
        state.advance(Step::NegativeOpen)?;
        Ok(state)
    }
}
