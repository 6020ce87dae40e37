//! Shared fixtures: short instructions and a generator that names the role it answers for.

use std::sync::Arc;

use debate::{
    AffirmativeHandler, Instructions, JudgeHandler, MockGenerator, NegativeHandler, Scheduler,
    TextGenerator, TurnState,
};

pub const JUDGE: &str = "JUDGE_INSTR";
pub const AFF: &str = "AFF_INSTR";
pub const NEG: &str = "NEG_INSTR";

pub fn instructions() -> Instructions {
    Instructions {
        judge: JUDGE.into(),
        affirmative: AFF.into(),
        negative: NEG.into(),
    }
}

/// Replies `"<Role> text for: <instruction>"`.
pub fn role_stub() -> MockGenerator {
    MockGenerator::with_fn(|instruction, _turns| {
        let role = match instruction {
            JUDGE => "Judge",
            AFF => "Affirmative",
            NEG => "Negative",
            _ => "Unknown",
        };
        format!("{} text for: {}", role, instruction)
    })
}

pub fn scheduler(llm: Arc<dyn TextGenerator>) -> Scheduler {
    let mut builder = Scheduler::builder();
    builder
        .add_handler(Arc::new(JudgeHandler::new(llm.clone())))
        .add_handler(Arc::new(AffirmativeHandler::new(llm.clone())))
        .add_handler(Arc::new(NegativeHandler::new(llm)));
    builder.build().unwrap()
}

pub fn initial(topic: &str) -> TurnState {
    TurnState::new(topic, instructions()).unwrap()
}
