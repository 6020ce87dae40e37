//! Scheduler builder: register one handler per role, then `build`.

use std::collections::HashMap;
use std::sync::Arc;

use super::{BuildError, Role, Scheduler, StepHandler};

/// Collects handlers before building a [`Scheduler`].
///
/// Each handler is keyed by its own [`StepHandler::role`]. `build` fails when a role is
/// missing or registered twice.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use debate::{AffirmativeHandler, JudgeHandler, MockGenerator, NegativeHandler, Scheduler, TextGenerator};
///
/// let llm: Arc<dyn TextGenerator> = Arc::new(MockGenerator::with_reply("ok"));
/// let mut builder = Scheduler::builder();
/// builder
///     .add_handler(Arc::new(JudgeHandler::new(llm.clone())))
///     .add_handler(Arc::new(AffirmativeHandler::new(llm.clone())))
///     .add_handler(Arc::new(NegativeHandler::new(llm)));
/// let scheduler = builder.build().unwrap();
/// ```
#[derive(Default)]
pub struct SchedulerBuilder {
    handlers: Vec<Arc<dyn StepHandler>>,
}

impl SchedulerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a handler under its role. Returns `&mut Self` for chaining.
    pub fn add_handler(&mut self, handler: Arc<dyn StepHandler>) -> &mut Self {
        self.handlers.push(handler);
        self
    }

    /// Validates that every role has exactly one handler.
    pub fn build(self) -> Result<Scheduler, BuildError> {
        let mut by_role: HashMap<Role, Arc<dyn StepHandler>> = HashMap::new();
        for handler in self.handlers {
            let role = handler.role();
            if by_role.insert(role, handler).is_some() {
                return Err(BuildError::DuplicateHandler(role));
            }
        }
        let mut take = |role: Role| by_role.remove(&role).ok_or(BuildError::MissingHandler(role));
        let judge = take(Role::Judge)?;
        let affirmative = take(Role::Affirmative)?;
        let negative = take(Role::Negative)?;
        Ok(Scheduler::from_handlers(judge, affirmative, negative))
    }
}
