//! TurnState: the record every handler reads and writes.

use serde::{Deserialize, Serialize};

use crate::error::DebateError;
use crate::graph::Role;
use crate::prompts;

use super::Step;

/// Instruction texts for the three roles, fixed before the run starts.
///
/// **Interaction**: `Default` uses the built-in texts from [`crate::prompts`]; callers
/// override any of them with [`prompts::load`] or by assigning the fields directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Instructions {
    /// System instruction for the Judge's verdict call.
    pub judge: String,
    /// System instruction for the Affirmative case.
    pub affirmative: String,
    /// System instruction for the Negative case.
    pub negative: String,
}

impl Default for Instructions {
    fn default() -> Self {
        Self {
            judge: prompts::DEFAULT_JUDGE_INSTRUCTION.to_string(),
            affirmative: prompts::DEFAULT_AFFIRMATIVE_INSTRUCTION.to_string(),
            negative: prompts::DEFAULT_NEGATIVE_INSTRUCTION.to_string(),
        }
    }
}

impl Instructions {
    /// Instruction text for the given role.
    pub fn for_role(&self, role: Role) -> &str {
        match role {
            Role::Judge => &self.judge,
            Role::Affirmative => &self.affirmative,
            Role::Negative => &self.negative,
        }
    }
}

/// State for one debate run: Judge → Affirmative → Negative → Judge.
///
/// Fields not yet written are `None`. Handlers go through the `set_*` and `require_*`
/// methods so that double writes and reads of unset fields fail instead of silently
/// producing stale output.
///
/// **Interaction**: Created by [`TurnState::new`] (or the runner), consumed and produced by
/// the [`StepHandler`](crate::graph::StepHandler)s, yielded by the scheduler after each one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnState {
    /// Current phase; only handlers advance it, one successor at a time.
    pub step: Step,
    /// Debate topic, set once at start.
    pub topic: String,
    /// Written by the Affirmative handler.
    pub affirmative_case: Option<String>,
    /// Written by the Negative handler.
    pub negative_case: Option<String>,
    /// Written by the Judge's second invocation; the run's final output.
    pub verdict: Option<String>,
    /// Topic echo written by the Judge's first invocation; display only.
    pub display_text: Option<String>,
    /// Per-role instruction texts.
    pub instructions: Instructions,
}

impl TurnState {
    /// Creates the initial state for a run. Whitespace-only topics are rejected.
    pub fn new(topic: impl Into<String>, instructions: Instructions) -> Result<Self, DebateError> {
        let topic = topic.into();
        if topic.trim().is_empty() {
            return Err(DebateError::EmptyTopic);
        }
        Ok(Self {
            step: Step::Initial,
            topic,
            affirmative_case: None,
            negative_case: None,
            verdict: None,
            display_text: None,
            instructions,
        })
    }

    /// Moves to `to`, which must be the successor of the current step.
    pub fn advance(&mut self, to: Step) -> Result<(), DebateError> {
        if self.step.successor() != Some(to) {
            return Err(DebateError::InvalidTransition {
                from: self.step,
                to,
            });
        }
        self.step = to;
        Ok(())
    }

    pub fn set_display_text(&mut self, text: impl Into<String>) -> Result<(), DebateError> {
        write_once(&mut self.display_text, "display_text", text.into())
    }

    pub fn set_affirmative_case(&mut self, text: impl Into<String>) -> Result<(), DebateError> {
        write_once(&mut self.affirmative_case, "affirmative_case", text.into())
    }

    pub fn set_negative_case(&mut self, text: impl Into<String>) -> Result<(), DebateError> {
        write_once(&mut self.negative_case, "negative_case", text.into())
    }

    pub fn set_verdict(&mut self, text: impl Into<String>) -> Result<(), DebateError> {
        write_once(&mut self.verdict, "verdict", text.into())
    }

    /// The topic, or `MissingField` when it was cleared after construction.
    pub fn require_topic(&self, role: Role) -> Result<&str, DebateError> {
        if self.topic.trim().is_empty() {
            return Err(DebateError::MissingField {
                role,
                field: "topic",
            });
        }
        Ok(&self.topic)
    }

    pub fn require_affirmative_case(&self, role: Role) -> Result<&str, DebateError> {
        require(&self.affirmative_case, role, "affirmative_case")
    }

    pub fn require_negative_case(&self, role: Role) -> Result<&str, DebateError> {
        require(&self.negative_case, role, "negative_case")
    }
}

fn write_once(
    slot: &mut Option<String>,
    field: &'static str,
    value: String,
) -> Result<(), DebateError> {
    if slot.is_some() {
        return Err(DebateError::FieldAlreadySet { field });
    }
    *slot = Some(value);
    Ok(())
}

fn require<'a>(
    slot: &'a Option<String>,
    role: Role,
    field: &'static str,
) -> Result<&'a str, DebateError> {
    slot.as_deref()
        .ok_or(DebateError::MissingField { role, field })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> TurnState {
        TurnState::new("Cats vs dogs", Instructions::default()).unwrap()
    }

    #[test]
    fn new_rejects_blank_topic() {
        assert!(matches!(
            TurnState::new("   ", Instructions::default()),
            Err(DebateError::EmptyTopic)
        ));
        assert!(matches!(
            TurnState::new("", Instructions::default()),
            Err(DebateError::EmptyTopic)
        ));
    }

    #[test]
    fn new_starts_initial_with_results_unset() {
        let s = state();
        assert_eq!(s.step, Step::Initial);
        assert_eq!(s.topic, "Cats vs dogs");
        assert!(s.affirmative_case.is_none());
        assert!(s.negative_case.is_none());
        assert!(s.verdict.is_none());
        assert!(s.display_text.is_none());
    }

    /// **Scenario**: advance accepts only the successor; skipping and going back fail.
    #[test]
    fn advance_only_to_successor() {
        let mut s = state();
        assert!(matches!(
            s.advance(Step::NegativeOpen),
            Err(DebateError::InvalidTransition {
                from: Step::Initial,
                to: Step::NegativeOpen
            })
        ));
        s.advance(Step::AffirmativeOpen).unwrap();
        assert!(matches!(
            s.advance(Step::Initial),
            Err(DebateError::InvalidTransition { .. })
        ));
        assert_eq!(s.step, Step::AffirmativeOpen);
    }

    #[test]
    fn advance_from_terminal_fails() {
        let mut s = state();
        s.step = Step::Terminal;
        assert!(s.advance(Step::Terminal).is_err());
    }

    #[test]
    fn result_fields_are_write_once() {
        let mut s = state();
        s.set_affirmative_case("first").unwrap();
        let err = s.set_affirmative_case("second").unwrap_err();
        assert!(matches!(
            err,
            DebateError::FieldAlreadySet {
                field: "affirmative_case"
            }
        ));
        assert_eq!(s.affirmative_case.as_deref(), Some("first"));
    }

    #[test]
    fn require_fails_fast_on_unset_field() {
        let s = state();
        let err = s.require_negative_case(Role::Judge).unwrap_err();
        assert!(matches!(
            err,
            DebateError::MissingField {
                role: Role::Judge,
                field: "negative_case"
            }
        ));
    }

    #[test]
    fn require_topic_fails_when_cleared() {
        let mut s = state();
        s.topic.clear();
        assert!(matches!(
            s.require_topic(Role::Affirmative),
            Err(DebateError::MissingField { field: "topic", .. })
        ));
    }

    #[test]
    fn instructions_for_role_picks_matching_text() {
        let i = Instructions {
            judge: "j".into(),
            affirmative: "a".into(),
            negative: "n".into(),
        };
        assert_eq!(i.for_role(Role::Judge), "j");
        assert_eq!(i.for_role(Role::Affirmative), "a");
        assert_eq!(i.for_role(Role::Negative), "n");
    }
}
