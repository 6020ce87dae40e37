//! Turn formatting for stdout: one titled section per turn, or one JSON object per line.

use debate::{Role, Step, Turn};
use serde::Serialize;

/// The text a turn produced: the topic banner, a case or the verdict.
pub fn turn_text(turn: &Turn) -> Option<&str> {
    let state = &turn.state;
    match (turn.role, state.step) {
        (Role::Judge, Step::Terminal) => state.verdict.as_deref(),
        (Role::Judge, _) => state.display_text.as_deref(),
        (Role::Affirmative, _) => state.affirmative_case.as_deref(),
        (Role::Negative, _) => state.negative_case.as_deref(),
    }
}

/// Section heading for a turn; the Judge's two turns get distinct titles.
pub fn turn_title(turn: &Turn) -> &'static str {
    match (turn.role, turn.state.step) {
        (Role::Judge, Step::Terminal) => "Judge: verdict",
        (Role::Judge, _) => "Judge",
        (Role::Affirmative, _) => "Affirmative",
        (Role::Negative, _) => "Negative",
    }
}

/// Plain-text section for one turn, ending with a blank line.
pub fn format_turn(turn: &Turn) -> String {
    format!(
        "=== {} ===\n{}\n\n",
        turn_title(turn),
        turn_text(turn).unwrap_or_default()
    )
}

/// One NDJSON record per turn.
#[derive(Debug, Serialize)]
pub struct TurnRecord<'a> {
    pub run_id: &'a str,
    pub role: Role,
    pub step: Step,
    pub text: Option<&'a str>,
}

impl<'a> TurnRecord<'a> {
    pub fn new(run_id: &'a str, turn: &'a Turn) -> Self {
        Self {
            run_id,
            role: turn.role,
            step: turn.state.step,
            text: turn_text(turn),
        }
    }
}
