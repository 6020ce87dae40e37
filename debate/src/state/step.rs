//! Step marker: which phase of the fixed sequence a run is in.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Phase of a debate run.
///
/// The only legal path is
/// `Initial -> AffirmativeOpen -> NegativeOpen -> Judgement -> Terminal`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Step {
    /// Fresh run; the Judge has not echoed the topic yet.
    Initial,
    /// The Affirmative side opens next.
    AffirmativeOpen,
    /// The Negative side opens next.
    NegativeOpen,
    /// Both cases are in; the Judge delivers the verdict next.
    Judgement,
    /// Verdict written; the run is over.
    Terminal,
}

impl Step {
    /// The only marker that may follow this one. `None` for `Terminal`.
    pub fn successor(self) -> Option<Step> {
        match self {
            Step::Initial => Some(Step::AffirmativeOpen),
            Step::AffirmativeOpen => Some(Step::NegativeOpen),
            Step::NegativeOpen => Some(Step::Judgement),
            Step::Judgement => Some(Step::Terminal),
            Step::Terminal => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Step::Initial => "Initial",
            Step::AffirmativeOpen => "AffirmativeOpen",
            Step::NegativeOpen => "NegativeOpen",
            Step::Judgement => "Judgement",
            Step::Terminal => "Terminal",
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
