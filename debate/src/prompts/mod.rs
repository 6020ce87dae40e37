//! Built-in role instructions and the text templates handlers send to the generator.
//!
//! Instructions can be overridden from a YAML file ([`load`]) and from env
//! (`DEBATE_JUDGE_INSTRUCTION`, `DEBATE_AFFIRMATIVE_INSTRUCTION`, `DEBATE_NEGATIVE_INSTRUCTION`).

mod load;

use serde::Deserialize;

pub use load::{apply_env, load, load_or_default, LoadError};

/// Default system instruction for the Judge's verdict.
pub const DEFAULT_JUDGE_INSTRUCTION: &str = "You are an expert Judge of debates. Review the topic, AFF and NEG case below and delivery your verdict, with explanation.";

/// Default system instruction for the Affirmative case.
pub const DEFAULT_AFFIRMATIVE_INSTRUCTION: &str =
    "You are an expert debater. Create a strong AFF case for the topic below.";

/// Default system instruction for the Negative case.
pub const DEFAULT_NEGATIVE_INSTRUCTION: &str =
    "You are an expert debater. Create a strong NEG case for the topic below.";

/// YAML shape for a prompts file. All keys optional; missing keys keep the defaults.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct PromptsFile {
    pub judge: Option<String>,
    pub affirmative: Option<String>,
    pub negative: Option<String>,
}

/// Topic echo shown by the Judge before any case is argued.
pub fn topic_banner(topic: &str) -> String {
    format!("Topic is {}", topic)
}

/// User turns for the Judge's verdict call: topic, affirmative case, negative case.
pub fn judgement_turns(topic: &str, affirmative_case: &str, negative_case: &str) -> Vec<String> {
    vec![
        format!("Topic: {}", topic),
        format!("Aff case: {}", affirmative_case),
        format!("Neg case: {}", negative_case),
    ]
}
