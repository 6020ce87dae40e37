//! Load role instructions from a YAML file and apply env overrides.
//!
//! Precedence per role: env var > YAML file > built-in default.

use std::path::Path;

use crate::state::Instructions;

use super::PromptsFile;

/// Env var overriding the Judge instruction.
pub const ENV_JUDGE: &str = "DEBATE_JUDGE_INSTRUCTION";
/// Env var overriding the Affirmative instruction.
pub const ENV_AFFIRMATIVE: &str = "DEBATE_AFFIRMATIVE_INSTRUCTION";
/// Env var overriding the Negative instruction.
pub const ENV_NEGATIVE: &str = "DEBATE_NEGATIVE_INSTRUCTION";

/// Error when loading a prompts file (unreadable file, invalid YAML).
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("failed to read prompts file {path}: {message}")]
    ReadFile { path: String, message: String },
    #[error("failed to parse YAML in {path}: {message}")]
    ParseYaml { path: String, message: String },
}

/// Reads `path` and overlays its keys on the built-in defaults. Env overrides are not applied.
pub fn load(path: &Path) -> Result<Instructions, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|e| LoadError::ReadFile {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;
    let file: PromptsFile = if content.trim().is_empty() {
        PromptsFile::default()
    } else {
        serde_yaml::from_str(&content).map_err(|e| LoadError::ParseYaml {
            path: path.display().to_string(),
            message: e.to_string(),
        })?
    };
    Ok(merge(Instructions::default(), file))
}

/// Instructions from `path` when given (else defaults), with env overrides on top.
pub fn load_or_default(path: Option<&Path>) -> Result<Instructions, LoadError> {
    let base = match path {
        Some(p) => load(p)?,
        None => Instructions::default(),
    };
    Ok(apply_env(base))
}

/// Replaces each instruction whose env var is set and non-empty.
pub fn apply_env(mut instructions: Instructions) -> Instructions {
    if let Some(s) = env_non_empty(ENV_JUDGE) {
        instructions.judge = s;
    }
    if let Some(s) = env_non_empty(ENV_AFFIRMATIVE) {
        instructions.affirmative = s;
    }
    if let Some(s) = env_non_empty(ENV_NEGATIVE) {
        instructions.negative = s;
    }
    instructions
}

fn env_non_empty(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|s| !s.trim().is_empty())
}

fn merge(mut base: Instructions, file: PromptsFile) -> Instructions {
    if let Some(s) = file.judge {
        base.judge = s;
    }
    if let Some(s) = file.affirmative {
        base.affirmative = s;
    }
    if let Some(s) = file.negative {
        base.negative = s;
    }
    base
}
