//! Read a project `.env` into a key-value map without touching the process env.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// `.env` in `override_dir` if given, else in the current directory.
fn dotenv_path(override_dir: Option<&Path>) -> Option<PathBuf> {
    let dir = override_dir
        .map(Path::to_path_buf)
        .or_else(|| std::env::current_dir().ok())?;
    let path = dir.join(".env");
    path.is_file().then_some(path)
}

/// Parses `.env` with the `dotenv` crate's grammar (quotes, `export`, `${VAR}` substitution).
/// Missing file returns an empty map.
pub fn load_env_map(override_dir: Option<&Path>) -> Result<HashMap<String, String>, ::dotenv::Error> {
    let Some(path) = dotenv_path(override_dir) else {
        return Ok(HashMap::new());
    };
    ::dotenv::from_path_iter(&path)?.collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn load(content: &str) -> HashMap<String, String> {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), content).unwrap();
        load_env_map(Some(dir.path())).unwrap()
    }

    #[test]
    fn reads_pairs_and_skips_comments() {
        let m = load("# model settings\nDEBATE_MODEL=gpt-4o\n\nDEBATE_TEMPERATURE=0.3\n");
        assert_eq!(m.get("DEBATE_MODEL").map(String::as_str), Some("gpt-4o"));
        assert_eq!(m.get("DEBATE_TEMPERATURE").map(String::as_str), Some("0.3"));
        assert_eq!(m.len(), 2);
    }

    #[test]
    fn quoted_instruction_keeps_spaces() {
        let m = load("DEBATE_JUDGE_INSTRUCTION=\"Be brief. Pick a side.\"\n");
        assert_eq!(
            m.get("DEBATE_JUDGE_INSTRUCTION").map(String::as_str),
            Some("Be brief. Pick a side.")
        );
    }

    #[test]
    fn missing_file_returns_empty() {
        let dir = tempfile::tempdir().unwrap();
        assert!(load_env_map(Some(dir.path())).unwrap().is_empty());
    }

    #[test]
    fn malformed_line_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(".env"), "NOT A PAIR\n").unwrap();
        assert!(load_env_map(Some(dir.path())).is_err());
    }
}
