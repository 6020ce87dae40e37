//! Load configuration from XDG `config.toml` and project `.env`, then apply it to the process
//! environment with priority: **existing env > .env > XDG**.
//!
//! The XDG file may carry a raw `[env]` table and a `[debate]` table whose keys map onto the
//! `DEBATE_*` variables read by the debate runner:
//!
//! ```toml
//! [env]
//! OPENAI_API_KEY = "sk-..."
//!
//! [debate]
//! model = "gpt-4o-mini"
//! temperature = 0.2
//! prompts_file = "/home/me/prompts.yaml"
//! ```

mod dotenv;
mod xdg_toml;

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use thiserror::Error;

pub use xdg_toml::{config_path, DebateSection};

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("no config directory for this platform")]
    XdgPath,
    #[error("read {path}: {source}")]
    XdgRead {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("parse xdg toml: {0}")]
    XdgParse(#[from] toml::de::Error),
    #[error("read .env: {0}")]
    Dotenv(#[from] ::dotenv::Error),
}

/// Loads XDG `config.toml` and the project `.env`, then sets env vars only for keys that are
/// **not** already set.
///
/// Order of precedence when a key is missing in the process environment:
/// 1. Value from project `.env` (current directory, or `override_dir` if given)
/// 2. Value from `$XDG_CONFIG_HOME/<app_name>/config.toml` (`[env]` first, then `[debate]`)
///
/// Returns the keys that were set.
pub fn load_and_apply(app_name: &str, override_dir: Option<&Path>) -> Result<Vec<String>, LoadError> {
    let xdg_map = xdg_toml::load_env_map(app_name)?;
    let dotenv_map = dotenv::load_env_map(override_dir)?;
    Ok(apply(&dotenv_map, &xdg_map))
}

/// Sets each missing key from `dotenv_map`, falling back to `xdg_map`.
fn apply(dotenv_map: &HashMap<String, String>, xdg_map: &HashMap<String, String>) -> Vec<String> {
    let mut keys: Vec<&String> = xdg_map.keys().chain(dotenv_map.keys()).collect();
    keys.sort();
    keys.dedup();

    let mut applied = Vec::new();
    for key in keys {
        if std::env::var_os(key).is_some() {
            continue;
        }
        if let Some(v) = dotenv_map.get(key).or_else(|| xdg_map.get(key)) {
            std::env::set_var(key, v);
            applied.push(key.clone());
        }
    }
    applied
}
