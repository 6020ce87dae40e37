//! Read `$XDG_CONFIG_HOME/<app>/config.toml` into env key-value pairs.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::LoadError;

/// `<config dir>/<app_name>/config.toml`. `XDG_CONFIG_HOME` wins over the platform default.
pub fn config_path(app_name: &str) -> Result<PathBuf, LoadError> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(dirs::config_dir)
        .ok_or(LoadError::XdgPath)?;
    Ok(base.join(app_name).join("config.toml"))
}

/// `[debate]` table: typed shortcuts for the runner's env variables.
#[derive(Clone, Debug, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebateSection {
    pub model: Option<String>,
    pub temperature: Option<f32>,
    pub prompts_file: Option<String>,
}

impl DebateSection {
    fn into_env(self) -> impl Iterator<Item = (String, String)> {
        [
            ("DEBATE_MODEL", self.model),
            ("DEBATE_TEMPERATURE", self.temperature.map(|t| t.to_string())),
            ("DEBATE_PROMPTS_FILE", self.prompts_file),
        ]
        .into_iter()
        .filter_map(|(k, v)| v.map(|v| (k.to_string(), v)))
    }
}

#[derive(Deserialize, Default)]
struct ConfigFile {
    #[serde(default)]
    env: HashMap<String, String>,
    #[serde(default)]
    debate: DebateSection,
}

/// Env pairs from the app's config file. Missing file returns an empty map.
pub fn load_env_map(app_name: &str) -> Result<HashMap<String, String>, LoadError> {
    let path = config_path(app_name)?;
    if !path.is_file() {
        return Ok(HashMap::new());
    }
    read_env_map(&path)
}

/// `[env]` entries win over the same key derived from `[debate]`.
fn read_env_map(path: &Path) -> Result<HashMap<String, String>, LoadError> {
    let content = std::fs::read_to_string(path).map_err(|source| LoadError::XdgRead {
        path: path.to_path_buf(),
        source,
    })?;
    let config: ConfigFile = toml::from_str(&content)?;
    let mut out: HashMap<String, String> = config.debate.into_env().collect();
    out.extend(config.env);
    Ok(out)
}
