use std::path::{Path, PathBuf};

use crate::error::ConfigError;

use super::types::{AppConfig, LlmProvider};

pub const CONFIG_ENV: &str = "GREYBEARD_CONFIG";
pub const DEFAULT_CONFIG_DIR: &str = "snyk-greybeard";

pub fn load_default() -> Result<AppConfig, ConfigError> {
    let mut cfg = match config_path() {
        Some(path) => load_from_path(&path)?,
        None => AppConfig::default(),
    };
    apply_env_overrides(&mut cfg, |key| std::env::var(key).ok());
    Ok(cfg)
}

pub fn load_from_path(path: &Path) -> Result<AppConfig, ConfigError> {
    let s = std::fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        source: e,
    })?;
    let cfg = toml::from_str::<AppConfig>(&s).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        source: e,
    })?;
    tracing::debug!(target: "greybeard.config", path = %path.display(), "loaded config file");
    Ok(cfg)
}

/// An explicit `GREYBEARD_CONFIG` must exist; the per-user file is optional.
fn config_path() -> Option<PathBuf> {
    if let Ok(v) = std::env::var(CONFIG_ENV) {
        if !v.trim().is_empty() {
            return Some(PathBuf::from(v));
        }
    }
    let p = dirs::config_dir()?.join(DEFAULT_CONFIG_DIR).join("config.toml");
    p.exists().then_some(p)
}

fn apply_env_overrides<F>(cfg: &mut AppConfig, get: F)
where
    F: Fn(&str) -> Option<String>,
{
    let LlmProvider::OpenAi(ref mut openai) = cfg.llm.provider;
    if let Some(v) = get("GREYBEARD_API_URL") {
        if !v.trim().is_empty() {
            openai.base_url = v;
        }
    }
    if let Some(v) = get("GREYBEARD_MODEL") {
        if !v.trim().is_empty() {
            openai.model = v;
        }
    }
}
