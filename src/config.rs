use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::info;

/// Default provenance string reported by the `stats` tool.
pub const DEFAULT_SOURCE: &str = "490 sessions of autonomous AI agent operation";

#[derive(Debug, Deserialize, Clone, Default)]
#[serde(default)]
pub struct FieldGuideConfig {
    pub server: ServerConfig,
    pub corpus: CorpusConfig,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct ServerConfig {
    pub log_level: String,
}

#[derive(Debug, Deserialize, Clone)]
#[serde(default)]
pub struct CorpusConfig {
    /// JSON dataset to load instead of the bundled one.
    pub path: Option<String>,
    pub source: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            log_level: "info".into(),
        }
    }
}

impl Default for CorpusConfig {
    fn default() -> Self {
        Self {
            path: None,
            source: DEFAULT_SOURCE.into(),
        }
    }
}

/// Returns `~/.agent-field-guide/`
pub fn default_field_guide_dir() -> PathBuf {
    home_dir().join(".agent-field-guide")
}

/// Returns the default config file path: `~/.agent-field-guide/config.toml`
pub fn default_config_path() -> PathBuf {
    default_field_guide_dir().join("config.toml")
}

impl FieldGuideConfig {
    /// Load config from the default TOML file (if it exists) then apply env var overrides.
    pub fn load() -> Result<Self> {
        Self::load_from(default_config_path())
    }

    /// Load from a specific path, then apply env var overrides.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let mut config = if path.exists() {
            let contents = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file {}", path.display()))?;
            toml::from_str(&contents).context("failed to parse config TOML")?
        } else {
            info!("no config file at {}, using defaults", path.display());
            FieldGuideConfig::default()
        };

        config.apply_env_overrides();
        Ok(config)
    }

    /// Apply environment variable overrides (FIELD_GUIDE_PATTERNS, FIELD_GUIDE_LOG_LEVEL).
    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FIELD_GUIDE_PATTERNS") {
            if !val.trim().is_empty() {
                self.corpus.path = Some(val);
            }
        }
        if let Ok(val) = std::env::var("FIELD_GUIDE_LOG_LEVEL") {
            self.server.log_level = val;
        }
    }

    /// Resolve the dataset path, expanding `~` if needed. `None` means the bundled dataset.
    pub fn resolved_corpus_path(&self) -> Option<PathBuf> {
        self.corpus.path.as_deref().map(expand_tilde)
    }
}

pub fn expand_tilde(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => home_dir().join(rest),
        None => PathBuf::from(path),
    }
}

fn home_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("."))
}
