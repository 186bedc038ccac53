//! Runtime configuration
//!
//! Read from `--config`, or from `<config_dir>/wordle_pro/config.json` when
//! that file exists, otherwise defaults. Command-line flags are applied on
//! top by the binary.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

pub const APP_DIR: &str = "wordle_pro";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Where score, streak and the help flag are stored
    pub state_file: PathBuf,

    /// Custom dictionary file; the embedded list is used when unset
    pub wordlist: Option<PathBuf>,

    /// Delay between revealing two cells of a submitted row
    pub reveal_delay_ms: u64,

    /// Link appended to the share transcript
    pub share_url: Option<String>,
}

fn default_state_file() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
        .join("state.json")
}

/// Default location of the config file, if the platform has one
#[must_use]
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join(APP_DIR).join("config.json"))
}

impl Default for Config {
    fn default() -> Self {
        Self {
            state_file: default_state_file(),
            wordlist: None,
            // 250 ms flip + 200 ms settle
            reveal_delay_ms: 450,
            share_url: None,
        }
    }
}

impl Config {
    /// Load config from an explicit file, the default location, or defaults
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `path` cannot be read, or if any
    /// config file that exists is not valid JSON.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        if let Some(path) = path {
            return Self::from_file(path);
        }

        match default_config_path() {
            Some(path) if path.exists() => Self::from_file(&path),
            _ => Ok(Self::default()),
        }
    }

    fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config: Self = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    #[must_use]
    pub const fn reveal_delay(&self) -> Duration {
        Duration::from_millis(self.reveal_delay_ms)
    }
}
