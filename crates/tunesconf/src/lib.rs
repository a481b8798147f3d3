//! Minimal configuration loading for Tunesmith.
//!
//! # Config File Locations
//!
//! Files are loaded in order (later wins, key by key):
//! 1. `/etc/tunesmith/config.toml` (system)
//! 2. `~/.config/tunesmith/config.toml` (user)
//! 3. `./tunesmith.toml` (local override, or the `--config` path)
//! 4. Environment variables (`TUNESMITH_*`)
//!
//! # Example Config
//!
//! ```toml
//! [model]
//! api_key = "gsk_..."
//! model = "llama-3.1-8b-instant"
//! temperature = 0.7
//!
//! [audio]
//! sample_rate = 44100
//! note_duration = 0.5
//! honor_rhythm = true
//!
//! [log]
//! level = "info"
//! ```

pub mod loader;
pub mod sections;

pub use loader::{discover_config_files_with_override, ConfigSources};
pub use sections::{AudioConfig, LogConfig, ModelConfig};

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use thiserror::Error;

/// Configuration loading errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {message}")]
    Parse { path: PathBuf, message: String },
}

/// Complete Tunesmith configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TunesConfig {
    /// Text-generation provider.
    #[serde(default)]
    pub model: ModelConfig,

    /// Rendering pipeline.
    #[serde(default)]
    pub audio: AudioConfig,

    /// Logging.
    #[serde(default)]
    pub log: LogConfig,
}

impl TunesConfig {
    /// Load configuration from all standard sources.
    pub fn load() -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(None)?;
        Ok(config)
    }

    /// Load configuration from a specific file path, then apply env overrides.
    ///
    /// If `config_path` is provided, it takes precedence over the local
    /// `./tunesmith.toml` override. System and user configs still load first.
    pub fn load_from(config_path: Option<&std::path::Path>) -> Result<Self, ConfigError> {
        let (config, _sources) = Self::load_with_sources_from(config_path)?;
        Ok(config)
    }

    /// Load configuration from optional path and return information about sources.
    pub fn load_with_sources_from(
        config_path: Option<&std::path::Path>,
    ) -> Result<(Self, ConfigSources), ConfigError> {
        let mut sources = ConfigSources::default();
        let mut config = TunesConfig::default();

        for path in loader::discover_config_files_with_override(config_path) {
            loader::apply_file(&mut config, &path)?;
            sources.files.push(path);
        }

        loader::apply_env_overrides(&mut config, &mut sources);

        Ok((config, sources))
    }
}
