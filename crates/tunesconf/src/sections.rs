//! Configuration sections with per-field defaults.

use serde::{Deserialize, Serialize};

/// Text-generation provider settings.
///
/// The API key is plain data here; `tunesmith` validates it when the model
/// client is constructed, so a missing key surfaces as a typed error at
/// that point rather than a failure at load time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelConfig {
    /// Bearer token for the provider. No default; usually supplied via the
    /// TUNESMITH_API_KEY environment variable.
    #[serde(default)]
    pub api_key: String,

    /// OpenAI-compatible API root.
    /// Default: https://api.groq.com/openai/v1
    #[serde(default = "ModelConfig::default_base_url")]
    pub base_url: String,

    /// Model name requested from the provider.
    /// Default: llama-3.1-8b-instant
    #[serde(default = "ModelConfig::default_model")]
    pub model: String,

    /// Sampling temperature.
    /// Default: 0.7
    #[serde(default = "ModelConfig::default_temperature")]
    pub temperature: f32,
}

impl ModelConfig {
    fn default_base_url() -> String {
        "https://api.groq.com/openai/v1".to_string()
    }

    fn default_model() -> String {
        "llama-3.1-8b-instant".to_string()
    }

    fn default_temperature() -> f32 {
        0.7
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            base_url: Self::default_base_url(),
            model: Self::default_model(),
            temperature: Self::default_temperature(),
        }
    }
}

/// Rendering settings for the note-to-audio pipeline.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AudioConfig {
    /// Output sample rate in Hz.
    /// Default: 44100
    #[serde(default = "AudioConfig::default_sample_rate")]
    pub sample_rate: u32,

    /// Seconds per note at one beat; also the fixed per-note duration when
    /// rhythm is not honored.
    /// Default: 0.5
    #[serde(default = "AudioConfig::default_note_duration")]
    pub note_duration: f64,

    /// Whether melody notes take the Composer's suggested beat durations.
    /// When false every note gets `note_duration` seconds.
    /// Default: true
    #[serde(default = "AudioConfig::default_honor_rhythm")]
    pub honor_rhythm: bool,
}

impl AudioConfig {
    fn default_sample_rate() -> u32 {
        44_100
    }

    fn default_note_duration() -> f64 {
        0.5
    }

    fn default_honor_rhythm() -> bool {
        true
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            sample_rate: Self::default_sample_rate(),
            note_duration: Self::default_note_duration(),
            honor_rhythm: Self::default_honor_rhythm(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// Log level (trace, debug, info, warn, error).
    /// Default: info
    #[serde(default = "LogConfig::default_level")]
    pub level: String,
}

impl LogConfig {
    fn default_level() -> String {
        "info".to_string()
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Self::default_level(),
        }
    }
}
