//! Config file discovery, loading, and environment variable overlay.

use std::env;
use std::path::{Path, PathBuf};

use crate::{ConfigError, TunesConfig};

/// Information about where config values came from.
#[derive(Debug, Clone, Default)]
pub struct ConfigSources {
    /// Config files that were loaded (in order)
    pub files: Vec<PathBuf>,
    /// Environment variables that overrode config values
    pub env_overrides: Vec<String>,
}

/// Discover config files, optionally with a CLI override path.
///
/// Returns paths in load order (system, user, local/cli). If `cli_path` is
/// provided and exists, it replaces the local override. Only returns files
/// that exist.
pub fn discover_config_files_with_override(cli_path: Option<&Path>) -> Vec<PathBuf> {
    let mut files = Vec::new();

    // System config
    let system = PathBuf::from("/etc/tunesmith/config.toml");
    if system.exists() {
        files.push(system);
    }

    // User config (XDG_CONFIG_HOME or ~/.config)
    if let Some(config_dir) = directories::BaseDirs::new().map(|d| d.config_dir().to_path_buf()) {
        let user = config_dir.join("tunesmith/config.toml");
        if user.exists() {
            files.push(user);
        }
    }

    // CLI override takes precedence over local
    if let Some(path) = cli_path {
        if path.exists() {
            files.push(path.to_path_buf());
            return files;
        }
    }

    // Local override (current directory)
    let local = PathBuf::from("tunesmith.toml");
    if local.exists() {
        files.push(local);
    }

    files
}

/// Load a TOML file and apply the keys it defines onto `config`.
///
/// Only keys present in the file are touched, so later files override
/// earlier ones key-by-key.
pub fn apply_file(config: &mut TunesConfig, path: &Path) -> Result<(), ConfigError> {
    let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let table: toml::Table = contents.parse().map_err(|e: toml::de::Error| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;

    if let Some(model) = table.get("model").and_then(|v| v.as_table()) {
        if let Some(v) = model.get("api_key").and_then(|v| v.as_str()) {
            config.model.api_key = v.to_string();
        }
        if let Some(v) = model.get("base_url").and_then(|v| v.as_str()) {
            config.model.base_url = v.to_string();
        }
        if let Some(v) = model.get("model").and_then(|v| v.as_str()) {
            config.model.model = v.to_string();
        }
        if let Some(v) = model.get("temperature").and_then(|v| v.as_float()) {
            config.model.temperature = v as f32;
        }
    }

    if let Some(audio) = table.get("audio").and_then(|v| v.as_table()) {
        if let Some(v) = audio.get("sample_rate").and_then(|v| v.as_integer()) {
            config.audio.sample_rate = v as u32;
        }
        if let Some(v) = audio.get("note_duration").and_then(|v| v.as_float()) {
            config.audio.note_duration = v;
        }
        if let Some(v) = audio.get("honor_rhythm").and_then(|v| v.as_bool()) {
            config.audio.honor_rhythm = v;
        }
    }

    if let Some(log) = table.get("log").and_then(|v| v.as_table()) {
        if let Some(v) = log.get("level").and_then(|v| v.as_str()) {
            config.log.level = v.to_string();
        }
    }

    Ok(())
}

/// Apply environment variable overrides (highest precedence).
pub fn apply_env_overrides(config: &mut TunesConfig, sources: &mut ConfigSources) {
    let overrides: [(&str, &mut String); 4] = [
        ("TUNESMITH_API_KEY", &mut config.model.api_key),
        ("TUNESMITH_BASE_URL", &mut config.model.base_url),
        ("TUNESMITH_MODEL", &mut config.model.model),
        ("TUNESMITH_LOG", &mut config.log.level),
    ];

    for (name, target) in overrides {
        if let Ok(value) = env::var(name) {
            if !value.trim().is_empty() {
                *target = value.trim().to_string();
                sources.env_overrides.push(name.to_string());
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_apply_file_overrides_present_keys_only() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[model]
model = "llama-3.3-70b-versatile"

[audio]
note_duration = 0.25
honor_rhythm = false
"#
        )
        .unwrap();

        let mut config = TunesConfig::default();
        apply_file(&mut config, file.path()).unwrap();

        assert_eq!(config.model.model, "llama-3.3-70b-versatile");
        assert_eq!(config.audio.note_duration, 0.25);
        assert!(!config.audio.honor_rhythm);
        // untouched keys keep their defaults
        assert_eq!(config.audio.sample_rate, 44_100);
        assert_eq!(config.model.base_url, "https://api.groq.com/openai/v1");
    }

    #[test]
    fn test_apply_file_reports_parse_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not [valid toml").unwrap();

        let mut config = TunesConfig::default();
        let err = apply_file(&mut config, file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_missing_file_is_read_error() {
        let mut config = TunesConfig::default();
        let err = apply_file(&mut config, Path::new("/nonexistent/tunesmith.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::FileRead { .. }));
    }

    #[test]
    fn test_env_override() {
        env::set_var("TUNESMITH_API_KEY", "gsk_test_key");

        let mut config = TunesConfig::default();
        let mut sources = ConfigSources::default();
        apply_env_overrides(&mut config, &mut sources);

        assert_eq!(config.model.api_key, "gsk_test_key");
        assert_eq!(sources.env_overrides, vec!["TUNESMITH_API_KEY"]);

        env::remove_var("TUNESMITH_API_KEY");
    }
}
