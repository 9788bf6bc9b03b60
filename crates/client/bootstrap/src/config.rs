//! History client configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use runtime::RuntimeConfig;

const DEFAULT_DATA_DIR: &str = ".uttt";

/// Storage backend used for the game history document.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StorageBackend {
    /// One JSON file per key under the save-data directory.
    #[default]
    File,
    /// Process-local map; history is lost on exit.
    Memory,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "file" | "fs" => Ok(Self::File),
            "memory" | "mem" => Ok(Self::Memory),
            other => Err(format!("unknown history backend: {other}")),
        }
    }
}

/// Configuration required to bootstrap the history runtime and front-end.
#[derive(Clone, Debug)]
pub struct HistoryConfig {
    pub backend: StorageBackend,
    pub save_data_dir: PathBuf,
    pub command_buffer: usize,
    pub event_buffer: usize,
    pub session_id: Option<String>,
    pub log_to_stderr: bool,
    /// Values that were ignored while loading, in lookup order. Logging is
    /// not installed yet at that point, so the caller reports them.
    pub warnings: Vec<String>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        let runtime = RuntimeConfig::default();
        Self {
            backend: StorageBackend::default(),
            save_data_dir: default_data_dir(),
            command_buffer: runtime.command_buffer_size,
            event_buffer: runtime.event_buffer_size,
            session_id: None,
            log_to_stderr: false,
            warnings: Vec::new(),
        }
    }
}

impl HistoryConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `HISTORY_BACKEND` - `file` or `memory` (default: file)
    /// - `SAVE_DATA_DIR` - Directory for the history file (default: platform-specific)
    /// - `HISTORY_COMMAND_BUFFER` - History worker queue size (default: 32)
    /// - `HISTORY_EVENT_BUFFER` - Per-mount event channel size (default: 64)
    /// - `GAME_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `LOG_TO_STDERR` - Mirror logs to stderr (default: false)
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        match lookup("HISTORY_BACKEND").map(|raw| raw.parse::<StorageBackend>()) {
            Some(Ok(backend)) => config.backend = backend,
            Some(Err(err)) => config
                .warnings
                .push(format!("{err}; falling back to file backend")),
            None => {}
        }

        if let Some(dir) = lookup("SAVE_DATA_DIR").filter(|dir| !dir.trim().is_empty()) {
            config.save_data_dir = PathBuf::from(dir);
        }

        if let Some(capacity) =
            read_env::<usize, _>(&lookup, "HISTORY_COMMAND_BUFFER", &mut config.warnings)
        {
            config.command_buffer = capacity.max(1);
        }

        if let Some(capacity) =
            read_env::<usize, _>(&lookup, "HISTORY_EVENT_BUFFER", &mut config.warnings)
        {
            config.event_buffer = capacity.max(1);
        }

        config.session_id = lookup("GAME_SESSION_ID").filter(|id| !id.trim().is_empty());

        // A bare `LOG_TO_STDERR=` still counts as enabled.
        config.log_to_stderr = read_env_bool(&lookup, "LOG_TO_STDERR");

        config
    }

    /// Runtime tuning derived from this configuration.
    pub fn runtime_config(&self) -> RuntimeConfig {
        RuntimeConfig {
            command_buffer_size: self.command_buffer,
            event_buffer_size: self.event_buffer,
        }
    }

    /// Directory that holds per-session log folders.
    pub fn log_dir(&self) -> PathBuf {
        directories::ProjectDirs::from("io", "uttt", "uttt")
            .map(|dirs| dirs.cache_dir().join("logs"))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR).join("logs"))
    }
}

fn default_data_dir() -> PathBuf {
    directories::ProjectDirs::from("io", "uttt", "uttt")
        .map(|dirs| dirs.data_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR))
}

fn read_env<T, F>(lookup: &F, key: &str, warnings: &mut Vec<String>) -> Option<T>
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    let raw = lookup(key)?;
    let parsed = raw.trim().parse().ok();
    if parsed.is_none() {
        warnings.push(format!("ignoring {key}={raw:?}; using the default"));
    }
    parsed
}

fn read_env_bool<F>(lookup: &F, key: &str) -> bool
where
    F: Fn(&str) -> Option<String>,
{
    lookup(key).is_some_and(|raw| {
        matches!(
            raw.trim().to_ascii_lowercase().as_str(),
            "" | "1" | "true" | "yes" | "on"
        )
    })
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    fn config_from(vars: &[(&str, &str)]) -> HistoryConfig {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        HistoryConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_without_variables() {
        let config = config_from(&[]);
        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.command_buffer, 32);
        assert_eq!(config.event_buffer, 64);
        assert!(config.session_id.is_none());
        assert!(!config.log_to_stderr);
        assert!(config.warnings.is_empty());
    }

    #[test]
    fn reads_all_variables() {
        let config = config_from(&[
            ("HISTORY_BACKEND", "Memory"),
            ("SAVE_DATA_DIR", "/tmp/uttt-saves"),
            ("HISTORY_COMMAND_BUFFER", "8"),
            ("HISTORY_EVENT_BUFFER", "16"),
            ("GAME_SESSION_ID", "evening"),
            ("LOG_TO_STDERR", "true"),
        ]);

        assert_eq!(config.backend, StorageBackend::Memory);
        assert_eq!(config.save_data_dir, PathBuf::from("/tmp/uttt-saves"));
        assert_eq!(config.command_buffer, 8);
        assert_eq!(config.event_buffer, 16);
        assert_eq!(config.session_id.as_deref(), Some("evening"));
        assert!(config.log_to_stderr);
    }

    #[test]
    fn invalid_values_fall_back() {
        let config = config_from(&[
            ("HISTORY_BACKEND", "sqlite"),
            ("HISTORY_COMMAND_BUFFER", "lots"),
            ("HISTORY_EVENT_BUFFER", "0"),
            ("LOG_TO_STDERR", "no"),
        ]);

        assert_eq!(config.backend, StorageBackend::File);
        assert_eq!(config.command_buffer, 32);
        assert_eq!(config.event_buffer, 1);
        assert!(!config.log_to_stderr);
        assert_eq!(
            config.warnings,
            vec![
                "unknown history backend: sqlite; falling back to file backend".to_owned(),
                "ignoring HISTORY_COMMAND_BUFFER=\"lots\"; using the default".to_owned(),
            ]
        );
    }

    #[test]
    fn bare_flag_enables_stderr() {
        assert!(config_from(&[("LOG_TO_STDERR", "")]).log_to_stderr);
    }

    #[test]
    fn runtime_config_mirrors_buffers() {
        let config = config_from(&[("HISTORY_COMMAND_BUFFER", "4")]);
        let runtime = config.runtime_config();
        assert_eq!(runtime.command_buffer_size, 4);
        assert_eq!(runtime.event_buffer_size, 64);
    }
}
