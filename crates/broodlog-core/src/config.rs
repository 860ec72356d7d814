//! Configuration module for Broodlog.
//!
//! Provides typed configuration structs that map to the YAML
//! configuration file, with loading, defaults, and platform paths.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::ports::toast::DEFAULT_TOAST_TIMEOUT_MS;

/// Top-level configuration for Broodlog.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub storage: StorageConfig,
    pub diagnostics: DiagnosticsConfig,
    pub logging: LoggingConfig,
}

/// Local storage settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StorageConfig {
    /// Directory holding persisted local values (the diagnostic log).
    pub data_dir: PathBuf,
}

/// Diagnostic capture settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    /// Milliseconds an error toast stays visible before auto-dismissing.
    pub toast_timeout_ms: u64,
}

/// Logging / tracing settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level: `trace`, `debug`, `info`, `warn`, or `error`.
    pub level: String,
}

impl Config {
    /// Load configuration from a YAML file at `path`.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let config: Config = serde_yaml::from_str(&content)?;
        Ok(config)
    }

    /// Try to load from `path`; fall back to [`Config::default`] on any error.
    pub fn load_or_default(path: &Path) -> Self {
        Self::load(path).unwrap_or_default()
    }

    /// Platform-appropriate default path for the configuration file.
    ///
    /// Typically `$XDG_CONFIG_HOME/broodlog/config.yaml` on Linux.
    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("~/.config"))
            .join("broodlog")
            .join("config.yaml")
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("~/.local/share"))
                .join("broodlog"),
        }
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            toast_timeout_ms: DEFAULT_TOAST_TIMEOUT_MS,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.diagnostics.toast_timeout_ms, DEFAULT_TOAST_TIMEOUT_MS);
        assert_eq!(config.logging.level, "warn");
        assert!(config.storage.data_dir.ends_with("broodlog"));
    }

    #[test]
    fn test_load_from_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "storage:\n  data_dir: /tmp/broodlog-test\ndiagnostics:\n  toast_timeout_ms: 2500\nlogging:\n  level: debug"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/broodlog-test"));
        assert_eq!(config.diagnostics.toast_timeout_ms, 2500);
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_load_or_default_on_missing_file() {
        let config = Config::load_or_default(Path::new("/nonexistent/config.yaml"));
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "storage: [not, a, mapping").unwrap();
        assert!(Config::load(file.path()).is_err());
    }
}
