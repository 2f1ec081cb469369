use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::client::http::DEFAULT_FIELD;
use crate::client::simulated::{DEFAULT_CONFIDENCE_MAX, DEFAULT_CONFIDENCE_MIN, DEFAULT_DELAY};

/// Default configuration embedded in the binary.
pub const DEFAULT_CONFIG_TOML: &str = include_str!("assets/config.toml");

/// Error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse config file '{path}':\n{source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Filenames to search for project-level configuration.
const CONFIG_FILENAMES: &[&str] = &["inference-hub.toml", ".inference-hub.toml"];

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub inference: InferenceConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
}

/// Where and how inference requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct InferenceConfig {
    /// Live endpoint, requests are simulated when unset.
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Name of the JSON body field carrying the canonical path.
    #[serde(default = "default_field")]
    pub field: String,

    /// Overall request timeout in seconds, unset leaves it to the transport.
    #[serde(default)]
    pub timeout_secs: Option<u64>,

    /// Use the simulated responder even if an endpoint is set.
    #[serde(default)]
    pub simulate: bool,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            endpoint: None,
            field: default_field(),
            timeout_secs: None,
            simulate: false,
        }
    }
}

/// Settings of the simulated responder.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SimulationConfig {
    #[serde(default = "default_delay_ms")]
    pub delay_ms: u64,
    #[serde(default = "default_confidence_min")]
    pub confidence_min: f64,
    #[serde(default = "default_confidence_max")]
    pub confidence_max: f64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            delay_ms: default_delay_ms(),
            confidence_min: default_confidence_min(),
            confidence_max: default_confidence_max(),
        }
    }
}

impl Config {
    /// Load configuration in the following order:
    /// 1. Project-level config (inference-hub.toml or .inference-hub.toml in current/parent dirs)
    /// 2. User-level config (~/.config/inference-hub/config.toml)
    /// 3. Default embedded config
    ///
    /// Returns an error if a config file exists but is malformed.
    pub fn load() -> Result<Self, ConfigError> {
        if let Some(path) = Self::project_config_path() {
            return Self::try_load_from_file(&path);
        }
        if let Some(path) = Self::user_config_path() {
            return Self::try_load_from_file(&path);
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicitly specified path.
    ///
    /// Returns an error if the file doesn't exist or is malformed.
    /// If no path is specified, falls back to the default load order.
    pub fn load_from(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => Self::try_load_from_file(p),
            None => Self::load(),
        }
    }

    fn try_load_from_file(path: &Path) -> Result<Self, ConfigError> {
        tracing::debug!("Loading config from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            source: e,
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn project_config_path() -> Option<PathBuf> {
        let cwd = std::env::current_dir().ok()?;
        Self::find_config_in_ancestors(&cwd)
    }

    fn xdg_config_dir() -> Option<PathBuf> {
        let dirs = directories::ProjectDirs::from("", "", "inference-hub")?;
        Some(dirs.config_dir().to_path_buf())
    }

    pub fn user_config_path() -> Option<PathBuf> {
        let config_path = Self::xdg_config_dir()?.join("config.toml");
        config_path.exists().then_some(config_path)
    }

    fn find_config_in_ancestors(start: &Path) -> Option<PathBuf> {
        let mut current = start.to_path_buf();
        loop {
            for filename in CONFIG_FILENAMES {
                let config_path = current.join(filename);
                if config_path.exists() {
                    return Some(config_path);
                }
            }
            if !current.pop() {
                break;
            }
        }
        None
    }
}

fn default_field() -> String {
    DEFAULT_FIELD.to_string()
}

fn default_delay_ms() -> u64 {
    DEFAULT_DELAY.as_millis() as u64
}

fn default_confidence_min() -> f64 {
    DEFAULT_CONFIDENCE_MIN
}

fn default_confidence_max() -> f64 {
    DEFAULT_CONFIDENCE_MAX
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_parses() {
        let config: Config =
            toml::from_str(DEFAULT_CONFIG_TOML).expect("default config should parse");
        assert_eq!(config, Config::default());
        assert!(config.inference.endpoint.is_none());
        assert_eq!(config.inference.field, "video_path");
        assert_eq!(config.simulation.delay_ms, 2000);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: Config = toml::from_str(
            r#"
            [inference]
            endpoint = "http://10.0.0.2:8000/run_inference"
            "#,
        )
        .unwrap();
        assert_eq!(
            config.inference.endpoint.as_deref(),
            Some("http://10.0.0.2:8000/run_inference")
        );
        assert_eq!(config.inference.field, "video_path");
        assert_eq!(config.simulation, SimulationConfig::default());
    }

    #[test]
    fn test_unknown_fields_are_rejected() {
        let result: Result<Config, _> = toml::from_str("[inference]\nretries = 3\n");
        assert!(result.is_err());
    }

    #[test]
    fn test_find_config_in_ancestors() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("a/b");
        std::fs::create_dir_all(&nested).unwrap();
        let file = dir.path().join(".inference-hub.toml");
        std::fs::write(&file, "").unwrap();
        assert_eq!(Config::find_config_in_ancestors(&nested), Some(file));
    }

    #[test]
    fn test_load_from_reports_parse_errors() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("broken.toml");
        std::fs::write(&file, "[simulation\n").unwrap();
        let err = Config::load_from(Some(&file)).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Config::load_from(Some(Path::new("/nonexistent/inference-hub.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
