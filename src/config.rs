//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use crate::analytics::TriggerRule;
use crate::observation::Factor;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub analysis: AnalysisConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Analytics configuration
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AnalysisConfig {
    /// Factors correlated with mood
    #[serde(default = "default_factors")]
    pub factors: Vec<Factor>,

    /// Threshold conditions for the trigger analyzer
    #[serde(default = "TriggerRule::defaults")]
    pub triggers: Vec<TriggerRule>,

    /// Reports kept by `ReportCache`
    #[serde(default = "default_cache_capacity")]
    pub cache_capacity: usize,
}

fn default_factors() -> Vec<Factor> {
    Factor::all().to_vec()
}

fn default_cache_capacity() -> usize {
    8
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            factors: default_factors(),
            triggers: TriggerRule::defaults(),
            cache_capacity: default_cache_capacity(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from a TOML string
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_env_overrides();
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides();
        Ok(config)
    }

    /// Standard config file locations, in search order
    pub fn default_paths() -> Vec<PathBuf> {
        let mut paths = Vec::new();
        if let Some(dir) = dirs::config_dir() {
            paths.push(dir.join("moodscope").join("config.toml"));
        }
        paths.push(PathBuf::from("./moodscope.toml"));
        paths
    }

    /// Search the standard locations
    ///
    /// Does not log; call [`ConfigDiscovery::log`] once a subscriber is installed.
    pub fn discover() -> ConfigDiscovery {
        Self::discover_from(&Self::default_paths())
    }

    /// Use the first existing file in `paths` that loads cleanly, falling
    /// back to defaults with environment overrides
    pub fn discover_from(paths: &[PathBuf]) -> ConfigDiscovery {
        let mut failures = Vec::new();

        for path in paths.iter().filter(|p| p.exists()) {
            match Self::load_with_env(path) {
                Ok(config) => {
                    return ConfigDiscovery {
                        config,
                        source: Some(path.clone()),
                        failures,
                    };
                }
                Err(e) => failures.push(e),
            }
        }

        ConfigDiscovery {
            config: Self::from_env(),
            source: None,
            failures,
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) {
        if let Ok(level) = std::env::var("MOODSCOPE_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(format) = std::env::var("MOODSCOPE_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Outcome of searching the standard config locations
#[derive(Debug)]
pub struct ConfigDiscovery {
    pub config: Config,
    /// File the config was read from, `None` when defaults were used
    pub source: Option<PathBuf>,
    /// Files that existed but could not be loaded
    pub failures: Vec<ConfigError>,
}

impl ConfigDiscovery {
    /// Report where the config came from and which files were skipped
    pub fn log(&self) {
        for failure in &self.failures {
            tracing::warn!("Skipped config file: {}", failure);
        }
        match &self.source {
            Some(path) => tracing::info!("Loaded config from {:?}", path),
            None => tracing::info!("Using default config with environment overrides"),
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# Moodscope Configuration
#
# Environment variables override these settings:
# - MOODSCOPE_LOG_LEVEL
# - MOODSCOPE_LOG_FORMAT

[analysis]
# Factors correlated with mood: sleep, exercise, stress
factors = ["sleep", "exercise", "stress"]

# Number of reports kept in memory when the same journal is analyzed repeatedly
cache_capacity = 8

# Trigger rules compare mood on days where the factor is >= high_threshold
# against days where it is < low_threshold. Values in between are ignored.
[[analysis.triggers]]
factor = "sleep"
high_threshold = 8.0
low_threshold = 6.0
label = "8+ hours of sleep"
recommendation = "Aim for at least 8 hours of sleep to support a better mood."

[[analysis.triggers]]
factor = "exercise"
high_threshold = 30.0
low_threshold = 15.0
label = "30+ minutes of exercise"
recommendation = "Try to fit in 30 minutes of movement on most days."

[logging]
# Log level: trace, debug, info, warn, error
level = "warn"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}
