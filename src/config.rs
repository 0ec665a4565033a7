use std::path::Path;

use crate::error::ConfigError;
use crate::sorting::Algorithm;

/// Settings for a single `run`.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct RunConfig {
    pub light_count: usize,
    pub algorithms: Vec<Algorithm>,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            light_count: 4,
            algorithms: Algorithm::ALL.to_vec(),
        }
    }
}

/// Settings for the timing sweep over increasing row sizes.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SweepConfig {
    pub max_light_count: usize,
    pub step: usize,
    pub repetitions: usize,
}

impl Default for SweepConfig {
    fn default() -> Self {
        SweepConfig {
            max_light_count: 64,
            step: 1,
            repetitions: 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub run: RunConfig,
    pub sweep: SweepConfig,
    pub output: OutputConfig,
}

impl AppConfig {
    /// Read and validate run, sweep and output settings from `path`.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Like [`AppConfig::load`], but a missing file yields the defaults
    /// (n = 4, both algorithms, text output) with a warning.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.run.light_count == 0 {
            return Err(ConfigError::Validation(
                "run.light_count must be > 0".into(),
            ));
        }
        if self.run.algorithms.is_empty() {
            return Err(ConfigError::Validation(
                "run.algorithms must name at least one algorithm".into(),
            ));
        }
        if self.sweep.max_light_count == 0 {
            return Err(ConfigError::Validation(
                "sweep.max_light_count must be > 0".into(),
            ));
        }
        if self.sweep.step == 0 {
            return Err(ConfigError::Validation("sweep.step must be > 0".into()));
        }
        if self.sweep.repetitions == 0 {
            return Err(ConfigError::Validation(
                "sweep.repetitions must be > 0".into(),
            ));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
