use std::path::Path;

use crate::checkpoint::CheckpointStoreConfig;
use crate::error::ConfigError;
use crate::plot::PlotConfig;

/// Top-level training-utility configuration, loadable from TOML.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct TrainConfig {
    pub seed: u64,
    pub checkpoint: CheckpointStoreConfig,
    pub plot: PlotConfig,
}

impl Default for TrainConfig {
    fn default() -> Self {
        TrainConfig {
            seed: 42,
            checkpoint: CheckpointStoreConfig::default(),
            plot: PlotConfig::default(),
        }
    }
}

impl TrainConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: TrainConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            eprintln!(
                "Warning: config file '{}' not found, using defaults",
                path.display()
            );
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.checkpoint.max_keep == 0 {
            return Err(ConfigError::Validation(
                "checkpoint.max_keep must be >= 1".into(),
            ));
        }
        if self.plot.smoothing_window == 0 {
            return Err(ConfigError::Validation(
                "plot.smoothing_window must be >= 1".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&TrainConfig::default()).expect("default config serializes")
    }
}
