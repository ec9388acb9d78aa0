use std::path::Path;

use crate::ai::MinimaxConfig;
use crate::error::ConfigError;
use crate::play::SeriesConfig;

/// Deepest search the config accepts. Beyond this a single move takes far
/// too long on a 7-wide board.
pub const MAX_SEARCH_DEPTH: usize = 9;

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: MinimaxConfig,
    pub series: SeriesConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.search.depth == 0 {
            return Err(ConfigError::Validation("search.depth must be > 0".into()));
        }
        if self.search.depth > MAX_SEARCH_DEPTH {
            return Err(ConfigError::Validation(format!(
                "search.depth must be <= {MAX_SEARCH_DEPTH}"
            )));
        }
        if self.series.games == 0 {
            return Err(ConfigError::Validation("series.games must be > 0".into()));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}
