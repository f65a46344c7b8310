//! Engine and application configuration, loadable from TOML

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::board::{BOARD_SIZE, MAX_BOARD_SIZE};
use crate::error::ConfigError;

/// Smallest board that can still hold a five
pub const MIN_BOARD_SIZE: usize = 5;

/// Search and board parameters handed to the engine at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Board edge length
    pub board_size: usize,
    /// Plies searched below the root
    pub search_depth: u8,
    /// Quiet moves tried per node
    pub candidate_limit: usize,
    /// Perturb board scores to vary play between games
    pub jitter: bool,
    /// Fixed jitter seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            board_size: BOARD_SIZE,
            search_depth: 4,
            candidate_limit: 10,
            jitter: true,
            seed: None,
        }
    }
}

impl EngineConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BOARD_SIZE..=MAX_BOARD_SIZE).contains(&self.board_size) {
            return Err(ConfigError::Validation(format!(
                "engine.board_size must be in {MIN_BOARD_SIZE}..={MAX_BOARD_SIZE}"
            )));
        }
        if self.search_depth == 0 {
            return Err(ConfigError::Validation(
                "engine.search_depth must be >= 1".into(),
            ));
        }
        if self.candidate_limit == 0 {
            return Err(ConfigError::Validation(
                "engine.candidate_limit must be >= 1".into(),
            ));
        }
        Ok(())
    }
}

/// Top-level application configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub engine: EngineConfig,
    /// Human plays Black and moves first in a game against the AI
    pub human_first: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            engine: EngineConfig::default(),
            human_first: true,
        }
    }
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Self::from_toml(&content)
    }

    /// Parse and validate configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            log::warn!("config file '{}' not found, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.engine.validate()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_defaults() {
        let config = AppConfig::default();
        assert_eq!(config.engine.board_size, 15);
        assert_eq!(config.engine.search_depth, 4);
        assert_eq!(config.engine.candidate_limit, 10);
        assert!(config.engine.jitter);
        assert_eq!(config.engine.seed, None);
        assert!(config.human_first);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = AppConfig::from_toml(
            r#"
            human_first = false

            [engine]
            search_depth = 2
            seed = 42
            "#,
        )
        .unwrap();
        assert!(!config.human_first);
        assert_eq!(
            config.engine,
            EngineConfig {
                search_depth: 2,
                seed: Some(42),
                ..EngineConfig::default()
            }
        );
    }

    #[test]
    fn test_empty_toml_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
    }

    #[test]
    fn test_validation_errors() {
        let err = AppConfig::from_toml("[engine]\nboard_size = 4\n").unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));

        let err = AppConfig::from_toml("[engine]\nsearch_depth = 0\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "config validation error: engine.search_depth must be >= 1"
        );

        let config = EngineConfig {
            candidate_limit: 0,
            ..EngineConfig::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_malformed_toml() {
        let err = AppConfig::from_toml("[engine\nboard_size = 15").unwrap_err();
        assert!(matches!(err, ConfigError::TomlParse(_)));
    }

    #[test]
    fn test_missing_file_falls_back() {
        let path = Path::new("definitely/not/here/gobang.toml");
        assert_eq!(AppConfig::load_or_default(path).unwrap(), AppConfig::default());
        assert!(matches!(
            AppConfig::load(path),
            Err(ConfigError::FileRead { .. })
        ));
    }
}
