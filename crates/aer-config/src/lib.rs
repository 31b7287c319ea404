//! # aer-config
//!
//! Layered configuration loading for access exception review using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`AER_*` prefix, `__` as separator)
//! 2. An explicit file passed with `--config`
//! 3. Project-level `.aer/config.toml`
//! 4. User-level `~/.config/aer/config.toml`
//! 5. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `AER_ORG_TREE__HEADS_ONLY` -> `org_tree.heads_only`,
//! `AER_LOGGING__FILE` -> `logging.file`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use aer_config::AerConfig;
//!
//! let config = AerConfig::load_with_dotenv(None).expect("config");
//! if config.org_tree.heads_only {
//!     println!("tree opens filtered to department heads");
//! }
//! ```

mod error;
mod logging;
mod org_tree;
mod review;

pub use error::ConfigError;
pub use logging::LoggingConfig;
pub use org_tree::{DEFAULT_HEAD_KEYWORDS, OrgTreeConfig};
pub use review::ReviewConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct AerConfig {
    #[serde(default)]
    pub review: ReviewConfig,
    #[serde(default)]
    pub org_tree: OrgTreeConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AerConfig {
    /// Load configuration from all sources and validate it.
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            if !path.is_file() {
                return Err(ConfigError::InvalidValue {
                    field: "--config".to_string(),
                    reason: format!("{} is not a readable file", path.display()),
                });
            }
        }
        let config: Self = Self::figment(explicit).extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    pub fn load_with_dotenv(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load(explicit)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or layer providers on top.
    pub fn figment(explicit: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(".aer/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        if let Some(path) = explicit {
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed("AER_").split("__"))
    }

    /// Check values figment cannot express as types.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.org_tree.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("aer").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_loads() {
        let config = AerConfig::default();
        assert!(!config.review.initially_selected);
        assert!(!config.org_tree.heads_only);
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn figment_builds_without_files() {
        figment::Jail::expect_with(|_jail| {
            let config: AerConfig = AerConfig::figment(None).extract()?;
            assert!(config.org_tree.expand_all);
            assert_eq!(config.org_tree.head_keywords.len(), 12);
            Ok(())
        });
    }
}
