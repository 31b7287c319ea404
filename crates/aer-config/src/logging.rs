//! Logging settings.

use serde::{Deserialize, Serialize};

fn default_level() -> String {
    "warn".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    /// Default `tracing` filter when neither `AER_LOG` nor `--quiet`/`--verbose` apply.
    #[serde(default = "default_level")]
    pub level: String,

    /// JSON Lines file that receives every status event. Empty disables it.
    #[serde(default)]
    pub file: String,
}

impl LoggingConfig {
    /// Whether a durable event log file is configured.
    #[must_use]
    pub fn has_file(&self) -> bool {
        !self.file.trim().is_empty()
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_level(),
            file: String::new(),
        }
    }
}
