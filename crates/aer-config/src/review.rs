//! Manual review panel settings.

use serde::{Deserialize, Serialize};

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ReviewConfig {
    /// Whether every record starts out selected when a panel is opened.
    #[serde(default)]
    pub initially_selected: bool,

    /// Whether suggested alternates are shown next to each record.
    #[serde(default = "default_true")]
    pub show_suggestions: bool,
}

impl Default for ReviewConfig {
    fn default() -> Self {
        Self {
            initially_selected: false,
            show_suggestions: default_true(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = ReviewConfig::default();
        assert!(!config.initially_selected);
        assert!(config.show_suggestions);
    }
}
