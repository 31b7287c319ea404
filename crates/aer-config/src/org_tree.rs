//! Org-tree view settings.

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Title keywords that mark a person as a likely department head.
pub const DEFAULT_HEAD_KEYWORDS: [&str; 12] = [
    "director",
    "manager",
    "head",
    "chief",
    "ceo",
    "cfo",
    "cto",
    "cmo",
    "vp",
    "vice president",
    "lead",
    "supervisor",
];

fn default_head_keywords() -> Vec<String> {
    DEFAULT_HEAD_KEYWORDS.iter().map(ToString::to_string).collect()
}

const fn default_true() -> bool {
    true
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct OrgTreeConfig {
    /// Case-insensitive substrings matched against name and title.
    #[serde(default = "default_head_keywords")]
    pub head_keywords: Vec<String>,

    /// Open the tree filtered to head candidates.
    #[serde(default)]
    pub heads_only: bool,

    /// Render every level; when false only the top levels are expanded.
    #[serde(default = "default_true")]
    pub expand_all: bool,

    /// Accept inputs with more than one root instead of reporting them.
    #[serde(default)]
    pub allow_forest: bool,
}

impl OrgTreeConfig {
    /// Reject keyword lists that would match every node.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(position) = self
            .head_keywords
            .iter()
            .position(|keyword| keyword.trim().is_empty())
        {
            return Err(ConfigError::InvalidValue {
                field: format!("org_tree.head_keywords[{position}]"),
                reason: "keywords must not be blank".to_string(),
            });
        }
        Ok(())
    }
}

impl Default for OrgTreeConfig {
    fn default() -> Self {
        Self {
            head_keywords: default_head_keywords(),
            heads_only: false,
            expand_all: default_true(),
            allow_forest: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_correct() {
        let config = OrgTreeConfig::default();
        assert_eq!(config.head_keywords.len(), 12);
        assert!(config.head_keywords.iter().any(|k| k == "vice president"));
        assert!(!config.heads_only);
        assert!(config.expand_all);
        assert!(!config.allow_forest);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn blank_keyword_is_invalid() {
        let config = OrgTreeConfig {
            head_keywords: vec!["director".into(), "  ".into()],
            ..OrgTreeConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.to_string().contains("org_tree.head_keywords[1]"));
    }

    #[test]
    fn empty_keyword_list_is_valid() {
        let config = OrgTreeConfig {
            head_keywords: Vec::new(),
            ..OrgTreeConfig::default()
        };
        assert!(config.validate().is_ok());
    }
}
