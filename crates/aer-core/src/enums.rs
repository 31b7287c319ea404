//! Status categories, severities, event kinds and tree filters.
//!
//! Enums serialize as kebab-case, lowercase or snake_case strings. `StatusCategory`
//! additionally parses the legacy spellings found in exported review tables.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// StatusCategory
// ---------------------------------------------------------------------------

/// Why a record needs a human decision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "kebab-case")]
pub enum StatusCategory {
    /// No directory account was found for the user.
    NoMatch,
    /// The directory account exists but is disabled.
    Inactive,
    /// Exactly one account matched by name.
    FuzzyMatch,
    /// Several accounts matched by name; the operator must pick one.
    FuzzyMultiple,
    /// The email resolved but the display name differs.
    NameMismatch,
    /// The email is well formed but unknown to the directory.
    EmailInvalid,
    /// Neither email nor name was usable.
    MissingData,
}

impl StatusCategory {
    pub const ALL: [Self; 7] = [
        Self::NoMatch,
        Self::Inactive,
        Self::FuzzyMatch,
        Self::FuzzyMultiple,
        Self::NameMismatch,
        Self::EmailInvalid,
        Self::MissingData,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::NoMatch => "no-match",
            Self::Inactive => "inactive",
            Self::FuzzyMatch => "fuzzy-match",
            Self::FuzzyMultiple => "fuzzy-multiple",
            Self::NameMismatch => "name-mismatch",
            Self::EmailInvalid => "email-invalid",
            Self::MissingData => "missing-data",
        }
    }

    /// Section heading used when the category is rendered as a group.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::NoMatch => "No Record",
            Self::Inactive => "Inactive Users",
            Self::FuzzyMatch => "Fuzzy Match",
            Self::FuzzyMultiple => "Multiple Matches",
            Self::NameMismatch => "Name Mismatch",
            Self::EmailInvalid => "Email Not In Directory",
            Self::MissingData => "Insufficient Data",
        }
    }
}

impl fmt::Display for StatusCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a category string matches none of the known spellings.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status category '{0}'")]
pub struct UnknownCategory(pub String);

impl FromStr for StatusCategory {
    type Err = UnknownCategory;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value
            .trim()
            .to_ascii_lowercase()
            .replace(['_', ' '], "-");

        let category = match normalized.as_str() {
            "no-match" | "no-record" | "not-found" | "err-not-found" => Self::NoMatch,
            "inactive" | "disabled" => Self::Inactive,
            "fuzzy-match" | "fuzzy" | "info-fuzzy-unique" => Self::FuzzyMatch,
            "fuzzy-multiple" | "err-fuzzy-multiple" => Self::FuzzyMultiple,
            "name-mismatch" | "warn-name-mismatch" => Self::NameMismatch,
            "email-invalid" | "err-email-invalid" => Self::EmailInvalid,
            "missing-data" | "err-missing-data" => Self::MissingData,
            _ => return Err(UnknownCategory(value.to_string())),
        };
        Ok(category)
    }
}

// ---------------------------------------------------------------------------
// Severity
// ---------------------------------------------------------------------------

/// Severity of a status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Error => "error",
        }
    }

    /// CSS colour name used by HTML status surfaces.
    #[must_use]
    pub const fn css_color(self) -> &'static str {
        match self {
            Self::Info => "blue",
            Self::Success => "green",
            Self::Warning => "orange",
            Self::Error => "red",
        }
    }

    /// SGR colour code used by terminal status surfaces.
    #[must_use]
    pub const fn ansi_code(self) -> &'static str {
        match self {
            Self::Info => "34",
            Self::Success => "32",
            Self::Warning => "33",
            Self::Error => "31",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// EventKind
// ---------------------------------------------------------------------------

/// Which logger operation produced a status event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Status,
    Progress,
    Detail,
}

impl EventKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Status => "status",
            Self::Progress => "progress",
            Self::Detail => "detail",
        }
    }
}

impl fmt::Display for EventKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TreeFilter
// ---------------------------------------------------------------------------

/// Which org-tree nodes are visible.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum TreeFilter {
    #[default]
    All,
    HeadsOnly,
}

impl TreeFilter {
    /// The other filter state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::All => Self::HeadsOnly,
            Self::HeadsOnly => Self::All,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::HeadsOnly => "heads_only",
        }
    }
}

impl fmt::Display for TreeFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
