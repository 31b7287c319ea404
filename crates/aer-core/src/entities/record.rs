use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::StatusCategory;

/// One access-review exception requiring a human decision.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Record {
    /// Stable identifier, usually the user's email.
    pub id: String,
    pub name: String,
    pub department: String,
    pub category: StatusCategory,
    /// Suggested replacement value, e.g. the email of a fuzzy match.
    pub suggested: Option<String>,
}
