//! CLI response types returned as JSON by `aer` commands.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::{StatusCategory, TreeFilter};

/// Per-group counts reported alongside a review selection.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct GroupSummary {
    pub category: StatusCategory,
    pub title: String,
    pub count: u32,
    pub selected: u32,
}

/// Response from `aer review`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct ReviewSelectionResponse {
    pub selected: Vec<String>,
    pub approved: Vec<String>,
    pub skipped: Vec<String>,
    pub selected_count: u32,
    pub total: u32,
    pub groups: Vec<GroupSummary>,
}

/// Response from `aer org-tree`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrgSelectionResponse {
    pub filter: TreeFilter,
    pub selected_heads: Vec<String>,
    pub visible: Vec<String>,
    pub head_candidates: u32,
    pub total: u32,
}

/// Emitted in place of a component response when its input fails to load.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct LoadErrorResponse {
    pub component: String,
    pub error: String,
}
