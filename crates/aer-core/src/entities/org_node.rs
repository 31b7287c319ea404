use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// One person in a reporting hierarchy.
///
/// `parent_id` is a back-reference to the manager's `id`; it does not own
/// anything and may point outside the loaded set.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct OrgNode {
    pub id: String,
    pub name: String,
    pub title: Option<String>,
    pub department: Option<String>,
    pub parent_id: Option<String>,
}
