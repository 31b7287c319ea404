//! Row contracts for loosely typed review tables.
//!
//! Host tables arrive as JSON objects with arbitrary column names. Each entity
//! declares the fields it needs and the column spellings it accepts; a row is
//! either converted completely or rejected with a [`RowError`].

use std::collections::HashSet;

use serde_json::{Map, Value};

use crate::entities::{OrgNode, Record};
use crate::enums::StatusCategory;
use crate::errors::RowError;

/// A logical field and the column names that may carry it, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub columns: &'static [&'static str],
}

impl Field {
    /// First non-blank value among the accepted columns.
    #[must_use]
    pub fn lookup(&self, map: &Map<String, Value>) -> Option<String> {
        self.columns
            .iter()
            .filter_map(|column| map.get(*column))
            .find_map(cell_text)
    }

    fn require(&self, row: usize, map: &Map<String, Value>) -> Result<String, RowError> {
        self.lookup(map).ok_or_else(|| RowError::MissingField {
            row,
            field: self.name,
            columns: self.columns.join(", "),
        })
    }
}

pub mod record_fields {
    use super::Field;

    pub const ID: Field = Field {
        name: "identifier",
        columns: &["id", "email", "mail"],
    };
    pub const NAME: Field = Field {
        name: "name",
        columns: &["name", "display_name", "displayName", "User Name"],
    };
    pub const DEPARTMENT: Field = Field {
        name: "department",
        columns: &["department"],
    };
    pub const CATEGORY: Field = Field {
        name: "category",
        columns: &["category", "status", "ad_status"],
    };
    pub const SUGGESTED: Field = Field {
        name: "suggested",
        columns: &["suggested", "suggested_email", "fuzzy_match"],
    };
}

pub mod org_fields {
    use super::Field;

    pub const ID: Field = Field {
        name: "identifier",
        columns: &["id", "mail", "email"],
    };
    pub const NAME: Field = Field {
        name: "name",
        columns: &["name", "display_name", "displayName"],
    };
    pub const TITLE: Field = Field {
        name: "title",
        columns: &["title", "job_title", "jobTitle"],
    };
    pub const DEPARTMENT: Field = Field {
        name: "department",
        columns: &["department"],
    };
    pub const PARENT: Field = Field {
        name: "parent",
        columns: &["parent_id", "manager", "manager_mail"],
    };
}

/// Convert one row into a [`Record`].
pub fn record_from_row(row: usize, value: &Value) -> Result<Record, RowError> {
    use record_fields::{CATEGORY, DEPARTMENT, ID, NAME, SUGGESTED};

    let map = value.as_object().ok_or(RowError::NotAnObject { row })?;
    let id = ID.require(row, map)?;
    let name = NAME.require(row, map)?;
    let department = DEPARTMENT.require(row, map)?;
    let raw_category = CATEGORY.require(row, map)?;
    let category = raw_category
        .parse::<StatusCategory>()
        .map_err(|err| RowError::UnknownCategory { row, value: err.0 })?;

    Ok(Record {
        id,
        name,
        department,
        category,
        suggested: SUGGESTED.lookup(map),
    })
}

/// Convert a table into records, rejecting duplicate identifiers.
pub fn records_from_rows(rows: &[Value]) -> Result<Vec<Record>, RowError> {
    let records = rows
        .iter()
        .enumerate()
        .map(|(row, value)| record_from_row(row, value))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique(records.iter().map(|record| record.id.as_str()))?;
    Ok(records)
}

/// Convert one row into an [`OrgNode`].
pub fn org_node_from_row(row: usize, value: &Value) -> Result<OrgNode, RowError> {
    use org_fields::{DEPARTMENT, ID, NAME, PARENT, TITLE};

    let map = value.as_object().ok_or(RowError::NotAnObject { row })?;
    Ok(OrgNode {
        id: ID.require(row, map)?,
        name: NAME.require(row, map)?,
        title: TITLE.lookup(map),
        department: DEPARTMENT.lookup(map),
        parent_id: PARENT.lookup(map),
    })
}

/// Convert a table into org nodes, rejecting duplicate identifiers.
pub fn org_nodes_from_rows(rows: &[Value]) -> Result<Vec<OrgNode>, RowError> {
    let nodes = rows
        .iter()
        .enumerate()
        .map(|(row, value)| org_node_from_row(row, value))
        .collect::<Result<Vec<_>, _>>()?;
    ensure_unique(nodes.iter().map(|node| node.id.as_str()))?;
    Ok(nodes)
}

fn ensure_unique<'a>(ids: impl Iterator<Item = &'a str>) -> Result<(), RowError> {
    let mut seen = HashSet::new();
    for (row, id) in ids.enumerate() {
        if !seen.insert(id) {
            return Err(RowError::DuplicateId {
                row,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

fn cell_text(value: &Value) -> Option<String> {
    let text = match value {
        Value::Null => return None,
        Value::String(text) => text.trim().to_string(),
        Value::Number(number) => number.to_string(),
        Value::Bool(flag) => flag.to_string(),
        Value::Array(_) | Value::Object(_) => return None,
    };
    (!text.is_empty()).then_some(text)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    #[test]
    fn record_row_with_canonical_columns() {
        let row = json!({
            "id": "a@x.com",
            "name": "Ada",
            "department": "Finance",
            "category": "no-match",
        });

        let record = record_from_row(0, &row).unwrap();
        assert_eq!(
            record,
            Record {
                id: "a@x.com".into(),
                name: "Ada".into(),
                department: "Finance".into(),
                category: StatusCategory::NoMatch,
                suggested: None,
            }
        );
    }

    #[test]
    fn record_row_with_legacy_columns() {
        let row = json!({
            "email": " b@x.com ",
            "User Name": "Bo",
            "department": "IT",
            "ad_status": "Inactive",
            "fuzzy_match": "bo@x.com",
        });

        let record = record_from_row(3, &row).unwrap();
        assert_eq!(record.id, "b@x.com");
        assert_eq!(record.name, "Bo");
        assert_eq!(record.category, StatusCategory::Inactive);
        assert_eq!(record.suggested.as_deref(), Some("bo@x.com"));
    }

    #[test]
    fn blank_and_null_values_count_as_missing() {
        let row = json!({
            "id": "   ",
            "email": null,
            "name": "Ada",
            "department": "Finance",
            "category": "inactive",
        });

        let err = record_from_row(7, &row).unwrap_err();
        assert_eq!(
            err,
            RowError::MissingField {
                row: 7,
                field: "identifier",
                columns: "id, email, mail".into(),
            }
        );
        assert_eq!(err.row(), 7);
    }

    #[test]
    fn missing_category_is_rejected() {
        let row = json!({ "id": "a@x.com", "name": "Ada", "department": "Finance" });
        let err = record_from_row(0, &row).unwrap_err();
        assert!(matches!(err, RowError::MissingField { field: "category", .. }));
    }

    #[test]
    fn unknown_category_is_rejected() {
        let row = json!({
            "id": "a@x.com",
            "name": "Ada",
            "department": "Finance",
            "category": "Active",
        });
        let err = record_from_row(2, &row).unwrap_err();
        assert_eq!(
            err,
            RowError::UnknownCategory {
                row: 2,
                value: "Active".into(),
            }
        );
    }

    #[test]
    fn non_object_row_is_rejected() {
        let err = record_from_row(1, &json!(["a@x.com"])).unwrap_err();
        assert_eq!(err, RowError::NotAnObject { row: 1 });
    }

    #[test]
    fn duplicate_record_ids_are_rejected() {
        let rows = vec![
            json!({"id": "a@x.com", "name": "A", "department": "D", "category": "inactive"}),
            json!({"id": "a@x.com", "name": "A2", "department": "D", "category": "no-match"}),
        ];
        let err = records_from_rows(&rows).unwrap_err();
        assert_eq!(
            err,
            RowError::DuplicateId {
                row: 1,
                id: "a@x.com".into(),
            }
        );
    }

    #[test]
    fn org_row_allows_missing_optional_columns() {
        let row = json!({
            "mail": "ceo@x.com",
            "displayName": "Chief",
            "jobTitle": "CEO",
            "manager_mail": null,
        });

        let node = org_node_from_row(0, &row).unwrap();
        assert_eq!(
            node,
            OrgNode {
                id: "ceo@x.com".into(),
                name: "Chief".into(),
                title: Some("CEO".into()),
                department: None,
                parent_id: None,
            }
        );
    }

    #[test]
    fn org_row_requires_name() {
        let row = json!({ "mail": "x@x.com", "manager_mail": "ceo@x.com" });
        let err = org_node_from_row(4, &row).unwrap_err();
        assert!(matches!(err, RowError::MissingField { row: 4, field: "name", .. }));
    }

    #[test]
    fn numeric_cells_are_coerced_to_text() {
        let row = json!({ "id": 1001, "name": "Numbered", "parent_id": 1000 });
        let node = org_node_from_row(0, &row).unwrap();
        assert_eq!(node.id, "1001");
        assert_eq!(node.parent_id.as_deref(), Some("1000"));
    }
}
