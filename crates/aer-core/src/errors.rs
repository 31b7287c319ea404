//! Row validation errors.
//!
//! Raised when a loosely typed table row does not satisfy the field contract
//! of the entity it is loaded into. Structural errors that only make sense for
//! a particular component (e.g. org-tree cycles) live in `aer-ui`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    /// The row is not a JSON object.
    #[error("row {row}: expected an object with named columns")]
    NotAnObject { row: usize },

    /// A required field is absent, null, or blank.
    #[error("row {row}: missing required field '{field}' (accepted columns: {columns})")]
    MissingField {
        row: usize,
        field: &'static str,
        columns: String,
    },

    /// The status category is not one of the known categories.
    #[error("row {row}: unknown status category '{value}'")]
    UnknownCategory { row: usize, value: String },

    /// Two rows share an identifier.
    #[error("row {row}: duplicate identifier '{id}'")]
    DuplicateId { row: usize, id: String },
}

impl RowError {
    /// Zero-based index of the offending row.
    #[must_use]
    pub const fn row(&self) -> usize {
        match self {
            Self::NotAnObject { row }
            | Self::MissingField { row, .. }
            | Self::UnknownCategory { row, .. }
            | Self::DuplicateId { row, .. } => *row,
        }
    }
}
