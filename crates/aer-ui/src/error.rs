//! Error types for the review components.

use aer_core::errors::RowError;
use thiserror::Error;

/// Structural problems in an org-chart input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TreeError {
    /// Every node's manager resolves inside the set, so nothing can be a root.
    #[error("no root found: all {nodes} people report to someone in the input")]
    NoRoot { nodes: usize },

    /// These nodes are their own transitive manager.
    #[error("reporting cycle detected among: {}", members.join(", "))]
    Cycle { members: Vec<String> },

    /// More than one top-level manager while forests are not allowed.
    #[error("input forms {} disconnected trees rooted at: {}", roots.len(), roots.join(", "))]
    Disconnected { roots: Vec<String> },

    /// Two nodes share an identifier.
    #[error("duplicate person '{id}'")]
    DuplicateNode { id: String },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UiError {
    /// A row failed its field contract.
    #[error(transparent)]
    Row(#[from] RowError),

    /// The org-chart input is structurally invalid.
    #[error(transparent)]
    Tree(#[from] TreeError),

    /// Two records share an identifier.
    #[error("duplicate record '{0}'")]
    DuplicateRecord(String),

    /// An operator action referenced a record that is not loaded.
    #[error("unknown record '{0}'")]
    UnknownRecord(String),

    /// An operator action referenced a person that is not loaded.
    #[error("unknown person '{0}'")]
    UnknownNode(String),
}
