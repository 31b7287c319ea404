use std::path::PathBuf;

use aer_core::enums::StatusCategory;
use clap::{Args, Subcommand};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Review access exceptions grouped by status category.
    Review(ReviewArgs),
    /// Show the reporting hierarchy and pick department heads.
    OrgTree(OrgTreeArgs),
}

/// Arguments for `aer review`.
///
/// Actions run in a fixed order: select-all, select-group, select, deselect.
#[derive(Clone, Debug, Args)]
pub struct ReviewArgs {
    /// Review table (`.jsonl` rows or a `.json` array).
    pub file: PathBuf,
    /// Select every record.
    #[arg(long)]
    pub select_all: bool,
    /// Select every record in a status category (e.g. no-match, inactive).
    #[arg(long = "select-group", value_name = "CATEGORY", value_parser = parse_category)]
    pub select_groups: Vec<StatusCategory>,
    /// Select one record by identifier.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
    /// Deselect one record by identifier.
    #[arg(long = "deselect", value_name = "ID")]
    pub deselect: Vec<String>,
}

impl ReviewArgs {
    /// Number of individual operator actions requested.
    #[must_use]
    pub fn action_count(&self) -> usize {
        usize::from(self.select_all) + self.select_groups.len() + self.select.len() + self.deselect.len()
    }
}

/// Arguments for `aer org-tree`.
#[derive(Clone, Debug, Args)]
pub struct OrgTreeArgs {
    /// Org chart table (`.jsonl` rows or a `.json` array).
    pub file: PathBuf,
    /// Show department-head candidates only.
    #[arg(long)]
    pub heads_only: bool,
    /// Expand only the top levels of the tree.
    #[arg(long)]
    pub collapsed: bool,
    /// Accept more than one top-level manager.
    #[arg(long)]
    pub allow_forest: bool,
    /// Select one person by identifier.
    #[arg(long = "select", value_name = "ID")]
    pub select: Vec<String>,
    /// Select every visible department-head candidate.
    #[arg(long)]
    pub select_heads: bool,
}

fn parse_category(value: &str) -> Result<StatusCategory, String> {
    value.parse::<StatusCategory>().map_err(|err| err.to_string())
}
