//! Batch selection over records that need a manual decision.
//!
//! Records are grouped by status category in first-seen order. Selection is
//! tracked per record identifier and only changes through the operator
//! actions below; the host reads it back with [`ReviewSelectionPanel::get_selected`]
//! or [`ReviewSelectionPanel::submit`].

use std::collections::HashMap;
use std::fmt::Write as _;

use aer_config::ReviewConfig;
use aer_core::entities::Record;
use aer_core::enums::StatusCategory;
use aer_core::responses::{GroupSummary, ReviewSelectionResponse};
use aer_core::rows::records_from_rows;
use serde_json::Value;

use crate::error::UiError;
use crate::markup::sanitize_terminal;
use crate::view::{RULE, checkbox};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PanelOptions {
    pub initially_selected: bool,
    pub show_suggestions: bool,
}

impl Default for PanelOptions {
    fn default() -> Self {
        Self {
            initially_selected: false,
            show_suggestions: true,
        }
    }
}

impl From<&ReviewConfig> for PanelOptions {
    fn from(config: &ReviewConfig) -> Self {
        Self {
            initially_selected: config.initially_selected,
            show_suggestions: config.show_suggestions,
        }
    }
}

/// Records sharing a status category. Holds positions into the panel's records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Group {
    category: StatusCategory,
    members: Vec<usize>,
}

impl Group {
    #[must_use]
    pub const fn category(&self) -> StatusCategory {
        self.category
    }

    #[must_use]
    pub fn members(&self) -> &[usize] {
        &self.members
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Outcome of a review: selected records are approved, the rest skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDecision {
    pub approved: Vec<String>,
    pub skipped: Vec<String>,
}

#[derive(Debug, Clone)]
pub struct ReviewSelectionPanel {
    records: Vec<Record>,
    groups: Vec<Group>,
    index: HashMap<String, usize>,
    selected: Vec<bool>,
    options: PanelOptions,
}

impl ReviewSelectionPanel {
    pub fn new(records: Vec<Record>, options: PanelOptions) -> Result<Self, UiError> {
        let mut index = HashMap::with_capacity(records.len());
        let mut groups: Vec<Group> = Vec::new();

        for (position, record) in records.iter().enumerate() {
            if index.insert(record.id.clone(), position).is_some() {
                return Err(UiError::DuplicateRecord(record.id.clone()));
            }
            match groups
                .iter_mut()
                .find(|group| group.category == record.category)
            {
                Some(group) => group.members.push(position),
                None => groups.push(Group {
                    category: record.category,
                    members: vec![position],
                }),
            }
        }

        tracing::debug!(
            records = records.len(),
            groups = groups.len(),
            "review panel loaded"
        );

        let selected = vec![options.initially_selected; records.len()];
        Ok(Self {
            records,
            groups,
            index,
            selected,
            options,
        })
    }

    /// Load from loosely typed rows, applying the record field contract.
    pub fn from_rows(rows: &[Value], options: PanelOptions) -> Result<Self, UiError> {
        let records = records_from_rows(rows)?;
        Self::new(records, options)
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    #[must_use]
    pub fn group(&self, category: StatusCategory) -> Option<&Group> {
        self.groups.iter().find(|group| group.category == category)
    }

    /// Identifiers in a category, in input order.
    #[must_use]
    pub fn group_ids(&self, category: StatusCategory) -> Vec<&str> {
        self.group(category)
            .map(|group| {
                group
                    .members
                    .iter()
                    .map(|&position| self.records[position].id.as_str())
                    .collect()
            })
            .unwrap_or_default()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn select_all(&mut self) {
        self.selected.fill(true);
    }

    pub fn deselect_all(&mut self) {
        self.selected.fill(false);
    }

    /// Select every record in `category`, leaving other categories alone.
    /// Returns how many records the category holds; an absent category is a no-op.
    pub fn select_group(&mut self, category: StatusCategory) -> usize {
        let Some(group) = self.groups.iter().find(|group| group.category == category) else {
            tracing::debug!(%category, "select_group on a category with no records");
            return 0;
        };
        for &position in &group.members {
            self.selected[position] = true;
        }
        group.members.len()
    }

    /// Flip one record's selection and return the new state.
    pub fn toggle(&mut self, id: &str) -> Result<bool, UiError> {
        let position = self.position(id)?;
        self.selected[position] = !self.selected[position];
        Ok(self.selected[position])
    }

    pub fn set_selected(&mut self, id: &str, selected: bool) -> Result<(), UiError> {
        let position = self.position(id)?;
        self.selected[position] = selected;
        Ok(())
    }

    #[must_use]
    pub fn is_selected(&self, id: &str) -> Option<bool> {
        self.index.get(id).map(|&position| self.selected[position])
    }

    /// Selected identifiers in input order.
    #[must_use]
    pub fn get_selected(&self) -> Vec<&str> {
        self.records
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(record, _)| record.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|selected| **selected).count()
    }

    /// Live counter line, recomputed from the current selection.
    #[must_use]
    pub fn selection_summary(&self) -> String {
        format!("Selected: {} / {}", self.selected_count(), self.len())
    }

    /// Split records into approved (selected) and skipped, in input order.
    #[must_use]
    pub fn submit(&self) -> ReviewDecision {
        let mut decision = ReviewDecision::default();
        for (record, selected) in self.records.iter().zip(&self.selected) {
            if *selected {
                decision.approved.push(record.id.clone());
            } else {
                decision.skipped.push(record.id.clone());
            }
        }
        decision
    }

    #[must_use]
    pub fn to_response(&self) -> ReviewSelectionResponse {
        let decision = self.submit();
        let groups = self
            .groups
            .iter()
            .map(|group| GroupSummary {
                category: group.category,
                title: group.category.title().to_string(),
                count: count_u32(group.len()),
                selected: count_u32(
                    group
                        .members
                        .iter()
                        .filter(|&&position| self.selected[position])
                        .count(),
                ),
            })
            .collect();

        ReviewSelectionResponse {
            selected: decision.approved.clone(),
            approved: decision.approved,
            skipped: decision.skipped,
            selected_count: count_u32(self.selected_count()),
            total: count_u32(self.len()),
            groups,
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Manual Review Required\n");

        if self.is_empty() {
            out.push_str("Nothing to review: no records need a manual decision.");
            return out;
        }

        out.push_str("Quick actions: [select all] [deselect all]");
        for group in &self.groups {
            let _ = write!(out, " [{} ({})]", group.category.title(), group.len());
        }
        out.push('\n');
        out.push_str(RULE);
        out.push('\n');

        for group in &self.groups {
            let _ = writeln!(out, "{} ({})", group.category.title(), group.len());
            for &position in &group.members {
                let _ = writeln!(
                    out,
                    "  {} {}",
                    checkbox(self.selected[position]),
                    self.record_label(&self.records[position])
                );
            }
        }

        out.push_str(RULE);
        out.push('\n');
        out.push_str(&self.selection_summary());
        out
    }

    fn record_label(&self, record: &Record) -> String {
        let mut label = format!(
            "{} | {} | {}",
            sanitize_terminal(&record.name),
            sanitize_terminal(&record.department),
            record.category
        );
        if self.options.show_suggestions {
            if let Some(suggested) = &record.suggested {
                let _ = write!(label, " -> {}", sanitize_terminal(suggested));
            }
        }
        label
    }

    fn position(&self, id: &str) -> Result<usize, UiError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| UiError::UnknownRecord(id.to_string()))
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use serde_json::json;

    use super::*;

    fn record(id: &str, category: StatusCategory) -> Record {
        Record {
            id: id.into(),
            name: id.split('@').next().unwrap_or(id).to_uppercase(),
            department: "Finance".into(),
            category,
            suggested: None,
        }
    }

    fn example_panel() -> ReviewSelectionPanel {
        ReviewSelectionPanel::new(
            vec![
                record("a@x.com", StatusCategory::NoMatch),
                record("b@x.com", StatusCategory::Inactive),
                record("c@x.com", StatusCategory::NoMatch),
            ],
            PanelOptions::default(),
        )
        .unwrap()
    }

    #[test]
    fn groups_preserve_first_seen_order() {
        let panel = example_panel();
        let categories: Vec<_> = panel.groups().iter().map(Group::category).collect();
        assert_eq!(categories, vec![StatusCategory::NoMatch, StatusCategory::Inactive]);
        assert_eq!(panel.group_ids(StatusCategory::NoMatch), vec!["a@x.com", "c@x.com"]);
        assert_eq!(panel.group_ids(StatusCategory::Inactive), vec!["b@x.com"]);
    }

    #[test]
    fn select_group_then_get_selected() {
        let mut panel = example_panel();
        assert_eq!(panel.select_group(StatusCategory::NoMatch), 2);
        assert_eq!(panel.get_selected(), vec!["a@x.com", "c@x.com"]);
    }

    #[test]
    fn select_group_for_absent_category_is_noop() {
        let mut panel = example_panel();
        panel.set_selected("b@x.com", true).unwrap();
        assert_eq!(panel.select_group(StatusCategory::FuzzyMatch), 0);
        assert_eq!(panel.get_selected(), vec!["b@x.com"]);
    }

    #[test]
    fn toggle_flips_and_reports_state() {
        let mut panel = example_panel();
        assert_eq!(panel.toggle("b@x.com"), Ok(true));
        assert_eq!(panel.is_selected("b@x.com"), Some(true));
        assert_eq!(panel.toggle("b@x.com"), Ok(false));
        assert_eq!(panel.is_selected("zzz"), None);
    }

    #[test]
    fn unknown_record_is_an_error() {
        let mut panel = example_panel();
        assert_eq!(
            panel.toggle("nobody@x.com"),
            Err(UiError::UnknownRecord("nobody@x.com".into()))
        );
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let err = ReviewSelectionPanel::new(
            vec![
                record("a@x.com", StatusCategory::NoMatch),
                record("a@x.com", StatusCategory::Inactive),
            ],
            PanelOptions::default(),
        )
        .unwrap_err();
        assert_eq!(err, UiError::DuplicateRecord("a@x.com".into()));
    }

    #[test]
    fn initially_selected_option_preselects_everything() {
        let panel = ReviewSelectionPanel::new(
            vec![record("a@x.com", StatusCategory::NoMatch)],
            PanelOptions {
                initially_selected: true,
                ..PanelOptions::default()
            },
        )
        .unwrap();
        assert_eq!(panel.get_selected(), vec!["a@x.com"]);
    }

    #[test]
    fn submit_splits_approved_and_skipped() {
        let mut panel = example_panel();
        panel.set_selected("c@x.com", true).unwrap();
        let decision = panel.submit();
        assert_eq!(decision.approved, vec!["c@x.com"]);
        assert_eq!(decision.skipped, vec!["a@x.com", "b@x.com"]);
    }

    #[test]
    fn render_shows_groups_and_live_count() {
        let mut panel = example_panel();
        assert!(panel.render().ends_with("Selected: 0 / 3"));

        panel.toggle("a@x.com").unwrap();
        let view = panel.render();
        assert!(view.contains("No Record (2)"));
        assert!(view.contains("Inactive Users (1)"));
        assert!(view.contains("  [x] A | Finance | no-match"));
        assert!(view.contains("  [ ] C | Finance | no-match"));
        assert!(view.ends_with("Selected: 1 / 3"));
    }

    #[test]
    fn render_shows_suggestions_when_enabled() {
        let mut fuzzy = record("d@x.com", StatusCategory::FuzzyMatch);
        fuzzy.suggested = Some("dee@x.com".into());

        let shown = ReviewSelectionPanel::new(vec![fuzzy.clone()], PanelOptions::default()).unwrap();
        assert!(shown.render().contains("fuzzy-match -> dee@x.com"));

        let hidden = ReviewSelectionPanel::new(
            vec![fuzzy],
            PanelOptions {
                show_suggestions: false,
                ..PanelOptions::default()
            },
        )
        .unwrap();
        assert!(!hidden.render().contains("dee@x.com"));
    }

    #[test]
    fn render_empty_panel_has_explicit_state() {
        let panel = ReviewSelectionPanel::new(Vec::new(), PanelOptions::default()).unwrap();
        assert!(panel.groups().is_empty());
        assert!(panel.render().contains("Nothing to review"));
    }

    #[test]
    fn from_rows_surfaces_unknown_category() {
        let rows = vec![json!({
            "email": "a@x.com",
            "name": "A",
            "department": "D",
            "ad_status": "Active",
        })];
        let err = ReviewSelectionPanel::from_rows(&rows, PanelOptions::default()).unwrap_err();
        assert_eq!(err.to_string(), "row 0: unknown status category 'Active'");
    }

    #[test]
    fn response_reports_group_counts() {
        let mut panel = example_panel();
        panel.select_group(StatusCategory::Inactive);
        let response = panel.to_response();
        assert_eq!(response.selected, vec!["b@x.com"]);
        assert_eq!(response.skipped, vec!["a@x.com", "c@x.com"]);
        assert_eq!(response.total, 3);
        assert_eq!(response.groups[0].count, 2);
        assert_eq!(response.groups[0].selected, 0);
        assert_eq!(response.groups[1].selected, 1);
    }
}
