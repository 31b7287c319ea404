//! Manager/report hierarchy rendered as a selectable text tree.
//!
//! The flat node list is never mutated. Construction builds an identifier
//! index and a parent -> children adjacency list, then rejects inputs that do
//! not form a tree (see [`TreeError`]).
//!
//! ```text
//! [ ] * Avery - CEO (Exec)
//! |-- [x] * Blake - CFO (Finance)
//! |   `-- [ ] Casey - Analyst (Finance)
//! `-- [ ] Drew - Engineer (IT)
//! ```

use std::collections::HashMap;
use std::fmt::Write as _;

use aer_config::{DEFAULT_HEAD_KEYWORDS, OrgTreeConfig};
use aer_core::entities::OrgNode;
use aer_core::enums::TreeFilter;
use aer_core::responses::OrgSelectionResponse;
use aer_core::rows::org_nodes_from_rows;
use serde_json::Value;

use crate::error::{TreeError, UiError};
use crate::markup::sanitize_terminal;
use crate::view::{RULE, checkbox};

const BRANCH: &str = "|-- ";
const LAST_BRANCH: &str = "`-- ";
const PIPE: &str = "|   ";
const BLANK: &str = "    ";

/// Rendered depth below which children stay visible in [`ExpandMode::Collapsed`].
pub const COLLAPSED_DEPTH: usize = 2;

/// Case-insensitive keywords that flag a head candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeadKeywords(Vec<String>);

impl HeadKeywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self(
            keywords
                .into_iter()
                .map(|keyword| keyword.as_ref().trim().to_lowercase())
                .filter(|keyword| !keyword.is_empty())
                .collect(),
        )
    }

    /// Substring match against the display name or title.
    #[must_use]
    pub fn matches(&self, node: &OrgNode) -> bool {
        let name = node.name.to_lowercase();
        let title = node.title.as_deref().map(str::to_lowercase);
        self.0.iter().any(|keyword| {
            name.contains(keyword.as_str())
                || title.as_deref().is_some_and(|title| title.contains(keyword.as_str()))
        })
    }
}

impl Default for HeadKeywords {
    fn default() -> Self {
        Self::new(DEFAULT_HEAD_KEYWORDS)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ExpandMode {
    #[default]
    All,
    Collapsed,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TreeOptions {
    pub keywords: HeadKeywords,
    pub filter: TreeFilter,
    pub expand: ExpandMode,
    pub allow_forest: bool,
}

impl From<&OrgTreeConfig> for TreeOptions {
    fn from(config: &OrgTreeConfig) -> Self {
        Self {
            keywords: HeadKeywords::new(&config.head_keywords),
            filter: if config.heads_only {
                TreeFilter::HeadsOnly
            } else {
                TreeFilter::All
            },
            expand: if config.expand_all {
                ExpandMode::All
            } else {
                ExpandMode::Collapsed
            },
            allow_forest: config.allow_forest,
        }
    }
}

/// One rendered row. The connector prefix is derived from the chain of
/// parent lines when the tree is drawn.
struct Line {
    node: usize,
    parent: Option<usize>,
    last: bool,
}

struct Frame {
    node: usize,
    parent: Option<usize>,
    depth: usize,
    last: bool,
}

#[derive(Debug, Clone)]
pub struct OrgTreeView {
    nodes: Vec<OrgNode>,
    index: HashMap<String, usize>,
    children: Vec<Vec<usize>>,
    roots: Vec<usize>,
    heads: Vec<bool>,
    selected: Vec<bool>,
    filter: TreeFilter,
    expand: ExpandMode,
}

impl OrgTreeView {
    pub fn new(nodes: Vec<OrgNode>, options: &TreeOptions) -> Result<Self, TreeError> {
        let mut index = HashMap::with_capacity(nodes.len());
        for (position, node) in nodes.iter().enumerate() {
            if index.insert(node.id.clone(), position).is_some() {
                return Err(TreeError::DuplicateNode {
                    id: node.id.clone(),
                });
            }
        }

        let mut children = vec![Vec::new(); nodes.len()];
        let mut roots = Vec::new();
        for (position, node) in nodes.iter().enumerate() {
            match node.parent_id.as_deref().and_then(|parent| index.get(parent)) {
                Some(&parent) if parent != position => children[parent].push(position),
                // Self-managed nodes are neither roots nor children; the
                // reachability pass reports them as a cycle.
                Some(_) => {}
                None => roots.push(position),
            }
        }

        if !nodes.is_empty() && roots.is_empty() {
            return Err(TreeError::NoRoot { nodes: nodes.len() });
        }

        let mut reached = vec![false; nodes.len()];
        let mut stack = roots.clone();
        while let Some(position) = stack.pop() {
            reached[position] = true;
            stack.extend(&children[position]);
        }
        let unreached: Vec<String> = nodes
            .iter()
            .zip(&reached)
            .filter(|(_, reached)| !**reached)
            .map(|(node, _)| node.id.clone())
            .collect();
        if !unreached.is_empty() {
            return Err(TreeError::Cycle { members: unreached });
        }

        if roots.len() > 1 && !options.allow_forest {
            return Err(TreeError::Disconnected {
                roots: roots.iter().map(|&root| nodes[root].id.clone()).collect(),
            });
        }

        let heads: Vec<bool> = nodes
            .iter()
            .map(|node| options.keywords.matches(node))
            .collect();

        tracing::debug!(
            nodes = nodes.len(),
            roots = roots.len(),
            head_candidates = heads.iter().filter(|head| **head).count(),
            "org tree built"
        );

        let selected = vec![false; nodes.len()];
        Ok(Self {
            nodes,
            index,
            children,
            roots,
            heads,
            selected,
            filter: options.filter,
            expand: options.expand,
        })
    }

    /// Load from loosely typed rows, applying the org node field contract.
    pub fn from_rows(rows: &[Value], options: &TreeOptions) -> Result<Self, UiError> {
        let nodes = org_nodes_from_rows(rows)?;
        Ok(Self::new(nodes, options)?)
    }

    #[must_use]
    pub fn nodes(&self) -> &[OrgNode] {
        &self.nodes
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    #[must_use]
    pub fn roots(&self) -> Vec<&str> {
        self.roots
            .iter()
            .map(|&root| self.nodes[root].id.as_str())
            .collect()
    }

    /// Direct reports of `id`, in input order.
    pub fn children_of(&self, id: &str) -> Result<Vec<&str>, UiError> {
        let position = self.position(id)?;
        Ok(self.children[position]
            .iter()
            .map(|&child| self.nodes[child].id.as_str())
            .collect())
    }

    #[must_use]
    pub fn is_head_candidate(&self, id: &str) -> Option<bool> {
        self.index.get(id).map(|&position| self.heads[position])
    }

    #[must_use]
    pub fn head_candidates(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .zip(&self.heads)
            .filter(|(_, head)| **head)
            .map(|(node, _)| node.id.as_str())
            .collect()
    }

    #[must_use]
    pub const fn filter(&self) -> TreeFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: TreeFilter) {
        self.filter = filter;
    }

    /// Switch between all nodes and head candidates only. Selection is kept.
    pub fn toggle_filter(&mut self) -> TreeFilter {
        self.filter = self.filter.toggled();
        self.filter
    }

    #[must_use]
    pub const fn expand_mode(&self) -> ExpandMode {
        self.expand
    }

    pub fn set_expand_mode(&mut self, expand: ExpandMode) {
        self.expand = expand;
    }

    /// Flip one node's selection and return the new state.
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

    /// Select every head candidate currently on screen. Returns how many were selected.
    pub fn select_visible_heads(&mut self) -> usize {
        let visible: Vec<usize> = self.layout().into_iter().map(|line| line.node).collect();
        let mut count = 0;
        for position in visible {
            if self.heads[position] {
                self.selected[position] = true;
                count += 1;
            }
        }
        count
    }

    /// Selected identifiers in input order, regardless of the filter.
    #[must_use]
    pub fn get_selected_heads(&self) -> Vec<&str> {
        self.nodes
            .iter()
            .zip(&self.selected)
            .filter(|(_, selected)| **selected)
            .map(|(node, _)| node.id.as_str())
            .collect()
    }

    #[must_use]
    pub fn selected_count(&self) -> usize {
        self.selected.iter().filter(|selected| **selected).count()
    }

    /// Identifiers in render order under the current filter and expand mode.
    #[must_use]
    pub fn visible_nodes(&self) -> Vec<&str> {
        self.layout()
            .into_iter()
            .map(|line| self.nodes[line.node].id.as_str())
            .collect()
    }

    #[must_use]
    pub fn to_response(&self) -> OrgSelectionResponse {
        OrgSelectionResponse {
            filter: self.filter,
            selected_heads: self
                .get_selected_heads()
                .into_iter()
                .map(str::to_string)
                .collect(),
            visible: self
                .visible_nodes()
                .into_iter()
                .map(str::to_string)
                .collect(),
            head_candidates: count_u32(self.heads.iter().filter(|head| **head).count()),
            total: count_u32(self.len()),
        }
    }

    #[must_use]
    pub fn render(&self) -> String {
        let lines = self.layout();
        let mut out = format!(
            "Organization Tree (filter: {}, showing {} of {})\n",
            self.filter,
            lines.len(),
            self.len()
        );

        if self.is_empty() {
            out.push_str("No people to display.");
            return out;
        }

        if lines.is_empty() {
            out.push_str("No department-head candidates match the configured keywords.\n");
        }

        // Continuation text shared by the open ancestors of the current line,
        // as (line, indent length for its children).
        let mut indent = String::new();
        let mut open: Vec<(usize, usize)> = Vec::new();
        for (position, line) in lines.iter().enumerate() {
            let branch = match line.parent {
                None => {
                    indent.clear();
                    open.clear();
                    ""
                }
                Some(parent) => {
                    while open.last().is_some_and(|&(ancestor, _)| ancestor != parent) {
                        open.pop();
                    }
                    indent.truncate(open.last().map_or(0, |&(_, len)| len));
                    if line.last { LAST_BRANCH } else { BRANCH }
                }
            };
            let _ = writeln!(
                out,
                "{indent}{branch}{} {}",
                checkbox(self.selected[line.node]),
                self.node_label(line.node)
            );
            if line.parent.is_some() {
                indent.push_str(if line.last { BLANK } else { PIPE });
            }
            open.push((position, indent.len()));
        }

        out.push_str(RULE);
        out.push('\n');
        let _ = write!(out, "Selected: {} department heads", self.selected_count());
        out
    }

    fn node_label(&self, position: usize) -> String {
        let node = &self.nodes[position];
        let mut label = String::new();
        if self.heads[position] {
            label.push_str("* ");
        }
        label.push_str(&sanitize_terminal(&node.name));
        if let Some(title) = &node.title {
            let _ = write!(label, " - {}", sanitize_terminal(title));
        }
        if let Some(department) = &node.department {
            let _ = write!(label, " ({})", sanitize_terminal(department));
        }
        label
    }

    fn is_visible(&self, position: usize) -> bool {
        match self.filter {
            TreeFilter::All => true,
            TreeFilter::HeadsOnly => self.heads[position],
        }
    }

    /// Visible nodes among `candidates` in pre-order; a hidden node is
    /// replaced by its visible descendants.
    fn visible_among(&self, candidates: &[usize]) -> Vec<usize> {
        let mut visible = Vec::new();
        let mut stack: Vec<usize> = candidates.iter().rev().copied().collect();
        while let Some(position) = stack.pop() {
            if self.is_visible(position) {
                visible.push(position);
            } else {
                stack.extend(self.children[position].iter().rev());
            }
        }
        visible
    }

    fn layout(&self) -> Vec<Line> {
        let mut lines = Vec::new();
        let mut stack: Vec<Frame> = self
            .visible_among(&self.roots)
            .into_iter()
            .rev()
            .map(|node| Frame {
                node,
                parent: None,
                depth: 0,
                last: true,
            })
            .collect();

        while let Some(frame) = stack.pop() {
            let line = lines.len();
            lines.push(Line {
                node: frame.node,
                parent: frame.parent,
                last: frame.last,
            });

            if self.expand == ExpandMode::Collapsed && frame.depth >= COLLAPSED_DEPTH {
                continue;
            }
            let children = self.visible_among(&self.children[frame.node]);
            let count = children.len();
            stack.extend(children.into_iter().enumerate().rev().map(|(index, node)| Frame {
                node,
                parent: Some(line),
                depth: frame.depth + 1,
                last: index + 1 == count,
            }));
        }
        lines
    }

    fn position(&self, id: &str) -> Result<usize, UiError> {
        self.index
            .get(id)
            .copied()
            .ok_or_else(|| UiError::UnknownNode(id.to_string()))
    }
}

fn count_u32(count: usize) -> u32 {
    u32::try_from(count).unwrap_or(u32::MAX)
}
