//! # aer-ui
//!
//! Presentation-layer components for access exception review.
//!
//! - [`StatusLogger`]: one overwriting status line plus a durable log sink
//! - [`ReviewSelectionPanel`]: records grouped by status category with
//!   operator selections
//! - [`OrgTreeView`]: manager/report hierarchy rendered as a text tree with a
//!   department-head filter
//!
//! Components own their state and never talk to each other. The host loads a
//! table, renders, applies operator actions, and reads the selection back.

pub mod error;
pub mod logger;
pub mod markup;
pub mod panel;
pub mod sink;
pub mod tree;
mod view;

pub use error::{TreeError, UiError};
pub use logger::{BufferSurface, StatusLogger, StatusSurface};
pub use markup::Markup;
pub use panel::{Group, PanelOptions, ReviewDecision, ReviewSelectionPanel};
pub use sink::{FanoutSink, JsonLinesSink, LogSink, MemorySink, TracingSink};
pub use tree::{ExpandMode, HeadKeywords, OrgTreeView, TreeOptions};
pub use view::render_load_error;
