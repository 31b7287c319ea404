//! Entity structs for AER domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema` so they can
//! appear in CLI responses and in the durable event log.

mod org_node;
mod record;
mod status_event;

pub use org_node::OrgNode;
pub use record::Record;
pub use status_event::StatusEvent;
