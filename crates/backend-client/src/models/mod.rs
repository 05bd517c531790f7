//! Record shapes
//!
//! Rows as the backend returns them, plus the drafts the dashboard inserts.
//! Identifiers and `created_at` are always assigned by the server.

mod device;
mod priority;
mod project;
mod ticket;

use serde::de::DeserializeOwned;
use serde::Serialize;

pub use device::{Device, DeviceStatus, DeviceSummary, NewDevice};
pub use priority::Priority;
pub use project::{NewProject, Project, ProjectStatus, ProjectSummary};
pub use ticket::{NewTicket, Ticket, TicketCategory, TicketStatus, TicketSummary};

/// Core trait for all persisted rows.
pub trait Entity: Sized + Send + Sync + Clone {
    /// The type of the row's unique identifier
    type Id: Copy + Eq + std::hash::Hash + Send + Sync;

    /// Returns the row's unique identifier
    fn id(&self) -> Self::Id;
}

/// A row type backed by one remote table.
pub trait Table: Entity + DeserializeOwned + 'static {
    /// Remote table name, e.g. `tickets`.
    const NAME: &'static str;

    /// Insert payload for this table.
    type Draft: Serialize + Send + Sync;
}
