//! Ticket rows (`tickets` table).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Priority, Table};

/// Ticket lifecycle status. Transitions are not enforced client-side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    #[default]
    Open,
    InProgress,
    Resolved,
    Closed,
    #[serde(other)]
    Unknown,
}

impl TicketStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TicketStatus::Open => "open",
            TicketStatus::InProgress => "in_progress",
            TicketStatus::Resolved => "resolved",
            TicketStatus::Closed => "closed",
            TicketStatus::Unknown => "unknown",
        }
    }
}

/// What a ticket is about.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum TicketCategory {
    #[default]
    General,
    Hardware,
    Software,
    Network,
    Access,
    Other,
    #[serde(other)]
    Unknown,
}

impl TicketCategory {
    pub const ALL: [TicketCategory; 6] = [
        TicketCategory::General,
        TicketCategory::Hardware,
        TicketCategory::Software,
        TicketCategory::Network,
        TicketCategory::Access,
        TicketCategory::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            TicketCategory::General => "general",
            TicketCategory::Hardware => "hardware",
            TicketCategory::Software => "software",
            TicketCategory::Network => "network",
            TicketCategory::Access => "access",
            TicketCategory::Other => "other",
            TicketCategory::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            TicketCategory::General => "General",
            TicketCategory::Hardware => "Hardware",
            TicketCategory::Software => "Software",
            TicketCategory::Network => "Network",
            TicketCategory::Access => "Access",
            TicketCategory::Other => "Other",
            TicketCategory::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .unwrap_or(TicketCategory::Unknown)
    }
}

/// A support ticket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ticket {
    pub id: Uuid,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub category: TicketCategory,
    #[serde(default)]
    pub created_by: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Ticket {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Table for Ticket {
    const NAME: &'static str = "tickets";
    type Draft = NewTicket;
}

/// Insert payload for a ticket. Status is left to the server default.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub category: TicketCategory,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_by: Option<Uuid>,
}

impl NewTicket {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: Priority::default(),
            category: TicketCategory::default(),
            created_by: None,
        }
    }
}

/// Projection used for dashboard stats (`select=status,priority`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct TicketSummary {
    #[serde(default)]
    pub status: TicketStatus,
    #[serde(default)]
    pub priority: Priority,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_from_server_json() {
        let json = serde_json::json!({
            "id": "0b7f3c4e-52a1-4c5e-9d1e-1f2a3b4c5d6e",
            "title": "Printer jammed",
            "description": null,
            "status": "in_progress",
            "priority": "urgent",
            "category": "hardware",
            "created_by": null,
            "created_at": "2025-03-14T09:26:53.589793+00:00",
            "updated_at": "2025-03-14T09:26:53.589793+00:00"
        });
        let ticket: Ticket = serde_json::from_value(json).unwrap();
        assert_eq!(ticket.title, "Printer jammed");
        assert_eq!(ticket.status, TicketStatus::InProgress);
        assert_eq!(ticket.priority, Priority::Urgent);
        assert_eq!(ticket.category, TicketCategory::Hardware);
        assert!(ticket.description.is_none());
    }

    #[test]
    fn test_draft_defaults_and_payload() {
        let draft = NewTicket::new("VPN down", "Cannot connect from home");
        assert_eq!(draft.priority, Priority::Medium);
        assert_eq!(draft.category, TicketCategory::General);

        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(
            payload,
            serde_json::json!({
                "title": "VPN down",
                "description": "Cannot connect from home",
                "priority": "medium",
                "category": "general"
            })
        );
    }

    #[test]
    fn test_category_lookup() {
        assert_eq!(TicketCategory::from_str("network"), TicketCategory::Network);
        assert_eq!(TicketCategory::from_str("billing"), TicketCategory::Unknown);
    }
}
