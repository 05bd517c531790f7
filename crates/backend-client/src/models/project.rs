//! Project rows (`projects` table).

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::{Entity, Priority, Table};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ProjectStatus {
    #[default]
    Planning,
    InProgress,
    OnHold,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

impl ProjectStatus {
    pub const ALL: [ProjectStatus; 5] = [
        ProjectStatus::Planning,
        ProjectStatus::InProgress,
        ProjectStatus::OnHold,
        ProjectStatus::Completed,
        ProjectStatus::Cancelled,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "planning",
            ProjectStatus::InProgress => "in_progress",
            ProjectStatus::OnHold => "on_hold",
            ProjectStatus::Completed => "completed",
            ProjectStatus::Cancelled => "cancelled",
            ProjectStatus::Unknown => "unknown",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ProjectStatus::Planning => "Planning",
            ProjectStatus::InProgress => "In Progress",
            ProjectStatus::OnHold => "On Hold",
            ProjectStatus::Completed => "Completed",
            ProjectStatus::Cancelled => "Cancelled",
            ProjectStatus::Unknown => "Unknown",
        }
    }

    pub fn from_str(s: &str) -> Self {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str() == s)
            .unwrap_or(ProjectStatus::Unknown)
    }
}

/// A tracked project. Start and due dates are independent.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub status: ProjectStatus,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub owner_id: Option<Uuid>,
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
    #[serde(default)]
    pub due_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Entity for Project {
    type Id = Uuid;

    fn id(&self) -> Uuid {
        self.id
    }
}

impl Table for Project {
    const NAME: &'static str = "projects";
    type Draft = NewProject;
}

/// Insert payload for a project. Unset dates are omitted.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub priority: Priority,
    pub status: ProjectStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner_id: Option<Uuid>,
}

impl NewProject {
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
            priority: Priority::default(),
            status: ProjectStatus::default(),
            start_date: None,
            due_date: None,
            owner_id: None,
        }
    }
}

/// Projection used for dashboard stats (`select=status`).
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ProjectSummary {
    #[serde(default)]
    pub status: ProjectStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dates_parse() {
        let json = serde_json::json!({
            "id": "9a8b7c6d-2222-4c5e-9d1e-1f2a3b4c5d6e",
            "name": "Office move",
            "description": "Move to the new floor",
            "status": "on_hold",
            "priority": "high",
            "owner_id": null,
            "start_date": "2025-06-01",
            "due_date": null,
            "created_at": "2025-05-20T08:00:00+00:00"
        });
        let project: Project = serde_json::from_value(json).unwrap();
        assert_eq!(project.status, ProjectStatus::OnHold);
        assert_eq!(project.start_date, NaiveDate::from_ymd_opt(2025, 6, 1));
        assert!(project.due_date.is_none());
    }

    #[test]
    fn test_due_before_start_is_accepted() {
        let mut draft = NewProject::new("Backwards", "Due before it starts");
        draft.start_date = NaiveDate::from_ymd_opt(2025, 6, 10);
        draft.due_date = NaiveDate::from_ymd_opt(2025, 6, 1);
        let payload = serde_json::to_value(&draft).unwrap();
        assert_eq!(payload["start_date"], "2025-06-10");
        assert_eq!(payload["due_date"], "2025-06-01");
        assert_eq!(payload["status"], "planning");
        assert_eq!(payload["priority"], "medium");
    }

    #[test]
    fn test_unset_dates_are_omitted() {
        let payload = serde_json::to_value(NewProject::new("A", "B")).unwrap();
        assert!(payload.get("start_date").is_none());
        assert!(payload.get("due_date").is_none());
        assert!(payload.get("owner_id").is_none());
    }
}
