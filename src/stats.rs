//! Dashboard statistics, counted client-side from fetched rows.

use backend_client::models::{
    Device, DeviceStatus, DeviceSummary, Priority, Project, ProjectStatus, ProjectSummary, Table, Ticket,
    TicketStatus, TicketSummary,
};
use backend_client::{BackendResult, Counted, Select, TableClient};

use crate::badges::Tone;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DashboardStats {
    pub open_tickets: usize,
    pub active_devices: usize,
    pub active_projects: usize,
    pub critical_issues: usize,
    pub ticket_total: u64,
    pub device_total: u64,
    pub project_total: u64,
}

/// One stat card as rendered.
#[derive(Debug, Clone, PartialEq)]
pub struct StatCard {
    pub title: &'static str,
    pub value: usize,
    /// Rows in the table the card counts from.
    pub out_of: u64,
    pub icon: &'static str,
    pub tone: Tone,
}

impl DashboardStats {
    pub fn from_rows(
        tickets: &Counted<TicketSummary>,
        devices: &Counted<DeviceSummary>,
        projects: &Counted<ProjectSummary>,
    ) -> Self {
        Self {
            open_tickets: tickets.rows.iter().filter(|t| t.status == TicketStatus::Open).count(),
            active_devices: devices.rows.iter().filter(|d| d.status == DeviceStatus::InUse).count(),
            active_projects: projects
                .rows
                .iter()
                .filter(|p| p.status == ProjectStatus::InProgress)
                .count(),
            critical_issues: tickets.rows.iter().filter(|t| t.priority == Priority::Urgent).count(),
            ticket_total: tickets.total_or_len(),
            device_total: devices.total_or_len(),
            project_total: projects.total_or_len(),
        }
    }

    pub fn cards(&self) -> [StatCard; 4] {
        [
            StatCard {
                title: "Open Tickets",
                value: self.open_tickets,
                out_of: self.ticket_total,
                icon: "🎫",
                tone: Tone::Primary,
            },
            StatCard {
                title: "Active Devices",
                value: self.active_devices,
                out_of: self.device_total,
                icon: "🖥",
                tone: Tone::Success,
            },
            StatCard {
                title: "Active Projects",
                value: self.active_projects,
                out_of: self.project_total,
                icon: "🗂",
                tone: Tone::Accent,
            },
            StatCard {
                title: "Critical Issues",
                value: self.critical_issues,
                out_of: self.ticket_total,
                icon: "⚠",
                tone: Tone::Destructive,
            },
        ]
    }
}

/// Fetch the three tables concurrently and count.
///
/// A table that fails to load counts as empty.
pub async fn fetch(tables: &TableClient) -> DashboardStats {
    let ticket_cols = Select::columns(&["status", "priority"]).exact_count();
    let status_col = Select::columns(&["status"]).exact_count();

    let (tickets, devices, projects) = futures::join!(
        tables.select_counted::<TicketSummary>(Ticket::NAME, &ticket_cols),
        tables.select_counted::<DeviceSummary>(Device::NAME, &status_col),
        tables.select_counted::<ProjectSummary>(Project::NAME, &status_col),
    );

    DashboardStats::from_rows(
        &or_empty(Ticket::NAME, tickets),
        &or_empty(Device::NAME, devices),
        &or_empty(Project::NAME, projects),
    )
}

fn or_empty<T>(table: &str, result: BackendResult<Counted<T>>) -> Counted<T> {
    result.unwrap_or_else(|e| {
        tracing::warn!(table, error = %e, "stats fetch failed");
        Counted { rows: Vec::new(), total: None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ticket(status: TicketStatus, priority: Priority) -> TicketSummary {
        TicketSummary { status, priority }
    }

    fn counted<T>(rows: Vec<T>) -> Counted<T> {
        let total = Some(rows.len() as u64);
        Counted { rows, total }
    }

    #[test]
    fn test_counts_match_predicates() {
        let tickets = counted(vec![
            ticket(TicketStatus::Open, Priority::Urgent),
            ticket(TicketStatus::Open, Priority::Low),
            ticket(TicketStatus::InProgress, Priority::Urgent),
            ticket(TicketStatus::Closed, Priority::High),
            ticket(TicketStatus::Resolved, Priority::Medium),
        ]);
        let devices = counted(vec![
            DeviceSummary { status: DeviceStatus::InUse },
            DeviceSummary { status: DeviceStatus::Available },
            DeviceSummary { status: DeviceStatus::InUse },
            DeviceSummary { status: DeviceStatus::Retired },
        ]);
        let projects = counted(vec![
            ProjectSummary { status: ProjectStatus::InProgress },
            ProjectSummary { status: ProjectStatus::Planning },
            ProjectSummary { status: ProjectStatus::Completed },
        ]);

        let stats = DashboardStats::from_rows(&tickets, &devices, &projects);
        assert_eq!(stats.open_tickets, 2);
        assert_eq!(stats.active_devices, 2);
        assert_eq!(stats.active_projects, 1);
        assert_eq!(stats.critical_issues, 2);
        assert_eq!(stats.ticket_total, 5);
    }

    #[test]
    fn test_empty_tables_are_zero() {
        let stats = DashboardStats::from_rows(
            &Counted { rows: vec![], total: None },
            &Counted { rows: vec![], total: None },
            &Counted { rows: vec![], total: None },
        );
        assert_eq!(stats, DashboardStats::default());
    }

    #[test]
    fn test_card_order_and_tones() {
        let stats = DashboardStats { open_tickets: 3, critical_issues: 1, ..Default::default() };
        let cards = stats.cards();
        let titles: Vec<&str> = cards.iter().map(|c| c.title).collect();
        assert_eq!(titles, vec!["Open Tickets", "Active Devices", "Active Projects", "Critical Issues"]);
        assert_eq!(cards[0].value, 3);
        assert_eq!(cards[0].tone.text_class(), "text-primary");
        assert_eq!(cards[1].tone.text_class(), "text-success");
        assert_eq!(cards[2].tone.text_class(), "text-accent");
        assert_eq!(cards[3].tone.text_class(), "text-destructive");
        assert_eq!(cards[3].value, 1);
    }

    #[test]
    fn test_failed_table_counts_as_empty() {
        let failed: BackendResult<Counted<DeviceSummary>> = Err(backend_client::BackendError::Api {
            endpoint: "GET devices".into(),
            status: 401,
            message: Some("JWT expired".into()),
            body: String::new(),
        });
        let devices = or_empty("devices", failed);
        assert!(devices.rows.is_empty());
        assert_eq!(devices.total_or_len(), 0);
    }
}
