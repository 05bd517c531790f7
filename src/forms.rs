//! Creation forms.
//!
//! Values are read straight off the submitted `<form>` and turned into
//! drafts without transformation. Unset or unrecognised enum controls fall
//! back to their defaults.

use std::collections::HashMap;

use backend_client::models::{
    DeviceStatus, NewDevice, NewProject, NewTicket, Priority, ProjectStatus, TicketCategory,
};
use chrono::NaiveDate;
use uuid::Uuid;
use wasm_bindgen::JsCast;

/// Snapshot of a form's named controls.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormValues(HashMap<String, String>);

impl FormValues {
    /// Read `names` from the form that fired `ev`.
    pub fn from_submit(ev: &web_sys::SubmitEvent, names: &[&str]) -> Option<Self> {
        let form = ev.target()?.dyn_into::<web_sys::HtmlFormElement>().ok()?;
        let data = web_sys::FormData::new_with_form(&form).ok()?;
        let values = names
            .iter()
            .filter_map(|name| data.get(name).as_string().map(|v| (name.to_string(), v)))
            .collect();
        Some(Self(values))
    }

    pub fn from_pairs(pairs: &[(&str, &str)]) -> Self {
        Self(pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect())
    }

    /// Control text as typed; missing controls read as empty.
    pub fn text(&self, name: &str) -> String {
        self.0.get(name).cloned().unwrap_or_default()
    }

    /// `<input type="date">` value; empty or malformed reads as unset.
    pub fn date(&self, name: &str) -> Option<NaiveDate> {
        let raw = self.0.get(name)?;
        NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").ok()
    }
}

pub const TICKET_FIELDS: [&str; 4] = ["title", "description", "priority", "category"];

pub const DEVICE_FIELDS: [&str; 8] = [
    "device_name",
    "device_type",
    "serial_number",
    "manufacturer",
    "model",
    "status",
    "location",
    "notes",
];

pub const PROJECT_FIELDS: [&str; 6] = ["name", "description", "priority", "status", "start_date", "due_date"];

/// Controls the browser must see filled before submitting.
pub const TICKET_REQUIRED: [&str; 2] = ["title", "description"];
pub const DEVICE_REQUIRED: [&str; 2] = ["device_name", "device_type"];
pub const PROJECT_REQUIRED: [&str; 2] = ["name", "description"];

fn priority(values: &FormValues) -> Priority {
    match Priority::from_str(&values.text("priority")) {
        Priority::Unknown => Priority::default(),
        p => p,
    }
}

pub fn ticket_draft(values: &FormValues, created_by: Option<Uuid>) -> NewTicket {
    let category = match TicketCategory::from_str(&values.text("category")) {
        TicketCategory::Unknown => TicketCategory::default(),
        c => c,
    };
    NewTicket {
        title: values.text("title"),
        description: values.text("description"),
        priority: priority(values),
        category,
        created_by,
    }
}

pub fn device_draft(values: &FormValues) -> NewDevice {
    let status = match DeviceStatus::from_str(&values.text("status")) {
        DeviceStatus::Unknown => DeviceStatus::default(),
        s => s,
    };
    NewDevice {
        device_name: values.text("device_name"),
        device_type: values.text("device_type"),
        serial_number: values.text("serial_number"),
        manufacturer: values.text("manufacturer"),
        model: values.text("model"),
        status,
        location: values.text("location"),
        notes: values.text("notes"),
    }
}

pub fn project_draft(values: &FormValues, owner_id: Option<Uuid>) -> NewProject {
    let status = match ProjectStatus::from_str(&values.text("status")) {
        ProjectStatus::Unknown => ProjectStatus::default(),
        s => s,
    };
    NewProject {
        name: values.text("name"),
        description: values.text("description"),
        priority: priority(values),
        status,
        start_date: values.date("start_date"),
        due_date: values.date("due_date"),
        owner_id,
    }
}

/// `(value, label)` pairs for a form's `<select>`.
pub type Options = Vec<(&'static str, &'static str)>;

pub fn priority_options() -> Options {
    Priority::ALL.iter().map(|p| (p.as_str(), p.label())).collect()
}

pub fn category_options() -> Options {
    TicketCategory::ALL.iter().map(|c| (c.as_str(), c.label())).collect()
}

pub fn device_status_options() -> Options {
    DeviceStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

pub fn project_status_options() -> Options {
    ProjectStatus::ALL.iter().map(|s| (s.as_str(), s.label())).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ticket_fields_verbatim() {
        let user = Uuid::from_u128(7);
        let values = FormValues::from_pairs(&[
            ("title", "  Spaces kept  "),
            ("description", "Line one\nLine two"),
            ("priority", "urgent"),
            ("category", "network"),
        ]);
        let draft = ticket_draft(&values, Some(user));
        assert_eq!(draft.title, "  Spaces kept  ");
        assert_eq!(draft.description, "Line one\nLine two");
        assert_eq!(draft.priority, Priority::Urgent);
        assert_eq!(draft.category, TicketCategory::Network);
        assert_eq!(draft.created_by, Some(user));
    }

    #[test]
    fn test_unset_enums_use_defaults() {
        let values = FormValues::from_pairs(&[("title", "t"), ("description", "d")]);
        let ticket = ticket_draft(&values, None);
        assert_eq!(ticket.priority, Priority::Medium);
        assert_eq!(ticket.category, TicketCategory::General);

        let device = device_draft(&FormValues::from_pairs(&[("status", "lost")]));
        assert_eq!(device.status, DeviceStatus::Available);

        let project = project_draft(&FormValues::default(), None);
        assert_eq!(project.status, ProjectStatus::Planning);
        assert_eq!(project.priority, Priority::Medium);
    }

    #[test]
    fn test_device_optional_controls_are_empty_strings() {
        let values = FormValues::from_pairs(&[
            ("device_name", "Front desk PC"),
            ("device_type", "desktop"),
            ("status", "in_use"),
        ]);
        let draft = device_draft(&values);
        assert_eq!(draft.status, DeviceStatus::InUse);
        assert_eq!(draft.serial_number, "");
        assert_eq!(draft.location, "");
    }

    #[test]
    fn test_project_dates() {
        let values = FormValues::from_pairs(&[
            ("name", "Rollout"),
            ("description", "POS rollout"),
            ("start_date", "2025-07-01"),
            ("due_date", ""),
        ]);
        let draft = project_draft(&values, None);
        assert_eq!(draft.start_date, NaiveDate::from_ymd_opt(2025, 7, 1));
        assert_eq!(draft.due_date, None);
    }

    #[test]
    fn test_select_options_offer_defaults() {
        assert!(priority_options().iter().any(|(v, _)| *v == Priority::default().as_str()));
        assert!(category_options().iter().any(|(v, _)| *v == TicketCategory::default().as_str()));
        assert!(device_status_options().iter().any(|(v, _)| *v == DeviceStatus::default().as_str()));
        assert_eq!(project_status_options().len(), 5);
    }

    #[test]
    fn test_required_controls_are_form_fields() {
        assert!(PROJECT_REQUIRED.contains(&"description"));
        assert!(TICKET_REQUIRED.contains(&"description"));
        for (required, fields) in [
            (&TICKET_REQUIRED[..], &TICKET_FIELDS[..]),
            (&DEVICE_REQUIRED[..], &DEVICE_FIELDS[..]),
            (&PROJECT_REQUIRED[..], &PROJECT_FIELDS[..]),
        ] {
            assert!(required.iter().all(|name| fields.contains(name)));
        }
    }
}
