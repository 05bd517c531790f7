//! Badge colours.
//!
//! Every enumerated field maps onto one of a handful of theme tones; values
//! this client does not recognise render muted.

use backend_client::models::{DeviceStatus, Priority, ProjectStatus, TicketStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Primary,
    Accent,
    Success,
    Warning,
    Destructive,
    Muted,
}

impl Tone {
    /// Background class for badges.
    pub fn bg_class(&self) -> &'static str {
        match self {
            Tone::Primary => "bg-primary",
            Tone::Accent => "bg-accent",
            Tone::Success => "bg-success",
            Tone::Warning => "bg-warning",
            Tone::Destructive => "bg-destructive",
            Tone::Muted => "bg-muted",
        }
    }

    /// Foreground class for icons.
    pub fn text_class(&self) -> &'static str {
        match self {
            Tone::Primary => "text-primary",
            Tone::Accent => "text-accent",
            Tone::Success => "text-success",
            Tone::Warning => "text-warning",
            Tone::Destructive => "text-destructive",
            Tone::Muted => "text-muted-foreground",
        }
    }
}

/// A value that renders as a coloured badge.
pub trait Badged {
    fn tone(&self) -> Tone;
    fn badge_text(&self) -> &'static str;
}

impl Badged for Priority {
    fn tone(&self) -> Tone {
        match self {
            Priority::Urgent => Tone::Destructive,
            Priority::High => Tone::Warning,
            Priority::Medium => Tone::Primary,
            Priority::Low | Priority::Unknown => Tone::Muted,
        }
    }

    fn badge_text(&self) -> &'static str {
        self.as_str()
    }
}

impl Badged for TicketStatus {
    fn tone(&self) -> Tone {
        match self {
            TicketStatus::Open => Tone::Primary,
            TicketStatus::InProgress => Tone::Warning,
            TicketStatus::Resolved => Tone::Success,
            TicketStatus::Closed | TicketStatus::Unknown => Tone::Muted,
        }
    }

    fn badge_text(&self) -> &'static str {
        self.as_str()
    }
}

impl Badged for DeviceStatus {
    fn tone(&self) -> Tone {
        match self {
            DeviceStatus::Available => Tone::Success,
            DeviceStatus::InUse => Tone::Primary,
            DeviceStatus::Maintenance => Tone::Warning,
            DeviceStatus::Retired | DeviceStatus::Unknown => Tone::Muted,
        }
    }

    fn badge_text(&self) -> &'static str {
        self.as_str()
    }
}

impl Badged for ProjectStatus {
    fn tone(&self) -> Tone {
        match self {
            ProjectStatus::Planning | ProjectStatus::Unknown => Tone::Muted,
            ProjectStatus::InProgress => Tone::Primary,
            ProjectStatus::OnHold => Tone::Warning,
            ProjectStatus::Completed => Tone::Success,
            ProjectStatus::Cancelled => Tone::Destructive,
        }
    }

    fn badge_text(&self) -> &'static str {
        self.as_str()
    }
}
