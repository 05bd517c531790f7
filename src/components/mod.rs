//! UI Components
//!
//! Reusable Leptos components.

mod badge;
mod dashboard_layout;
mod dialog;
mod empty_state;
mod enum_select;
mod link;
mod require_auth;
mod stat_card;
mod toaster;

pub use badge::{Badge, OutlineBadge};
pub use dashboard_layout::{DashboardLayout, PageHeader};
pub use dialog::Dialog;
pub use empty_state::{EmptyState, Spinner};
pub use enum_select::EnumSelect;
pub use link::Link;
pub use require_auth::RequireAuth;
pub use stat_card::StatCard;
pub use toaster::Toaster;
