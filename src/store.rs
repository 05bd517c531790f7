//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. Only
//! cross-page state lives here: the auth session and the toast queue.
//! Table rows stay local to the page that fetched them.

use backend_client::Session;
use leptos::prelude::*;
use reactive_stores::Store;

use crate::toast::{push_bounded, Toast};

#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Signed-in session, if any
    pub session: Option<Session>,
    /// True while a stored session is being restored or refreshed
    pub restoring: bool,
    /// Visible toasts, oldest first
    pub toasts: Vec<Toast>,
    /// Next toast id
    pub next_toast_id: u32,
}

impl AppState {
    pub fn new() -> Self {
        Self {
            restoring: true,
            next_toast_id: 1,
            ..Default::default()
        }
    }
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

// ========================
// Store Helper Functions
// ========================

/// Show a toast; returns its id
pub fn store_push_toast(store: &AppStore, mut toast: Toast) -> u32 {
    let id = store.next_toast_id().get_untracked();
    store.next_toast_id().set(id.wrapping_add(1));
    toast.id = id;
    push_bounded(&mut store.toasts().write(), toast);
    id
}

/// Remove a toast by id (no-op if already gone)
pub fn store_dismiss_toast(store: &AppStore, id: u32) {
    store.toasts().write().retain(|t| t.id != id);
}
