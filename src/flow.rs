//! List-page data flow.
//!
//! mount → fetch → render → submit → insert → re-fetch → render.
//!
//! The async steps return a [`PageUpdate`] describing what the page should
//! do next, so the flow can be exercised without a browser.

use backend_client::models::{Device, Project, Table, Ticket};
use backend_client::{BackendResult, Repository};

use crate::toast::Toast;

/// Copy a list page shows around its table.
pub trait Listing: Table {
    /// Shown when the table has no rows.
    const EMPTY_MESSAGE: &'static str;
    /// Toast description when the list cannot be fetched.
    const FETCH_FAILED: &'static str;
    /// Toast description after a successful insert.
    const CREATED: &'static str;
}

impl Listing for Ticket {
    const EMPTY_MESSAGE: &'static str = "No tickets found. Create your first ticket to get started.";
    const FETCH_FAILED: &'static str = "Failed to fetch tickets";
    const CREATED: &'static str = "Ticket created successfully";
}

impl Listing for Device {
    const EMPTY_MESSAGE: &'static str = "No devices found. Add your first device to get started.";
    const FETCH_FAILED: &'static str = "Failed to fetch devices";
    const CREATED: &'static str = "Device added successfully";
}

impl Listing for Project {
    const EMPTY_MESSAGE: &'static str = "No projects found. Create your first project to get started.";
    const FETCH_FAILED: &'static str = "Failed to fetch projects";
    const CREATED: &'static str = "Project created successfully";
}

/// What a page applies after an async step.
#[derive(Debug, Clone, PartialEq)]
pub struct PageUpdate<T> {
    /// Replacement rows; `None` keeps what is shown.
    pub rows: Option<Vec<T>>,
    pub close_dialog: bool,
    pub toasts: Vec<Toast>,
}

impl<T> PageUpdate<T> {
    fn nothing() -> Self {
        Self { rows: None, close_dialog: false, toasts: Vec::new() }
    }
}

/// Message to show instead of the list, if there are no rows.
pub fn empty_state<T: Listing>(rows: &[T]) -> Option<&'static str> {
    rows.is_empty().then_some(T::EMPTY_MESSAGE)
}

/// Result of a list fetch.
pub fn fetched<T: Listing>(result: BackendResult<Vec<T>>) -> PageUpdate<T> {
    match result {
        Ok(rows) => PageUpdate { rows: Some(rows), ..PageUpdate::nothing() },
        Err(e) => {
            tracing::warn!(table = T::NAME, error = %e, "fetch failed");
            PageUpdate { toasts: vec![Toast::error(T::FETCH_FAILED)], ..PageUpdate::nothing() }
        }
    }
}

/// Fetch all rows of `T`, newest first.
pub async fn load<T, R>(repo: &R) -> PageUpdate<T>
where
    T: Listing,
    R: Repository<T> + ?Sized,
{
    fetched(repo.list_recent().await)
}

/// Insert `draft`; on success re-fetch exactly once and close the dialog.
/// On failure the dialog stays open and nothing is re-fetched.
pub async fn create_then_reload<T, R>(repo: &R, draft: &T::Draft) -> PageUpdate<T>
where
    T: Listing,
    R: Repository<T> + ?Sized,
{
    if let Err(e) = repo.insert(draft).await {
        tracing::warn!(table = T::NAME, error = %e, "insert failed");
        return PageUpdate { toasts: vec![Toast::from_error(&e)], ..PageUpdate::nothing() };
    }

    tracing::info!(table = T::NAME, "row created");
    let mut update = load(repo).await;
    update.close_dialog = true;
    update.toasts.insert(0, Toast::success(T::CREATED));
    update
}
