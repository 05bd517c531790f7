//! Reactive state shared by the list pages.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::context::AppContext;
use crate::flow::{self, Listing, PageUpdate};
use crate::toast::Toast;

/// Rows plus dialog state for one list page.
///
/// Owned by the page; async results land through `try_*` writes so a reply
/// that arrives after the page is gone is dropped.
pub struct TablePage<T: Send + Sync + 'static> {
    pub rows: RwSignal<Vec<T>>,
    pub dialog_open: RwSignal<bool>,
    /// An insert is in flight.
    pub submitting: RwSignal<bool>,
}

impl<T: Send + Sync + 'static> Clone for TablePage<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for TablePage<T> {}

impl<T> TablePage<T>
where
    T: Listing,
    T::Draft: 'static,
{
    pub fn new() -> Self {
        Self {
            rows: RwSignal::new(Vec::new()),
            dialog_open: RwSignal::new(false),
            submitting: RwSignal::new(false),
        }
    }

    /// Create the page state and start the initial fetch.
    pub fn mount(ctx: AppContext) -> Self {
        let page = Self::new();
        page.reload(ctx);
        page
    }

    pub fn reload(self, ctx: AppContext) {
        spawn_local(async move {
            let tables = ctx.tables();
            let update = flow::load::<T, _>(&tables).await;
            self.apply(ctx, update);
        });
    }

    /// Insert `draft`, then re-fetch. Ignored while another insert runs.
    pub fn submit(self, ctx: AppContext, draft: T::Draft) {
        if !self.begin_submit() {
            tracing::debug!(table = T::NAME, "submit ignored, insert in flight");
            return;
        }

        spawn_local(async move {
            let tables = ctx.tables();
            let update = flow::create_then_reload::<T, _>(&tables, &draft).await;
            self.apply(ctx, update);
            let _ = self.submitting.try_set(false);
        });
    }

    pub fn open_dialog(self) {
        self.dialog_open.set(true);
    }

    /// Mark an insert as started; `false` if one is already running or the
    /// page is gone.
    fn begin_submit(self) -> bool {
        if self.submitting.try_get_untracked().unwrap_or(true) {
            return false;
        }
        self.submitting.set(true);
        true
    }

    fn apply(self, ctx: AppContext, update: PageUpdate<T>) {
        for toast in self.write_back(update) {
            ctx.notify(toast);
        }
    }

    /// Write rows and dialog state; returns the toasts to show.
    fn write_back(self, update: PageUpdate<T>) -> Vec<Toast> {
        if let Some(rows) = update.rows {
            if self.rows.try_set(rows).is_some() {
                tracing::debug!(table = T::NAME, "page gone, dropping fetched rows");
                return update.toasts;
            }
        }
        if update.close_dialog {
            let _ = self.dialog_open.try_set(false);
        }
        update.toasts
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use backend_client::models::Ticket;

    fn update(rows: Option<Vec<Ticket>>, close_dialog: bool) -> PageUpdate<Ticket> {
        PageUpdate { rows, close_dialog, toasts: vec![Toast::success(Ticket::CREATED)] }
    }

    #[test]
    fn test_second_submit_ignored_while_in_flight() {
        let owner = Owner::new();
        owner.with(|| {
            let page = TablePage::<Ticket>::new();
            assert!(page.begin_submit());
            assert!(!page.begin_submit());

            page.submitting.set(false);
            assert!(page.begin_submit());
        });
    }

    #[test]
    fn test_write_back_closes_dialog_and_replaces_rows() {
        let owner = Owner::new();
        owner.with(|| {
            let page = TablePage::<Ticket>::new();
            page.open_dialog();

            let toasts = page.write_back(update(Some(Vec::new()), true));

            assert_eq!(toasts.len(), 1);
            assert!(!page.dialog_open.get_untracked());
            assert!(page.rows.with_untracked(Vec::is_empty));
        });
    }

    #[test]
    fn test_failed_submit_leaves_dialog_open() {
        let owner = Owner::new();
        owner.with(|| {
            let page = TablePage::<Ticket>::new();
            page.open_dialog();

            page.write_back(update(None, false));

            assert!(page.dialog_open.get_untracked());
        });
    }

    #[test]
    fn test_results_after_page_disposed_are_dropped() {
        let owner = Owner::new();
        let page = owner.with(|| {
            let page = TablePage::<Ticket>::new();
            page.open_dialog();
            page
        });
        owner.cleanup();

        assert!(page.rows.try_set(Vec::new()).is_some());
        let toasts = page.write_back(update(Some(Vec::new()), true));
        assert_eq!(toasts.len(), 1);
        assert_eq!(page.dialog_open.try_get_untracked(), None);
        assert!(!page.begin_submit());
    }
}
