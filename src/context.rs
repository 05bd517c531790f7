//! Application Context
//!
//! Shared handles provided via Leptos Context API.

use backend_client::{AuthClient, BackendConfig, BackendResult, Session, TableClient, User};
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use uuid::Uuid;

use crate::routes::{Navigator, Route};
use crate::store::{store_dismiss_toast, store_push_toast, AppStateStoreFields, AppStore};
use crate::toast::{Toast, TOAST_DURATION_MS};

/// Clients for the hosted backend.
#[derive(Clone, Debug)]
pub struct Backend {
    pub tables: TableClient,
    pub auth: AuthClient,
}

impl Backend {
    pub fn connect(config: BackendConfig) -> BackendResult<Self> {
        Ok(Self {
            tables: TableClient::new(config.clone())?,
            auth: AuthClient::new(config)?,
        })
    }
}

/// App-wide handles provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Session and toasts
    pub store: AppStore,
    /// Current page
    pub nav: Navigator,
    backend: StoredValue<Backend, LocalStorage>,
}

impl AppContext {
    pub fn new(store: AppStore, nav: Navigator, backend: Backend) -> Self {
        Self {
            store,
            nav,
            backend: StoredValue::new_local(backend),
        }
    }

    /// Table client acting as the signed-in user, if there is one.
    pub fn tables(&self) -> TableClient {
        let tables = self.backend.with_value(|b| b.tables.clone());
        match self.store.session().get_untracked() {
            Some(session) => tables.with_session(&session),
            None => tables,
        }
    }

    pub fn auth(&self) -> AuthClient {
        self.backend.with_value(|b| b.auth.clone())
    }

    /// Current session (tracked).
    pub fn session(&self) -> Option<Session> {
        self.store.session().get()
    }

    /// Current user (tracked).
    pub fn user(&self) -> Option<User> {
        self.session().map(|s| s.user)
    }

    /// Signed-in user's id, read without tracking.
    pub fn user_id(&self) -> Option<Uuid> {
        self.store.session().with_untracked(|s| s.as_ref().map(|s| s.user.id))
    }

    pub fn signed_in(&self) -> bool {
        self.store.session().with(Option::is_some)
    }

    /// Whether a stored session is still being restored (tracked).
    pub fn restoring(&self) -> bool {
        self.store.restoring().get()
    }

    /// Show a toast and schedule its dismissal.
    pub fn notify(&self, toast: Toast) {
        let store = self.store;
        let id = store_push_toast(&store, toast);
        spawn_local(async move {
            TimeoutFuture::new(TOAST_DURATION_MS).await;
            store_dismiss_toast(&store, id);
        });
    }

    pub fn dismiss(&self, id: u32) {
        store_dismiss_toast(&self.store, id);
    }

    pub fn navigate(&self, to: Route) {
        self.nav.go(to);
    }
}

/// Get the app context
pub fn use_app() -> AppContext {
    use_context::<AppContext>().expect("AppContext should be provided")
}
