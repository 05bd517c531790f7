//! Client-side routing.
//!
//! Pages are an enum switched on a signal; the browser History API keeps the
//! address bar and back button in step.

use leptos::prelude::*;

/// Every page the app can show.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Route {
    Landing,
    Auth,
    Contact,
    Dashboard,
    Tickets,
    Devices,
    Projects,
    NotFound,
}

/// Sidebar entries: route, label, icon.
pub const NAVIGATION: [(Route, &str, &str); 4] = [
    (Route::Dashboard, "Dashboard", "▦"),
    (Route::Tickets, "Tickets", "🎫"),
    (Route::Devices, "Devices", "🖥"),
    (Route::Projects, "Projects", "🗂"),
];

impl Route {
    pub fn from_path(path: &str) -> Self {
        let path = path.trim();
        let path = if path.len() > 1 { path.trim_end_matches('/') } else { path };
        match path {
            "" | "/" => Route::Landing,
            "/auth" => Route::Auth,
            "/contact" => Route::Contact,
            "/dashboard" => Route::Dashboard,
            "/tickets" => Route::Tickets,
            "/devices" => Route::Devices,
            "/projects" => Route::Projects,
            _ => Route::NotFound,
        }
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Landing => "/",
            Route::Auth => "/auth",
            Route::Contact => "/contact",
            Route::Dashboard => "/dashboard",
            Route::Tickets => "/tickets",
            Route::Devices => "/devices",
            Route::Projects => "/projects",
            Route::NotFound => "/404",
        }
    }

    /// Pages behind the sign-in wall.
    pub fn requires_auth(&self) -> bool {
        matches!(self, Route::Dashboard | Route::Tickets | Route::Devices | Route::Projects)
    }
}

/// Current route plus History API plumbing.
#[derive(Clone, Copy)]
pub struct Navigator {
    route: RwSignal<Route>,
}

impl Navigator {
    /// Start at the browser's current path and follow back/forward.
    pub fn install() -> Self {
        let initial = window()
            .location()
            .pathname()
            .map(|p| Route::from_path(&p))
            .unwrap_or(Route::Landing);
        let route = RwSignal::new(initial);

        // The app root never unmounts, so the listener lives as long as the page.
        let _ = window_event_listener(leptos::ev::popstate, move |_| {
            if let Ok(path) = window().location().pathname() {
                route.set(Route::from_path(&path));
            }
        });

        Self { route }
    }

    pub fn current(&self) -> Route {
        self.route.get()
    }

    /// Navigate, adding a history entry.
    pub fn go(&self, to: Route) {
        if self.route.get_untracked() == to {
            return;
        }
        if let Ok(history) = window().history() {
            let _ = history.push_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to.path()));
        }
        tracing::debug!(path = to.path(), "navigate");
        self.route.set(to);
    }

    /// Navigate without leaving the current page in history (redirects).
    pub fn replace(&self, to: Route) {
        if let Ok(history) = window().history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(to.path()));
        }
        self.route.set(to);
    }
}
