//! BytWave Frontend App
//!
//! Root component: provides the store and context, restores the session and
//! switches pages on the current route.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::auth;
use crate::components::{RequireAuth, Toaster};
use crate::context::{AppContext, Backend};
use crate::pages::{
    AuthPage, ContactPage, DashboardPage, DevicesPage, LandingPage, NotFoundPage, ProjectsPage, TicketsPage,
};
use crate::routes::{Navigator, Route};
use crate::store::AppState;

#[component]
pub fn App(backend: Backend) -> impl IntoView {
    let store = Store::new(AppState::new());
    let nav = Navigator::install();
    let ctx = AppContext::new(store, nav, backend);

    // Provide context to all children
    provide_context(ctx);
    auth::restore(ctx);

    let page = move || {
        let route = nav.current();
        tracing::debug!(?route, "render page");
        if route.requires_auth() {
            return view! { <RequireAuth>{move || signed_in_page(route)}</RequireAuth> }.into_any();
        }
        match route {
            Route::Landing => view! { <LandingPage /> }.into_any(),
            Route::Auth => view! { <AuthPage /> }.into_any(),
            Route::Contact => view! { <ContactPage /> }.into_any(),
            _ => view! { <NotFoundPage /> }.into_any(),
        }
    };

    view! {
        <div class="app-root">
            {page}
            <Toaster />
        </div>
    }
}

fn signed_in_page(route: Route) -> AnyView {
    match route {
        Route::Tickets => view! { <TicketsPage /> }.into_any(),
        Route::Devices => view! { <DevicesPage /> }.into_any(),
        Route::Projects => view! { <ProjectsPage /> }.into_any(),
        _ => view! { <DashboardPage /> }.into_any(),
    }
}
