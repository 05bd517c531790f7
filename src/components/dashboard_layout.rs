//! Dashboard Layout Component
//!
//! Sidebar shell for the signed-in pages. On narrow screens the sidebar is
//! hidden behind a header menu button and slides over the content.

use leptos::prelude::*;

use crate::auth;
use crate::context::use_app;
use crate::routes::NAVIGATION;

#[component]
pub fn DashboardLayout(children: Children) -> impl IntoView {
    let (sheet_open, set_sheet_open) = signal(false);

    view! {
        <div class="dashboard-layout">
            <aside class="sidebar sidebar-desktop">
                <Sidebar on_navigate=Callback::new(|_| ()) />
            </aside>

            <header class="mobile-header">
                <button
                    type="button"
                    class="menu-btn"
                    aria-label="Open menu"
                    on:click=move |_| set_sheet_open.set(true)
                >
                    "☰"
                </button>
                <span class="brand">"BytWave"</span>
            </header>

            <Show when=move || sheet_open.get()>
                <div class="sheet-overlay" on:click=move |_| set_sheet_open.set(false)>
                    <aside class="sidebar sheet" on:click=move |ev| ev.stop_propagation()>
                        <Sidebar on_navigate=Callback::new(move |_| set_sheet_open.set(false)) />
                    </aside>
                </div>
            </Show>

            <main class="dashboard-main">{children()}</main>
        </div>
    }
}

#[component]
fn Sidebar(#[prop(into)] on_navigate: Callback<()>) -> impl IntoView {
    let ctx = use_app();
    let email = move || ctx.user().and_then(|u| u.email).unwrap_or_default();

    view! {
        <div class="sidebar-inner">
            <div class="sidebar-brand">
                <span class="brand-mark">"BW"</span>
                <span class="brand">"BytWave"</span>
            </div>

            <nav class="sidebar-nav">
                {NAVIGATION
                    .iter()
                    .map(|&(route, label, icon)| {
                        let is_active = move || ctx.nav.current() == route;
                        view! {
                            <a
                                href=route.path()
                                class=move || if is_active() { "nav-item active" } else { "nav-item" }
                                on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.navigate(route);
                                    on_navigate.run(());
                                }
                            >
                                <span class="nav-icon">{icon}</span>
                                <span>{label}</span>
                            </a>
                        }
                    })
                    .collect_view()}
            </nav>

            <div class="sidebar-footer">
                <p class="user-email text-muted-foreground">{email}</p>
                <button
                    type="button"
                    class="btn btn-outline"
                    on:click=move |_| {
                        on_navigate.run(());
                        auth::sign_out(ctx);
                    }
                >
                    "Sign Out"
                </button>
            </div>
        </div>
    }
}

/// Page heading with an optional action on the right.
#[component]
pub fn PageHeader(
    title: &'static str,
    subtitle: &'static str,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div>
                <h1 class="page-title">{title}</h1>
                <p class="page-subtitle text-muted-foreground">{subtitle}</p>
            </div>
            {children.map(|c| c())}
        </div>
    }
}
