//! Chrome shared by the public pages.

use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

pub const COPYRIGHT: &str = "© 2025 BytWave Technologies. All rights reserved.";

#[component]
pub fn Brand() -> impl IntoView {
    view! {
        <div class="brand-row">
            <span class="brand-mark text-primary">"≋"</span>
            <span class="brand-name">"BytWave Technologies"</span>
        </div>
    }
}

#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="public-footer text-muted-foreground">{COPYRIGHT}</footer>
    }
}

#[component]
pub fn FeatureCard(icon: &'static str, title: &'static str, body: &'static str) -> impl IntoView {
    view! {
        <div class="card feature-card">
            <div class="feature-icon text-primary">{icon}</div>
            <h3 class="feature-title">{title}</h3>
            <p class="text-muted-foreground">{body}</p>
        </div>
    }
}

/// Header link back to the landing page.
#[component]
pub fn BackLink() -> impl IntoView {
    view! {
        <Link to=Route::Landing class="btn btn-ghost">"← Back"</Link>
    }
}
