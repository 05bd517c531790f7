//! Landing Page

use leptos::prelude::*;

use super::public::{Brand, FeatureCard, Footer};
use crate::components::Link;
use crate::context::use_app;
use crate::routes::Route;

const FEATURES: [(&str, &str, &str); 3] = [
    ("🎫", "Ticket Management", "Track and resolve support tickets efficiently with priority-based workflows"),
    ("🖥", "Device Inventory", "Manage your hardware assets with detailed tracking and status monitoring"),
    ("🗂", "Project Tracking", "Organize and monitor projects from planning to completion"),
];

const SERVICES: [(&str, &str, &str); 3] = [
    ("📷", "CCTV Installation", "Professional surveillance systems installation and maintenance for enhanced security"),
    ("💻", "Computer Supply & Management", "Complete IT hardware solutions with procurement, setup, and ongoing management"),
    ("🛒", "Custom POS Systems", "Tailored point-of-sale solutions including hotel systems, school management, and more"),
];

#[component]
pub fn LandingPage() -> impl IntoView {
    let ctx = use_app();

    Effect::new(move |_| {
        if !ctx.restoring() && ctx.signed_in() {
            ctx.nav.replace(Route::Dashboard);
        }
    });

    view! {
        <Show
            when=move || !ctx.restoring()
            fallback=|| view! {
                <div class="fullscreen-center">
                    <div class="spinner"></div>
                    <p class="text-muted-foreground">"Loading..."</p>
                </div>
            }
        >
            <div class="public-page">
                <header class="public-header">
                    <Brand />
                    <div class="header-actions">
                        <Link to=Route::Contact class="btn btn-ghost">"Contact"</Link>
                        <Link to=Route::Auth class="btn btn-primary">"Sign In →"</Link>
                    </div>
                </header>

                <main class="public-main">
                    <section class="hero">
                        <h1 class="hero-title">
                            "Enterprise Management" <br />
                            <span class="text-primary">"Made Simple"</span>
                        </h1>
                        <p class="hero-lead text-muted-foreground">
                            "Comprehensive platform for ticket management, device inventory, and project tracking. "
                            "Everything your team needs in one place."
                        </p>
                        <Link to=Route::Auth class="btn btn-primary btn-lg">"Get Started →"</Link>
                    </section>

                    <section class="feature-section">
                        <h2 class="section-title">"Management Features"</h2>
                        <div class="feature-grid">
                            {FEATURES
                                .iter()
                                .map(|&(icon, title, body)| view! { <FeatureCard icon=icon title=title body=body /> })
                                .collect_view()}
                        </div>
                    </section>

                    <section class="feature-section">
                        <h2 class="section-title">"Our Services"</h2>
                        <div class="feature-grid">
                            {SERVICES
                                .iter()
                                .map(|&(icon, title, body)| view! { <FeatureCard icon=icon title=title body=body /> })
                                .collect_view()}
                        </div>
                    </section>
                </main>

                <Footer />
            </div>
        </Show>
    }
}
