//! Dashboard Page

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::components::{DashboardLayout, PageHeader, StatCard};
use crate::context::use_app;
use crate::stats::{self, DashboardStats};

#[component]
pub fn DashboardPage() -> impl IntoView {
    let ctx = use_app();
    let stats = RwSignal::new(DashboardStats::default());

    // Re-runs when the user changes; nothing to count while signed out.
    Effect::new(move |_| {
        if ctx.user().is_none() {
            return;
        }
        let tables = ctx.tables();
        spawn_local(async move {
            let fetched = stats::fetch(&tables).await;
            tracing::debug!(?fetched, "dashboard stats");
            let _ = stats.try_set(fetched);
        });
    });

    view! {
        <DashboardLayout>
            <div class="stack">
                <PageHeader title="Dashboard" subtitle="Welcome back! Here's an overview of your system." />

                <div class="stat-grid">
                    {(0..4)
                        .map(|i| view! { <StatCard stat=Signal::derive(move || stats.get().cards()[i].clone()) /> })
                        .collect_view()}
                </div>

                <div class="two-col">
                    <div class="card">
                        <h2 class="card-title">"Recent Activity"</h2>
                        <p class="text-muted-foreground small">
                            "No recent activity to display. Start by creating tickets, adding devices, or managing projects."
                        </p>
                    </div>
                    <div class="card">
                        <h2 class="card-title">"Quick Actions"</h2>
                        <p class="text-muted-foreground small">"Navigate to different sections to manage your system:"</p>
                        <ul class="text-muted-foreground small">
                            <li>"• Create and manage support tickets"</li>
                            <li>"• Track device inventory"</li>
                            <li>"• Monitor project progress"</li>
                        </ul>
                    </div>
                </div>
            </div>
        </DashboardLayout>
    }
}
