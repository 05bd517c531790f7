//! Stat Card Component

use leptos::prelude::*;

use crate::stats::StatCard as Stat;

/// One dashboard figure with the table total beneath it.
#[component]
pub fn StatCard(#[prop(into)] stat: Signal<Stat>) -> impl IntoView {
    view! {
        <div class="card stat-card">
            <div class="stat-card-header">
                <span class="stat-title">{move || stat.get().title}</span>
                <span class=move || format!("stat-icon {}", stat.get().tone.text_class())>
                    {move || stat.get().icon}
                </span>
            </div>
            <div class="stat-value">{move || stat.get().value}</div>
            <p class="stat-total text-muted-foreground">
                {move || format!("of {} total", stat.get().out_of)}
            </p>
        </div>
    }
}
