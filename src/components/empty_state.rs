use leptos::prelude::*;

/// Placeholder card for a table with no rows.
#[component]
pub fn EmptyState(message: &'static str) -> impl IntoView {
    view! {
        <div class="card empty-state">
            <p class="text-muted-foreground">{message}</p>
        </div>
    }
}

/// Centered loading spinner.
#[component]
pub fn Spinner() -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <div class="spinner" role="status" aria-label="Loading"></div>
        </div>
    }
}
