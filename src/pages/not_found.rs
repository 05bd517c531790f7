use leptos::prelude::*;

use crate::components::Link;
use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    let path = window().location().pathname().unwrap_or_default();
    tracing::warn!(%path, "no page for path");

    view! {
        <div class="fullscreen-center">
            <h1 class="not-found-code">"404"</h1>
            <p class="text-muted-foreground">"Oops! Page not found"</p>
            <Link to=Route::Landing class="contact-link">"Return to Home"</Link>
        </div>
    }
}
