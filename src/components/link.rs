use leptos::prelude::*;

use crate::context::use_app;
use crate::routes::Route;

/// In-app link that navigates through the History API.
#[component]
pub fn Link(
    to: Route,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    let ctx = use_app();
    view! {
        <a
            href=to.path()
            class=class
            on:click=move |ev| {
                ev.prevent_default();
                ctx.navigate(to);
            }
        >
            {children()}
        </a>
    }
}
