use leptos::prelude::*;

use crate::components::Spinner;
use crate::context::use_app;
use crate::routes::Route;

/// Render `children` only for a signed-in user.
///
/// Waits for session restore, then sends anonymous visitors to the sign-in
/// page.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let ctx = use_app();
    let signed_in = Memo::new(move |_| ctx.signed_in());

    Effect::new(move |_| {
        if !ctx.restoring() && !signed_in.get() {
            tracing::debug!("no session, redirecting to sign-in");
            ctx.nav.replace(Route::Auth);
        }
    });

    view! {
        <Show
            when=move || !ctx.restoring() && signed_in.get()
            fallback=|| view! { <Spinner /> }
        >
            {children()}
        </Show>
    }
}
