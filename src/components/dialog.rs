//! Modal Dialog Component
//!
//! Overlay with a centered panel. Closes on Escape, on an overlay click and
//! from the × button.

use leptos::prelude::*;

#[component]
pub fn Dialog(
    open: RwSignal<bool>,
    title: &'static str,
    #[prop(optional)] description: Option<&'static str>,
    children: ChildrenFn,
) -> impl IntoView {
    let children = StoredValue::new(children);

    view! {
        <Show when=move || open.get()>
            <DialogPanel open=open title=title description=description>
                {children.with_value(|c| c())}
            </DialogPanel>
        </Show>
    }
}

#[component]
fn DialogPanel(
    open: RwSignal<bool>,
    title: &'static str,
    description: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let escape = window_event_listener(leptos::ev::keydown, move |ev| {
        if ev.key() == "Escape" {
            open.set(false);
        }
    });
    on_cleanup(move || escape.remove());

    view! {
        <div class="dialog-overlay" on:click=move |_| open.set(false)>
            <div
                class="dialog"
                role="dialog"
                aria-modal="true"
                on:click=move |ev| ev.stop_propagation()
            >
                <div class="dialog-header">
                    <h2 class="dialog-title">{title}</h2>
                    {description.map(|d| view! { <p class="dialog-description">{d}</p> })}
                    <button
                        type="button"
                        class="dialog-close"
                        aria-label="Close"
                        on:click=move |_| open.set(false)
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
