//! Toaster Component
//!
//! Renders the store's toast queue in the bottom-right corner.

use leptos::prelude::*;

use crate::context::use_app;
use crate::store::AppStateStoreFields;
use crate::toast::{Toast, ToastVariant};

#[component]
pub fn Toaster() -> impl IntoView {
    let ctx = use_app();
    let toasts = ctx.store.toasts();

    view! {
        <ol class="toaster" aria-live="polite">
            <For
                each=move || toasts.get()
                key=|toast: &Toast| toast.id
                children=move |toast: Toast| {
                    let id = toast.id;
                    let class = match toast.variant {
                        ToastVariant::Default => "toast",
                        ToastVariant::Destructive => "toast toast-destructive",
                    };
                    view! {
                        <li class=class role="status" on:click=move |_| ctx.dismiss(id)>
                            <div class="toast-title">{toast.title}</div>
                            {toast.description.map(|d| view! { <div class="toast-description">{d}</div> })}
                        </li>
                    }
                }
            />
        </ol>
    }
}
