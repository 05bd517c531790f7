//! Badge Component

use leptos::prelude::*;

use crate::badges::Badged;

/// Solid badge coloured by the value's tone.
#[component]
pub fn Badge<B: Badged + 'static>(value: B) -> impl IntoView {
    let class = format!("badge {}", value.tone().bg_class());
    view! { <span class=class>{value.badge_text()}</span> }
}

/// Neutral outlined badge.
#[component]
pub fn OutlineBadge(#[prop(into)] text: String) -> impl IntoView {
    view! { <span class="badge badge-outline">{text}</span> }
}
