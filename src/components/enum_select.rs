//! Enum Select Component
//!
//! A named `<select>` over an enum's `(value, label)` pairs, read back by
//! the enclosing form on submit.

use leptos::prelude::*;

#[component]
pub fn EnumSelect(
    name: &'static str,
    label: &'static str,
    options: Vec<(&'static str, &'static str)>,
    selected: &'static str,
) -> impl IntoView {
    view! {
        <label class="field">
            <span class="field-label">{label}</span>
            <select name=name class="input">
                {options
                    .into_iter()
                    .map(|(value, text)| {
                        view! {
                            <option value=value selected={value == selected}>{text}</option>
                        }
                    })
                    .collect_view()}
            </select>
        </label>
    }
}
