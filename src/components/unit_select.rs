//! Unit Dropdown Component

use leptos::prelude::*;

use crate::models::Unit;

/// Unit dropdown driven by the `Unit` table
#[component]
pub fn UnitSelect(
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            name="unit"
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"Select Unit"</option>
            {Unit::ALL
                .iter()
                .map(|unit| {
                    let label = unit.as_str();
                    view! { <option value=label>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}
