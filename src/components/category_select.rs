//! Category Dropdown Component

use leptos::prelude::*;

use crate::models::Category;

/// Category dropdown driven by the `Category` table
#[component]
pub fn CategorySelect(
    value: Signal<String>,
    on_change: impl Fn(String) + Copy + 'static,
) -> impl IntoView {
    view! {
        <select
            name="category"
            prop:value=move || value.get()
            on:change=move |ev| on_change(event_target_value(&ev))
        >
            <option value="">"Select Category"</option>
            {Category::ALL
                .iter()
                .map(|category| {
                    let label = category.as_str();
                    view! { <option value=label>{label}</option> }
                })
                .collect_view()}
        </select>
    }
}
