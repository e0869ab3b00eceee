//! MarketManager Frontend App
//!
//! Single-page market CRUD app; two renditions of the same feature share one
//! store, one context, and one list effect.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::api;
use crate::context::AppContext;
use crate::store::{store_replace_items, store_set_message, AppState, AppStateStoreFields};
use crate::components::{MarketManagerInline, MarketManagerModal, MessageBanner};

/// Which rendition of the manager is shown
#[derive(Clone, Copy, PartialEq)]
enum Variant {
    Inline,
    Modal,
}

const VARIANTS: &[(Variant, &str)] = &[
    (Variant::Inline, "Inline Form"),
    (Variant::Modal, "Modal Form"),
];

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    provide_context(store);

    let (reload_trigger, set_reload_trigger) = signal(0u32);
    provide_context(AppContext::new((reload_trigger, set_reload_trigger)));

    let (variant, set_variant) = signal(Variant::Inline);
    let (initial_load, set_initial_load) = signal(true);

    // List items on mount and after every mutation
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        web_sys::console::log_1(&format!("[APP] Listing items, trigger={}", trigger).into());
        spawn_local(async move {
            match api::fetch_all().await {
                Ok(loaded) => {
                    web_sys::console::log_1(&format!("[APP] Loaded {} items", loaded.len()).into());
                    store_replace_items(&store, loaded);
                }
                Err(e) => {
                    web_sys::console::error_1(&format!("[APP] List failed: {}", e).into());
                    // The very first load stays quiet unless there is nothing to show
                    if !initial_load.get_untracked()
                        || store.items().with_untracked(|items| items.is_empty())
                    {
                        store_set_message(&store, "Failed to fetch items.");
                    }
                }
            }
            set_initial_load.set(false);
        });
    });

    view! {
        <div class="market-container">
            <MessageBanner/>

            <h2>"Market Management"</h2>

            <div class="variant-tab-bar">
                {VARIANTS.iter().map(|(value, label)| {
                    let value = *value;
                    view! {
                        <button
                            class=move || {
                                if variant.get() == value { "variant-tab active" } else { "variant-tab" }
                            }
                            on:click=move |_| set_variant.set(value)
                        >
                            {*label}
                        </button>
                    }
                }).collect_view()}
            </div>

            {move || match variant.get() {
                Variant::Inline => view! { <MarketManagerInline/> }.into_any(),
                Variant::Modal => view! { <MarketManagerModal/> }.into_any(),
            }}
        </div>
    }
}
