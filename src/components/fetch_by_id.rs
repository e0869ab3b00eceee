//! Fetch-by-ID Panel Component
//!
//! Looks up a single item by id and shows it as pretty-printed JSON.
//! A miss clears any previously fetched item and reports "Item not found.".

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::store::{
    store_clear_fetched, store_clear_message, store_set_fetched, store_set_message,
    use_app_store, AppStateStoreFields,
};

/// Fetch-by-id input, button, and result display
#[component]
pub fn FetchByIdPanel() -> impl IntoView {
    let store = use_app_store();
    let (id_to_fetch, set_id_to_fetch) = signal(String::new());

    let fetch = move |_| {
        let id = id_to_fetch.get();
        spawn_local(async move {
            match api::get_item(&id).await {
                Ok(item) => {
                    store_set_fetched(&store, item);
                    store_clear_message(&store);
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[FetchById] Lookup {} failed: {}", id, e).into(),
                    );
                    store_clear_fetched(&store);
                    store_set_message(&store, "Item not found.");
                }
            }
        });
    };

    view! {
        <div>
            <h3>"Get Item By ID"</h3>
            <input
                type="number"
                placeholder="Enter ID"
                prop:value=move || id_to_fetch.get()
                on:input=move |ev| set_id_to_fetch.set(event_target_value(&ev))
            />
            <button class="btn-blue" on:click=fetch>"Fetch"</button>

            {move || store.fetched_item().get().map(|item| {
                let pretty = serde_json::to_string_pretty(&item).unwrap_or_default();
                view! {
                    <div>
                        <h4>"Item Found:"</h4>
                        <pre>{pretty}</pre>
                    </div>
                }
            })}
        </div>
    }
}
