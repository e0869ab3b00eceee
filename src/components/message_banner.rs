//! Message Banner Component
//!
//! Single user-facing status line; styled as error when the text says so.

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Banner for the current status message (hidden while empty)
#[component]
pub fn MessageBanner() -> impl IntoView {
    let store = use_app_store();
    let message = move || store.message().get();

    view! {
        <Show when=move || !message().is_empty()>
            <div class=move || {
                if message().to_lowercase().contains("error") {
                    "message-banner error"
                } else {
                    "message-banner success"
                }
            }>
                {message}
            </div>
        </Show>
    }
}
