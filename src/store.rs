//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::MarketItem;

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Last-fetched item list; fully replaced after every mutation
    pub items: Vec<MarketItem>,
    /// The single user-facing message (empty = no banner)
    pub message: String,
    /// Result of the last fetch-by-id, if any
    pub fetched_item: Option<MarketItem>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace the whole item cache with a freshly listed collection
pub fn store_replace_items(store: &AppStore, items: Vec<MarketItem>) {
    *store.items().write() = items;
}

/// Set the user-facing message
pub fn store_set_message(store: &AppStore, message: impl Into<String>) {
    store.message().set(message.into());
}

/// Clear the user-facing message
pub fn store_clear_message(store: &AppStore) {
    store.message().set(String::new());
}

/// Record the result of a fetch-by-id
pub fn store_set_fetched(store: &AppStore, item: MarketItem) {
    store.fetched_item().set(Some(item));
}

/// Drop any previously fetched item (e.g. after a not-found)
pub fn store_clear_fetched(store: &AppStore) {
    store.fetched_item().set(None);
}
