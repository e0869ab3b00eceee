//! Item Table Component
//!
//! Renders the full item list with per-row edit/delete actions.
//! Delete re-lists on success; edit is handed back to the owning variant.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api;
use crate::context::AppContext;
use crate::models::MarketItem;
use crate::store::{store_set_message, use_app_store, AppStateStoreFields};
use crate::components::DeleteConfirmButton;

/// Column headers, in the same order as the form fields
const COLUMNS: &[&str] = &["id", "name", "category", "price", "quantity", "unit"];

/// Table of all items with Edit/Delete actions per row
#[component]
pub fn ItemTable(#[prop(into)] on_edit: Callback<MarketItem>) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    view! {
        <div>
            <h3>"All Items"</h3>
            {move || if store.items().with(|items| items.is_empty()) {
                view! { <p>"No items found."</p> }.into_any()
            } else {
                view! {
                    <div class="table-wrapper">
                        <table>
                            <thead>
                                <tr>
                                    {COLUMNS
                                        .iter()
                                        .map(|column| view! { <th>{*column}</th> })
                                        .collect_view()}
                                    <th>"Actions"</th>
                                </tr>
                            </thead>
                            <tbody>
                                <For
                                    each=move || store.items().get()
                                    key=|item| item.id
                                    children=move |item: MarketItem| {
                                        let id = item.id;
                                        let edit_item = item.clone();
                                        view! {
                                            <tr>
                                                <td>{item.id}</td>
                                                <td>{item.name.clone()}</td>
                                                <td>{item.category.clone()}</td>
                                                <td>{item.price}</td>
                                                <td>{item.quantity}</td>
                                                <td>{item.unit.clone()}</td>
                                                <td>
                                                    <div class="action-buttons">
                                                        <button
                                                            class="btn-green"
                                                            on:click=move |_| on_edit.run(edit_item.clone())
                                                        >
                                                            "Edit"
                                                        </button>
                                                        <DeleteConfirmButton
                                                            button_class="btn-red"
                                                            on_confirm=Callback::new(move |_| {
                                                                spawn_local(async move {
                                                                    match api::delete_item(id).await {
                                                                        Ok(confirmation) => {
                                                                            store_set_message(&store, confirmation);
                                                                            ctx.reload();
                                                                        }
                                                                        Err(e) => {
                                                                            web_sys::console::error_1(
                                                                                &format!("[ItemTable] Delete {} failed: {}", id, e).into(),
                                                                            );
                                                                            store_set_message(&store, "Error deleting item.");
                                                                        }
                                                                    }
                                                                });
                                                            })
                                                        />
                                                    </div>
                                                </td>
                                            </tr>
                                        }
                                    }
                                />
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}
            <p class="item-count">
                {move || format!("{} items", store.items().with(|items| items.len()))}
            </p>
        </div>
    }
}
