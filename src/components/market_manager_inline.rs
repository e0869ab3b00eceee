//! Inline Variant
//!
//! Form always visible above the table, with an explicit edit-mode toggle.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ItemPayload};
use crate::context::AppContext;
use crate::form::ItemForm;
use crate::models::MarketItem;
use crate::store::{store_set_message, use_app_store};
use crate::components::{CategorySelect, FetchByIdPanel, ItemTable, UnitSelect};

/// Inline rendition: the form sits above the table and flips between
/// add and edit mode in place.
#[component]
pub fn MarketManagerInline() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (form, set_form) = signal(ItemForm::default());
    let (edit_mode, set_edit_mode) = signal(false);
    let (loading, set_loading) = signal(false);

    let reset_form = move || {
        set_form.set(ItemForm::default());
        set_edit_mode.set(false);
    };

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let snapshot = form.get();
        if let Err(message) = snapshot.validate() {
            store_set_message(&store, message);
            return;
        }
        let editing = edit_mode.get();
        set_loading.set(true);
        spawn_local(async move {
            let payload = ItemPayload::from_form(&snapshot);
            let result = if editing {
                api::update_item(&payload).await
            } else {
                api::add_item(&payload).await
            };
            match result {
                Ok(()) => {
                    store_set_message(
                        &store,
                        if editing {
                            "Item updated successfully."
                        } else {
                            "Item added successfully."
                        },
                    );
                    reset_form();
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Inline] Submit failed: {}", e).into(),
                    );
                    store_set_message(
                        &store,
                        if editing {
                            "Error updating item."
                        } else {
                            "Error adding item."
                        },
                    );
                }
            }
            set_loading.set(false);
        });
    };

    let on_edit = Callback::new(move |item: MarketItem| {
        set_form.set(ItemForm::from_item(&item));
        set_edit_mode.set(true);
        store_set_message(&store, format!("Editing item with ID {}", item.id));
    });

    view! {
        <div>
            <h3>{move || if edit_mode.get() { "Edit Item" } else { "Add Item" }}</h3>
            <form on:submit=submit>
                <div class="form-grid">
                    <input
                        type="number"
                        name="id"
                        placeholder="ID"
                        prop:value=move || form.get().id
                        on:input=move |ev| set_form.update(|f| f.id = event_target_value(&ev))
                    />
                    <input
                        type="text"
                        name="name"
                        placeholder="Item Name (e.g. Tomato)"
                        prop:value=move || form.get().name
                        on:input=move |ev| set_form.update(|f| f.name = event_target_value(&ev))
                    />
                    <CategorySelect
                        value=Signal::derive(move || form.get().category)
                        on_change=move |v: String| set_form.update(|f| f.category = v)
                    />
                    <input
                        type="number"
                        name="price"
                        placeholder="Price"
                        prop:value=move || form.get().price
                        on:input=move |ev| set_form.update(|f| f.price = event_target_value(&ev))
                    />
                    <input
                        type="number"
                        name="quantity"
                        placeholder="Quantity"
                        prop:value=move || form.get().quantity
                        on:input=move |ev| set_form.update(|f| f.quantity = event_target_value(&ev))
                    />
                    <UnitSelect
                        value=Signal::derive(move || form.get().unit)
                        on_change=move |v: String| set_form.update(|f| f.unit = v)
                    />
                </div>

                <div class="btn-group">
                    {move || if edit_mode.get() {
                        view! {
                            <button
                                type="submit"
                                class="btn-green"
                                prop:disabled=move || loading.get()
                            >
                                "Update Item"
                            </button>
                            <button
                                type="button"
                                class="btn-gray"
                                on:click=move |_| reset_form()
                            >
                                "Cancel"
                            </button>
                        }.into_any()
                    } else {
                        view! {
                            <button
                                type="submit"
                                class="btn-blue"
                                prop:disabled=move || loading.get()
                            >
                                "Add Item"
                            </button>
                        }.into_any()
                    }}
                </div>
            </form>

            <FetchByIdPanel/>

            <ItemTable on_edit=on_edit/>
        </div>
    }
}
