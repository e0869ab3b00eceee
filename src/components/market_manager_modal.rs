//! Modal Variant
//!
//! Table-first rendition; the form lives in a modal dialog that carries a
//! create/edit mode flag (closed -> open(create|edit) -> closed).

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::api::{self, ItemPayload};
use crate::context::AppContext;
use crate::form::ItemForm;
use crate::models::MarketItem;
use crate::store::{store_set_message, use_app_store};
use crate::components::{CategorySelect, FetchByIdPanel, ItemTable, UnitSelect};

/// Which mode the modal was opened in
#[derive(Clone, Copy, PartialEq)]
enum ModalMode {
    Create,
    Edit,
}

/// Modal rendition: Add Item opens the dialog in create mode, a row's Edit
/// button opens it pre-filled in edit mode.
#[component]
pub fn MarketManagerModal() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let (modal_mode, set_modal_mode) = signal::<Option<ModalMode>>(None);
    let (form, set_form) = signal(ItemForm::default());
    let (loading, set_loading) = signal(false);

    let open_create = move |_| {
        set_form.set(ItemForm::default());
        set_modal_mode.set(Some(ModalMode::Create));
    };

    let close_modal = move || {
        set_modal_mode.set(None);
        set_form.set(ItemForm::default());
    };

    let on_edit = Callback::new(move |item: MarketItem| {
        set_form.set(ItemForm::from_item(&item));
        store_set_message(&store, format!("Editing item with ID {}", item.id));
        set_modal_mode.set(Some(ModalMode::Edit));
    });

    let submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        if loading.get() {
            return;
        }
        let mode = match modal_mode.get() {
            Some(mode) => mode,
            None => return,
        };
        let snapshot = form.get();
        if let Err(message) = snapshot.validate() {
            store_set_message(&store, message);
            return;
        }
        set_loading.set(true);
        spawn_local(async move {
            let payload = ItemPayload::from_form(&snapshot);
            let result = match mode {
                ModalMode::Create => api::add_item(&payload).await,
                ModalMode::Edit => api::update_item(&payload).await,
            };
            match result {
                Ok(()) => {
                    store_set_message(
                        &store,
                        match mode {
                            ModalMode::Create => "Item added successfully.",
                            ModalMode::Edit => "Item updated successfully.",
                        },
                    );
                    close_modal();
                    ctx.reload();
                }
                Err(e) => {
                    web_sys::console::error_1(
                        &format!("[Modal] Submit failed: {}", e).into(),
                    );
                    store_set_message(
                        &store,
                        match mode {
                            ModalMode::Create => "Error adding item.",
                            ModalMode::Edit => "Error updating item.",
                        },
                    );
                }
            }
            set_loading.set(false);
        });
    };

    view! {
        <div>
            <div class="btn-group">
                <button class="btn-blue" on:click=open_create>"Add Item"</button>
            </div>

            <FetchByIdPanel/>

            <ItemTable on_edit=on_edit/>

            {move || modal_mode.get().map(|mode| view! {
                <div class="modal-overlay">
                    <div class="modal">
                        <h3>{match mode {
                            ModalMode::Create => "Add Item",
                            ModalMode::Edit => "Edit Item",
                        }}</h3>
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
                                <button
                                    type="submit"
                                    class=match mode {
                                        ModalMode::Create => "btn-blue",
                                        ModalMode::Edit => "btn-green",
                                    }
                                    prop:disabled=move || loading.get()
                                >
                                    {match mode {
                                        ModalMode::Create => "Add Item",
                                        ModalMode::Edit => "Update Item",
                                    }}
                                </button>
                                <button
                                    type="button"
                                    class="btn-gray"
                                    on:click=move |_| close_modal()
                                >
                                    "Cancel"
                                </button>
                            </div>
                        </form>
                    </div>
                </div>
            })}
        </div>
    }
}
