//! UI Components
//!
//! Reusable Leptos components.

mod category_select;
mod delete_confirm_button;
mod fetch_by_id;
mod item_table;
mod market_manager_inline;
mod market_manager_modal;
mod message_banner;
mod unit_select;

pub use category_select::CategorySelect;
pub use delete_confirm_button::DeleteConfirmButton;
pub use fetch_by_id::FetchByIdPanel;
pub use item_table::ItemTable;
pub use market_manager_inline::MarketManagerInline;
pub use market_manager_modal::MarketManagerModal;
pub use message_banner::MessageBanner;
pub use unit_select::UnitSelect;
