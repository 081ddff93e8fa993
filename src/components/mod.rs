//! UI Components
//!
//! Reusable Leptos components.

mod add_item_form;
mod error_banner;
mod item_list;
mod item_row;

pub use add_item_form::AddItemForm;
pub use error_banner::ErrorBanner;
pub use item_list::ItemList;
pub use item_row::ItemRow;
