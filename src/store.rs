//! Global Application State Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity. The collection
//! only ever changes through the transition helpers below, one per
//! acknowledged operation outcome; a failed operation never touches it.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::{Draft, Item};

/// Kind of list operation; keys the per-operation banner sentence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Load,
    Add,
    Remove,
    Toggle,
    Defaults,
}

impl Operation {
    /// Banner sentence shown when this operation fails.
    pub fn message(&self) -> &'static str {
        match self {
            Operation::Load => "Fehler beim Laden der Einkaufsliste",
            Operation::Add => "Fehler beim Hinzufügen des Artikels",
            Operation::Remove => "Fehler beim Entfernen des Artikels",
            Operation::Toggle => "Fehler beim Umschalten des Artikels",
            Operation::Defaults => "Fehler beim Laden der Standardartikel",
        }
    }
}

/// Global application state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct AppState {
    /// Items as last acknowledged by the server, in server order
    pub items: Vec<Item>,
    /// Add-form state, reset after a successful add
    pub draft: Draft,
    /// One operation in flight at a time; gates every trigger
    pub busy: bool,
    /// Latest failed operation; cleared by the next success of any kind
    pub error: Option<Operation>,
}

/// Type alias for the store
pub type AppStore = Store<AppState>;

/// Get the app store from context
pub fn use_app_store() -> AppStore {
    expect_context::<AppStore>()
}

// ========================
// Store Transition Helpers
// ========================

/// Replace the whole collection with the server's list response
pub fn store_list_loaded(store: &AppStore, items: Vec<Item>) {
    *store.items().write() = items;
    *store.error().write() = None;
}

/// Append the server-acknowledged item and reset the add form
pub fn store_item_added(store: &AppStore, item: Item) {
    store.items().write().push(item);
    *store.draft().write() = Draft::default();
    *store.error().write() = None;
}

/// Flip `completed` for the acknowledged id; position and all other fields
/// stay as they are
pub fn store_item_toggled(store: &AppStore, id: u32) {
    store.items().write().iter_mut()
        .find(|item| item.id == id)
        .map(|item| item.completed = !item.completed);
    *store.error().write() = None;
}

/// Drop the removed id, relative order of the rest preserved
pub fn store_item_removed(store: &AppStore, id: u32) {
    store.items().write().retain(|item| item.id != id);
    *store.error().write() = None;
}

/// Keep the collection as-is and raise the banner for `op`
pub fn store_op_failed(store: &AppStore, op: Operation) {
    *store.error().write() = Some(op);
}
