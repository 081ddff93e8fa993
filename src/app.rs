//! Shopping List App
//!
//! Application shell: provides the store and focus tracker, loads the list
//! on mount and restores scroll focus after every collection change.

use std::rc::Rc;

use leptos::prelude::*;
use leptos::__reexports::send_wrapper::SendWrapper;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::actions;
use crate::components::{AddItemForm, ErrorBanner, ItemList};
use crate::context::FocusContext;
use crate::focus::{DomRowLocator, FocusTracker};
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::default());
    let focus = FocusContext(SendWrapper::new(Rc::new(FocusTracker::new(DomRowLocator))));

    // Provide context to all children
    provide_context(store);
    provide_context(focus.clone());

    // Load the list on mount
    Effect::new(move |_| {
        spawn_local(actions::load_list(store));
    });

    // Bring the last acted-on row back into view once the mutated (or
    // error-annotated) collection has been committed to the DOM. Effects
    // run after the DOM update and before the next paint, so the viewport
    // never shows an intermediate scroll position.
    let restore = focus.clone();
    Effect::new(move |_| {
        let _ = store.items().read();
        let _ = store.error().read();
        restore.0.restore();
    });

    let on_defaults = move |_| spawn_local(actions::load_defaults(store));

    view! {
        <div class="page">
            <header class="header">
                <h1>"🛒 Einkaufslisten-App"</h1>
                <p>"Einkaufsliste mit Standardkatalog"</p>
            </header>

            <ErrorBanner />

            <AddItemForm />

            <div class="actions-row">
                <button
                    class="defaults-btn"
                    prop:disabled=move || store.busy().get()
                    on:click=on_defaults
                >
                    "🛒 Standard laden"
                </button>
            </div>

            <ItemList />
        </div>
    }
}
