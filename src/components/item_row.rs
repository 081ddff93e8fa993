//! Item Row Component

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::context::use_focus_tracker;
use crate::focus::row_dom_id;
use crate::models::Item;
use crate::store::{use_app_store, AppStateStoreFields};

/// One shopping-list row: toggle button, glyph, name, quantity line and a
/// remove button. Carries the DOM id the focus tracker resolves rows by.
#[component]
pub fn ItemRow(item: Item) -> impl IntoView {
    let store = use_app_store();
    let focus = use_focus_tracker();
    let id = item.id;
    let initial_completed = item.completed;

    // The row is keyed by id and lives across toggles, so `completed` is
    // read from the store, not from the one-time prop.
    let completed = move || {
        store
            .items()
            .read()
            .iter()
            .find(|i| i.id == id)
            .map(|i| i.completed)
            .unwrap_or(initial_completed)
    };

    let on_toggle = {
        let focus = focus.clone();
        move |_| {
            // Capture before the request: once acknowledged, the re-render
            // may move or drop this row.
            focus.0.capture(id);
            spawn_local(actions::toggle_item(store, id));
        }
    };
    let on_remove = {
        let focus = focus.clone();
        move |_| {
            focus.0.capture(id);
            spawn_local(actions::remove_item(store, id));
        }
    };

    view! {
        <div class="item-row" class:completed=completed id=row_dom_id(id)>
            <div class="item-main">
                <button
                    class=move || if completed() { "toggle-btn done" } else { "toggle-btn" }
                    prop:disabled=move || store.busy().get()
                    on:click=on_toggle
                >
                    "✓"
                </button>
                <span class="item-emoji">{item.emoji.clone()}</span>
                <div>
                    <p class="item-name">{item.name.clone()}</p>
                    <p class="item-meta">
                        {format!("Menge: {} • {}", item.quantity, item.category)}
                    </p>
                </div>
            </div>
            <button
                class="remove-btn"
                prop:disabled=move || store.busy().get()
                on:click=on_remove
            >
                "🗑"
            </button>
        </div>
    }
}
