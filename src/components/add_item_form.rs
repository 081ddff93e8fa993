//! Add Item Form Component
//!
//! Form for drafting new items: name, quantity, category and emoji.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::actions;
use crate::models::{CATEGORY_OPTIONS, EMOJI_OPTIONS};
use crate::store::{use_app_store, AppStateStoreFields};

/// Form for drafting and submitting a new item
#[component]
pub fn AddItemForm() -> impl IntoView {
    let store = use_app_store();

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        spawn_local(actions::add_item(store));
    };

    let name_blank = move || store.draft().read().name.trim().is_empty();

    view! {
        <form class="add-item-form" on:submit=on_submit>
            <h2>"Neuen Artikel hinzufügen"</h2>
            <div class="form-grid">
                <label>
                    "Artikelname"
                    <input
                        type="text"
                        placeholder="Artikelname eingeben"
                        prop:value=move || store.draft().read().name.clone()
                        on:input=move |ev| store.draft().write().name = event_target_value(&ev)
                    />
                </label>
                <label>
                    "Menge"
                    <input
                        type="number"
                        min="1"
                        prop:value=move || store.draft().read().quantity.to_string()
                        on:input=move |ev| {
                            store.draft().write().quantity =
                                event_target_value(&ev).parse().unwrap_or(1).max(1);
                        }
                    />
                </label>
                <label>
                    "Kategorie"
                    <select on:change=move |ev| store.draft().write().category = event_target_value(&ev)>
                        {CATEGORY_OPTIONS.iter().map(|(value, label)| view! {
                            <option
                                value=*value
                                selected=move || store.draft().read().category == *value
                            >
                                {*label}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
                <label>
                    "Emoji"
                    <select on:change=move |ev| store.draft().write().emoji = event_target_value(&ev)>
                        {EMOJI_OPTIONS.iter().map(|emoji| view! {
                            <option
                                value=*emoji
                                selected=move || store.draft().read().emoji == *emoji
                            >
                                {*emoji}
                            </option>
                        }).collect_view()}
                    </select>
                </label>
            </div>
            <button
                type="submit"
                class="add-btn"
                prop:disabled=move || store.busy().get() || name_blank()
            >
                "Artikel hinzufügen"
            </button>
        </form>
    }
}
