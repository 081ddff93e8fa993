//! Shopping List Component
//!
//! Renders the collection in server order with an empty-state placeholder.

use leptos::prelude::*;

use crate::components::ItemRow;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn ItemList() -> impl IntoView {
    let store = use_app_store();

    let is_empty = move || store.items().read().is_empty();

    view! {
        <div class="list-panel">
            <h2>"Einkaufsliste"</h2>
            <Show when=move || is_empty() && !store.busy().get()>
                <div class="empty-state">
                    <p>"Ihre Einkaufsliste ist leer. Fügen Sie einige Artikel hinzu, um zu beginnen!"</p>
                </div>
            </Show>
            <div class="item-rows">
                <For
                    each=move || store.items().get()
                    // Key by id only: a toggle must update the existing row
                    // in place, so the element captured by the focus
                    // tracker stays on the page.
                    key=|item| item.id
                    children=move |item| view! { <ItemRow item=item /> }
                />
            </div>
            <p class="item-count">
                {move || format!("{} Artikel", store.items().read().len())}
            </p>
        </div>
    }
}
