//! Error Banner Component

use leptos::prelude::*;

use crate::store::{use_app_store, AppStateStoreFields};

/// Inline banner for the latest failed operation. Stays up until the next
/// successful operation clears it; there is no dismiss control.
#[component]
pub fn ErrorBanner() -> impl IntoView {
    let store = use_app_store();

    view! {
        <Show when=move || store.error().read().is_some()>
            <div class="error-banner">
                {move || store.error().get().map(|op| op.message())}
            </div>
        </Show>
    }
}
