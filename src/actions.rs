//! User-Intent Orchestration
//!
//! One async function per user intent, run on the UI event loop via
//! `spawn_local`. Every function passes the busy gate, performs its API
//! round trips, applies the matching store transition and logs failures to
//! the console. The busy flag is the only overlap protection: while an
//! operation is in flight no other one can start.

use crate::api::{HttpListApi, ListApi, NetworkError};
use crate::defaults;
use crate::store::{
    store_item_added, store_item_removed, store_item_toggled, store_list_loaded, store_op_failed,
    AppStateStoreFields, AppStore, Operation,
};
use leptos::prelude::*;

/// Full reload of the collection from the server.
pub async fn load_list(store: AppStore) {
    if !begin(store) {
        return;
    }
    match HttpListApi.fetch_list().await {
        Ok(items) => store_list_loaded(&store, items),
        Err(err) => fail(&store, Operation::Load, err),
    }
    finish(store);
}

/// Submit the current draft. Blank names are dropped before any request.
pub async fn add_item(store: AppStore) {
    let draft = store.draft().get_untracked();
    if draft.name.trim().is_empty() {
        return;
    }
    if !begin(store) {
        return;
    }
    match HttpListApi.add_item(&draft).await {
        Ok(item) => store_item_added(&store, item),
        Err(err) => fail(&store, Operation::Add, err),
    }
    finish(store);
}

/// Ask the server to flip `completed`, then mirror the acknowledged flip.
pub async fn toggle_item(store: AppStore, id: u32) {
    if !begin(store) {
        return;
    }
    match HttpListApi.toggle_item(id).await {
        Ok(()) => store_item_toggled(&store, id),
        Err(err) => fail(&store, Operation::Toggle, err),
    }
    finish(store);
}

/// Ask the server to delete, then drop the acknowledged id locally.
pub async fn remove_item(store: AppStore, id: u32) {
    if !begin(store) {
        return;
    }
    match HttpListApi.remove_item(id).await {
        Ok(()) => store_item_removed(&store, id),
        Err(err) => fail(&store, Operation::Remove, err),
    }
    finish(store);
}

/// Seed the starter catalog, then resynchronize from the server. A partial
/// run keeps whatever was added and skips the reload.
pub async fn load_defaults(store: AppStore) {
    if !begin(store) {
        return;
    }
    let api = HttpListApi;
    match defaults::seed_defaults(&api).await {
        Ok(report) if report.fully_seeded() => match api.fetch_list().await {
            Ok(items) => store_list_loaded(&store, items),
            Err(err) => fail(&store, Operation::Defaults, err),
        },
        Ok(report) => {
            web_sys::console::error_1(
                &format!("[DEFAULTS] aborted after {} of {} adds", report.added(), report.outcomes.len()).into(),
            );
            store_op_failed(&store, Operation::Defaults);
        }
        Err(err) => fail(&store, Operation::Defaults, err),
    }
    finish(store);
}

fn begin(store: AppStore) -> bool {
    if store.busy().get_untracked() {
        return false;
    }
    *store.busy().write() = true;
    true
}

fn finish(store: AppStore) {
    *store.busy().write() = false;
}

fn fail(store: &AppStore, op: Operation, err: NetworkError) {
    web_sys::console::error_1(&format!("[API] {}: {}", op.message(), err).into());
    store_op_failed(store, op);
}
