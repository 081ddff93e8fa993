//! List API Bindings
//!
//! Frontend bindings to the list service, reached through the gateway on
//! the same-origin /api routes.

mod http;

pub use http::HttpListApi;

use crate::models::{Draft, Item};

/// Single failure kind for all list operations. Transport failures, non-2xx
/// responses and undecodable payloads all collapse into it; the UI only
/// distinguishes which operation failed, never why.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("{0}")]
pub struct NetworkError(pub String);

/// Operations against the list service.
///
/// [`HttpListApi`] implements this over fetch; tests substitute scripted
/// doubles. No retries, no caching.
#[allow(async_fn_in_trait)]
pub trait ListApi {
    /// Retrieve the full current collection, in server order.
    async fn fetch_list(&self) -> Result<Vec<Item>, NetworkError>;

    /// Submit a draft; returns the server-acknowledged item with its
    /// assigned id. Blank names are never submitted (caller-side check).
    async fn add_item(&self, draft: &Draft) -> Result<Item, NetworkError>;

    /// Ask the server to flip `completed` for `id`. No request body.
    async fn toggle_item(&self, id: u32) -> Result<(), NetworkError>;

    /// Ask the server to delete the item with `id`.
    async fn remove_item(&self, id: u32) -> Result<(), NetworkError>;

    /// Retrieve the fixed catalog of starter drafts.
    async fn fetch_defaults(&self) -> Result<Vec<Draft>, NetworkError>;
}
