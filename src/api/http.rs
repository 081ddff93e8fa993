//! Fetch Plumbing
//!
//! Same-origin HTTP via window.fetch, responses decoded with
//! serde-wasm-bindgen.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, RequestInit, Response};

use super::{ListApi, NetworkError};
use crate::models::{Draft, Item};

/// HTTP implementation of [`ListApi`] against the /api routes.
#[derive(Clone, Copy, Default)]
pub struct HttpListApi;

impl ListApi for HttpListApi {
    async fn fetch_list(&self) -> Result<Vec<Item>, NetworkError> {
        let resp = request("GET", "/api/list", None).await?;
        decode_json(resp).await
    }

    async fn add_item(&self, draft: &Draft) -> Result<Item, NetworkError> {
        let body = serde_json::to_string(draft).map_err(|e| NetworkError(e.to_string()))?;
        let resp = request("POST", "/api/add", Some(body)).await?;
        decode_json(resp).await
    }

    async fn toggle_item(&self, id: u32) -> Result<(), NetworkError> {
        request("PUT", &format!("/api/toggle/{id}"), None).await?;
        Ok(())
    }

    async fn remove_item(&self, id: u32) -> Result<(), NetworkError> {
        request("DELETE", &format!("/api/remove/{id}"), None).await?;
        Ok(())
    }

    async fn fetch_defaults(&self) -> Result<Vec<Draft>, NetworkError> {
        let resp = request("GET", "/api/defaults", None).await?;
        decode_json(resp).await
    }
}

fn js_error(err: JsValue) -> NetworkError {
    NetworkError(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

async fn request(method: &str, url: &str, body: Option<String>) -> Result<Response, NetworkError> {
    let init = RequestInit::new();
    init.set_method(method);
    if let Some(json) = body {
        let headers = Headers::new().map_err(js_error)?;
        headers
            .append("Content-Type", "application/json")
            .map_err(js_error)?;
        init.set_headers(headers.as_ref());
        init.set_body(&JsValue::from_str(&json));
    }

    let window = web_sys::window().ok_or_else(|| NetworkError("no window".into()))?;
    let resp = JsFuture::from(window.fetch_with_str_and_init(url, &init))
        .await
        .map_err(js_error)?;
    let resp: Response = resp.dyn_into().map_err(js_error)?;

    // Any non-2xx answer counts as a failed operation, same as a transport
    // error; the body is not inspected.
    if !resp.ok() {
        return Err(NetworkError(format!("{method} {url}: HTTP {}", resp.status())));
    }
    Ok(resp)
}

async fn decode_json<T: serde::de::DeserializeOwned>(resp: Response) -> Result<T, NetworkError> {
    let promise = resp.json().map_err(js_error)?;
    let value = JsFuture::from(promise).await.map_err(js_error)?;
    serde_wasm_bindgen::from_value(value).map_err(|e| NetworkError(e.to_string()))
}
