//! Shopping List Gateway
//!
//! Forwards the browser-facing /api routes verbatim to the backend
//! service. Upstream status and body pass through unchanged; transport
//! failures become an {"error": ...} body with the upstream status when
//! one is known, 500 otherwise. Each route accepts exactly the method the
//! backend accepts; anything else is answered with 405 by the router.

use std::net::SocketAddr;

use axum::extract::{Path, State};
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

#[derive(Clone)]
struct ProxyState {
    client: reqwest::Client,
    backend_url: String,
}

fn backend_url_from_env() -> String {
    std::env::var("BACKEND_URL")
        .unwrap_or_else(|_| "http://shopping-list-backend:8000".to_string())
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let addr: SocketAddr = std::env::var("PROXY_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
        .parse()
        .expect("PROXY_ADDR must be host:port");
    let state = ProxyState {
        client: reqwest::Client::new(),
        backend_url: backend_url_from_env(),
    };
    log::info!("forwarding /api requests on {addr} to {}", state.backend_url);

    axum::Server::bind(&addr)
        .serve(router(state).into_make_service())
        .await
        .expect("server error");
}

fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/api/list", get(list))
        .route("/api/add", post(add))
        .route("/api/toggle/:id", put(toggle))
        .route("/api/remove/:id", delete(remove))
        .route("/api/defaults", get(defaults))
        .with_state(state)
}

async fn list(State(state): State<ProxyState>) -> Response {
    let url = format!("{}/api/list", state.backend_url);
    forward(state.client.get(url)).await
}

async fn add(State(state): State<ProxyState>, Json(body): Json<Value>) -> Response {
    let url = format!("{}/api/add", state.backend_url);
    forward(state.client.post(url).json(&body)).await
}

async fn toggle(State(state): State<ProxyState>, Path(id): Path<u32>) -> Response {
    let url = format!("{}/api/toggle/{id}", state.backend_url);
    forward(state.client.put(url)).await
}

async fn remove(State(state): State<ProxyState>, Path(id): Path<u32>) -> Response {
    let url = format!("{}/api/remove/{id}", state.backend_url);
    forward(state.client.delete(url)).await
}

async fn defaults(State(state): State<ProxyState>) -> Response {
    let url = format!("{}/api/defaults", state.backend_url);
    forward(state.client.get(url)).await
}

/// Issue the prepared upstream request and mirror its status and body.
async fn forward(req: reqwest::RequestBuilder) -> Response {
    match req.send().await {
        Ok(upstream) => {
            let status = StatusCode::from_u16(upstream.status().as_u16())
                .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
            let content_type = upstream
                .headers()
                .get(header::CONTENT_TYPE)
                .and_then(|value| value.to_str().ok())
                .unwrap_or("application/json")
                .to_string();
            match upstream.bytes().await {
                Ok(body) => (status, [(header::CONTENT_TYPE, content_type)], body).into_response(),
                Err(err) => error_response(&err),
            }
        }
        Err(err) => error_response(&err),
    }
}

fn error_response(err: &reqwest::Error) -> Response {
    let status = err
        .status()
        .map(|upstream| {
            StatusCode::from_u16(upstream.as_u16()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
        })
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    log::error!("upstream request failed: {err}");
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use axum::http::Request;
    use tower::ServiceExt;

    fn unreachable_state() -> ProxyState {
        ProxyState {
            client: reqwest::Client::new(),
            // Port 1 refuses connections immediately.
            backend_url: "http://127.0.0.1:1".to_string(),
        }
    }

    #[test]
    fn test_backend_url_default() {
        std::env::remove_var("BACKEND_URL");
        assert_eq!(backend_url_from_env(), "http://shopping-list-backend:8000");
    }

    #[tokio::test]
    async fn test_wrong_method_is_405() {
        let app = router(unreachable_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/add")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::METHOD_NOT_ALLOWED);
    }

    #[tokio::test]
    async fn test_unreachable_backend_becomes_error_json() {
        let app = router(unreachable_state());

        let response = app
            .oneshot(
                Request::builder()
                    .method("GET")
                    .uri("/api/list")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        let body = hyper::body::to_bytes(response.into_body()).await.unwrap();
        let json: Value = serde_json::from_slice(&body).unwrap();
        assert!(json.get("error").is_some());
    }
}
