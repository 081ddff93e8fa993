//! HTTP Surface
//!
//! CRUD endpoints consumed by the gateway. Domain errors map to statuses:
//! NotFound -> 404, InvalidInput -> 422, everything else -> 500, all with
//! an {"error": ...} body.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post, put};
use axum::{Json, Router};
use serde_json::{json, Value};

use crate::domain::{default_catalog, DomainError, NewItem, ShoppingItem};
use crate::repository::Repository;
use crate::AppState;

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        .route("/api/list", get(get_list))
        .route("/api/add", post(add_item))
        .route("/api/toggle/:id", put(toggle_item))
        .route("/api/remove/:id", delete(remove_item))
        .route("/api/defaults", get(get_defaults))
        .with_state(state)
}

/// Domain error carried out of a handler
#[derive(Debug)]
pub struct ApiError(pub DomainError);

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            DomainError::NotFound(_) => StatusCode::NOT_FOUND,
            DomainError::InvalidInput(_) => StatusCode::UNPROCESSABLE_ENTITY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(json!({ "error": self.0.to_string() }))).into_response()
    }
}

async fn root() -> Json<Value> {
    Json(json!({
        "message": "Shopping List API",
        "endpoints": {
            "get_list": "/api/list",
            "add_item": "/api/add",
            "toggle_item": "/api/toggle/{id}",
            "remove_item": "/api/remove/{id}",
            "defaults": "/api/defaults",
        }
    }))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Local::now().to_rfc3339(),
    }))
}

/// Get all shopping list items
async fn get_list(State(state): State<AppState>) -> Result<Json<Vec<ShoppingItem>>, ApiError> {
    Ok(Json(state.repo.list().await?))
}

/// Add a new item to the shopping list
async fn add_item(
    State(state): State<AppState>,
    Json(req): Json<NewItem>,
) -> Result<Json<ShoppingItem>, ApiError> {
    req.validate()?;
    let created = state.repo.create(&ShoppingItem::from_request(req)).await?;
    log::debug!("added item {} ({})", created.id, created.name);
    Ok(Json(created))
}

/// Toggle completion status of an item
async fn toggle_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<ShoppingItem>, ApiError> {
    let mut item = state
        .repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| DomainError::NotFound(format!("item {id}")))?;
    item.completed = !item.completed;
    Ok(Json(state.repo.update(&item).await?))
}

/// Remove an item from the shopping list
async fn remove_item(
    State(state): State<AppState>,
    Path(id): Path<u32>,
) -> Result<Json<Value>, ApiError> {
    state.repo.delete(id).await?;
    Ok(Json(json!({ "message": format!("Item {id} removed successfully") })))
}

/// Get the fixed starter catalog
async fn get_defaults() -> Json<Vec<NewItem>> {
    Json(default_catalog())
}
