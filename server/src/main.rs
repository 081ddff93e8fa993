//! Shopping List Backend
//!
//! Layered architecture:
//! - domain: entities and business rules
//! - repository: data access behind a trait, JSON file storage
//! - routes: axum handlers exposing the CRUD surface

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

mod domain;
mod repository;
mod routes;

use repository::FileRepository;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub repo: Arc<FileRepository>,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    let storage = std::env::var("STORAGE_PATH")
        .unwrap_or_else(|_| "/app/data/shopping_list.json".to_string());
    let addr: SocketAddr = std::env::var("SERVER_ADDR")
        .unwrap_or_else(|_| "0.0.0.0:8000".to_string())
        .parse()
        .expect("SERVER_ADDR must be host:port");

    let repo = FileRepository::open(PathBuf::from(&storage))
        .await
        .expect("failed to open item storage");
    log::info!("serving shopping list API on {addr}, storage at {storage}");

    let app = routes::router(AppState { repo: Arc::new(repo) });

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}
