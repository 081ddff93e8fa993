//! File-backed Item Repository
//!
//! Keeps the whole collection in memory and rewrites it as pretty-printed
//! JSON after every mutation. A missing file is an empty list; an
//! unreadable one is logged and treated as empty.

use std::path::PathBuf;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::traits::Repository;
use crate::domain::{DomainError, DomainResult, Entity, ShoppingItem};

pub struct FileRepository {
    path: PathBuf,
    items: Mutex<Vec<ShoppingItem>>,
}

impl FileRepository {
    /// Open the store at `path`, loading whatever is already there.
    pub async fn open(path: PathBuf) -> DomainResult<Self> {
        if let Some(dir) = path.parent() {
            tokio::fs::create_dir_all(dir)
                .await
                .map_err(|e| DomainError::Internal(e.to_string()))?;
        }
        let items = match tokio::fs::read(&path).await {
            Ok(bytes) => match serde_json::from_slice(&bytes) {
                Ok(items) => items,
                Err(e) => {
                    log::warn!("discarding unreadable item store {}: {}", path.display(), e);
                    Vec::new()
                }
            },
            Err(_) => Vec::new(),
        };
        Ok(Self {
            path,
            items: Mutex::new(items),
        })
    }

    async fn persist(&self, items: &[ShoppingItem]) -> DomainResult<()> {
        let json = serde_json::to_vec_pretty(items)
            .map_err(|e| DomainError::Internal(e.to_string()))?;
        tokio::fs::write(&self.path, json)
            .await
            .map_err(|e| DomainError::Internal(e.to_string()))
    }

    /// One past the highest stored id, so ids stay unique across removals.
    fn next_id(items: &[ShoppingItem]) -> u32 {
        items.iter().map(|item| item.id).max().unwrap_or(0) + 1
    }
}

#[async_trait]
impl Repository<ShoppingItem> for FileRepository {
    async fn create(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let mut items = self.items.lock().await;
        let mut stored = entity.clone();
        stored.id = Self::next_id(&items);
        items.push(stored.clone());
        self.persist(&items).await?;
        Ok(stored)
    }

    async fn find_by_id(&self, id: u32) -> DomainResult<Option<ShoppingItem>> {
        let items = self.items.lock().await;
        Ok(items.iter().find(|item| item.id == id).cloned())
    }

    async fn list(&self) -> DomainResult<Vec<ShoppingItem>> {
        let items = self.items.lock().await;
        Ok(items.clone())
    }

    async fn update(&self, entity: &ShoppingItem) -> DomainResult<ShoppingItem> {
        let mut items = self.items.lock().await;
        let slot = items
            .iter_mut()
            .find(|item| item.id == entity.id())
            .ok_or_else(|| DomainError::NotFound(format!("item {}", entity.id())))?;
        *slot = entity.clone();
        let updated = slot.clone();
        self.persist(&items).await?;
        Ok(updated)
    }

    async fn delete(&self, id: u32) -> DomainResult<()> {
        let mut items = self.items.lock().await;
        let before = items.len();
        items.retain(|item| item.id != id);
        if items.len() == before {
            return Err(DomainError::NotFound(format!("item {id}")));
        }
        self.persist(&items).await
    }
}
