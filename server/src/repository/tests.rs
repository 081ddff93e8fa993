//! Repository Integration Tests
//!
//! CRUD against the JSON file store on a temporary directory.

#[cfg(test)]
mod tests {
    use crate::domain::{Category, NewItem, ShoppingItem};
    use crate::repository::{FileRepository, Repository};
    use std::path::Path;

    fn draft(name: &str) -> ShoppingItem {
        ShoppingItem::from_request(NewItem {
            name: name.to_string(),
            quantity: 1,
            category: Category::General,
            emoji: "🛒".to_string(),
        })
    }

    async fn open_store(dir: &Path) -> FileRepository {
        FileRepository::open(dir.join("shopping_list.json"))
            .await
            .expect("failed to open store")
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        let first = repo.create(&draft("Milk")).await.expect("create failed");
        let second = repo.create(&draft("Bread")).await.expect("create failed");

        assert_eq!(first.id, 1);
        assert_eq!(second.id, 2);
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        let created = repo.create(&draft("Eggs")).await.unwrap();

        let found = repo.find_by_id(created.id).await.expect("find failed");
        assert_eq!(found.map(|item| item.name), Some("Eggs".to_string()));
        assert_eq!(repo.find_by_id(999).await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        repo.create(&draft("Milk")).await.unwrap();
        repo.create(&draft("Bread")).await.unwrap();
        repo.create(&draft("Eggs")).await.unwrap();

        let names: Vec<String> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|item| item.name)
            .collect();
        assert_eq!(names, vec!["Milk", "Bread", "Eggs"]);
    }

    #[tokio::test]
    async fn test_update_flips_completed() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        let mut created = repo.create(&draft("Milk")).await.unwrap();
        created.completed = true;

        let updated = repo.update(&created).await.expect("update failed");
        assert!(updated.completed);
        assert!(repo.find_by_id(created.id).await.unwrap().unwrap().completed);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        let mut ghost = draft("Ghost");
        ghost.id = 42;

        assert!(repo.update(&ghost).await.is_err());
    }

    #[tokio::test]
    async fn test_delete_removes_item() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        let created = repo.create(&draft("Milk")).await.unwrap();
        repo.delete(created.id).await.expect("delete failed");

        assert_eq!(repo.find_by_id(created.id).await.unwrap(), None);
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        assert!(repo.delete(7).await.is_err());
    }

    #[tokio::test]
    async fn test_ids_stay_unique_after_remove_and_add() {
        let dir = tempfile::tempdir().unwrap();
        let repo = open_store(dir.path()).await;

        repo.create(&draft("Milk")).await.unwrap();
        let bread = repo.create(&draft("Bread")).await.unwrap();
        repo.delete(1).await.unwrap();

        let eggs = repo.create(&draft("Eggs")).await.unwrap();
        assert_ne!(eggs.id, bread.id);

        let ids: Vec<u32> = repo.list().await.unwrap().iter().map(|i| i.id).collect();
        let mut deduped = ids.clone();
        deduped.dedup();
        assert_eq!(ids, deduped);
    }

    #[tokio::test]
    async fn test_reopen_restores_state() {
        let dir = tempfile::tempdir().unwrap();
        {
            let repo = open_store(dir.path()).await;
            let mut milk = repo.create(&draft("Milk")).await.unwrap();
            milk.completed = true;
            repo.update(&milk).await.unwrap();
        }

        let reopened = open_store(dir.path()).await;
        let items = reopened.list().await.unwrap();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].name, "Milk");
        assert!(items[0].completed);
    }

    #[tokio::test]
    async fn test_corrupt_file_starts_empty() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("shopping_list.json");
        tokio::fs::write(&path, b"not json at all").await.unwrap();

        let repo = FileRepository::open(path).await.expect("open failed");
        assert!(repo.list().await.unwrap().is_empty());
    }
}
