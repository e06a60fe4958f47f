use std::sync::Arc;
use tracing::info;

use crate::domain::Item;
use crate::errors::ServiceError;
use crate::repository::Repository;
use crate::storage::MemoryStore;

/// In-memory repository for `Item`.
#[derive(Clone)]
pub struct ItemRepository {
    store: Arc<MemoryStore<Item>>,
}

impl ItemRepository {
    pub fn new() -> Arc<Self> {
        Arc::new(Self { store: MemoryStore::new() })
    }

    pub async fn save(&self, item: Item) -> Item {
        self.store.save(item).await
    }

    pub async fn find_by_id(&self, id: u64) -> Option<Item> {
        self.store.find_by_id(id).await
    }

    pub async fn find_all(&self) -> Vec<Item> {
        self.store.find_all().await
    }

    pub async fn update(&self, id: u64, item: Item) -> Result<Item, ServiceError> {
        self.store.update(id, item).await
    }

    pub async fn clear_store(&self) {
        self.store.clear().await
    }

    /// Sample data so a fresh server has something to list.
    pub async fn seed_defaults(&self) -> Vec<Item> {
        let seeded = vec![
            self.save(Item::new("itemA", 10000, 10)).await,
            self.save(Item::new("itemB", 20000, 20)).await,
        ];
        info!(count = seeded.len(), "seeded item store");
        seeded
    }
}

#[async_trait::async_trait]
impl Repository<Item> for ItemRepository {
    async fn save(&self, record: Item) -> Item { self.save(record).await }
    async fn find_by_id(&self, id: u64) -> Option<Item> { self.find_by_id(id).await }
    async fn find_all(&self) -> Vec<Item> { self.find_all().await }
    async fn update(&self, id: u64, record: Item) -> Result<Item, ServiceError> { self.update(id, record).await }
    async fn clear_store(&self) { self.clear_store().await }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn item_repository_scenario() -> Result<(), anyhow::Error> {
        let repo = ItemRepository::new();

        let a = repo.save(Item::new("itemA", 10000, 10)).await;
        let b = repo.save(Item::new("itemB", 20000, 20)).await;
        assert_eq!(a.id, Some(1));
        assert_eq!(b.id, Some(2));

        // insertion order
        let all = repo.find_all().await;
        assert_eq!(all, vec![a.clone(), b.clone()]);

        let found = repo.find_by_id(1).await.expect("itemA present");
        assert_eq!(found, a);

        let renamed = repo.update(1, Item::new("itemA-renamed", 10000, 10)).await?;
        assert_eq!(renamed.id, Some(1));

        let found = repo.find_by_id(1).await.expect("itemA present");
        assert_eq!(found.item_name, "itemA-renamed");
        assert_eq!(found.price, Some(10000));
        assert_eq!(found.quantity, Some(10));
        assert_eq!(found.id, Some(1));

        // the other record is untouched
        assert_eq!(repo.find_by_id(2).await, Some(b));
        Ok(())
    }

    #[tokio::test]
    async fn update_changes_only_non_id_fields() -> Result<(), anyhow::Error> {
        let repo = ItemRepository::new();
        let saved = repo.save(Item::new("itemA", 10000, 10)).await;

        let changed = Item { id: None, item_name: "itemZ".into(), price: Some(1), quantity: None };
        repo.update(1, changed).await?;

        let found = repo.find_by_id(1).await.expect("present");
        assert_eq!(found.id, saved.id);
        assert_eq!(found.item_name, "itemZ");
        assert_eq!(found.price, Some(1));
        assert_eq!(found.quantity, None);
        Ok(())
    }

    #[tokio::test]
    async fn update_unknown_item_is_not_found() {
        let repo = ItemRepository::new();
        let err = repo.update(1, Item::new("ghost", 0, 0)).await.unwrap_err();
        assert!(matches!(err, ServiceError::NotFound { entity: "item", id: 1 }));
        assert!(repo.find_all().await.is_empty());
    }

    #[tokio::test]
    async fn no_validation_on_save() {
        let repo = ItemRepository::new();
        let saved = repo.save(Item::new("", -500, -1)).await;
        assert_eq!(repo.find_by_id(saved.id.unwrap()).await, Some(saved));
    }

    #[tokio::test]
    async fn seed_defaults_inserts_two_items() {
        let repo = ItemRepository::new();
        let seeded = repo.seed_defaults().await;
        let names: Vec<_> = seeded.iter().map(|i| i.item_name.as_str()).collect();
        assert_eq!(names, ["itemA", "itemB"]);
        assert_eq!(repo.find_all().await.len(), 2);
    }

    #[tokio::test]
    async fn cloned_repository_shares_one_store() {
        let repo = ItemRepository::new();
        let other = (*repo).clone();

        let saved = other.save(Item::new("itemA", 10000, 10)).await;
        assert_eq!(repo.find_by_id(1).await, Some(saved));
        assert_eq!(repo.save(Item::new("itemB", 20000, 20)).await.id, Some(2));
    }

    #[tokio::test]
    async fn usable_through_trait_object() {
        let repo: Arc<dyn Repository<Item>> = ItemRepository::new();
        let saved = repo.save(Item::new("itemA", 10000, 10)).await;
        assert_eq!(repo.find_by_id(saved.id.unwrap()).await, Some(saved));
        repo.clear_store().await;
        assert!(repo.find_all().await.is_empty());
    }
}
