use std::sync::RwLock;

use async_trait::async_trait;

use catalog_core::ItemId;
use catalog_items::Item;

use super::r#trait::{ItemRepository, StoreError, StoreResult};

/// In-memory item repository.
///
/// Intended for tests/dev. Keeps items in insertion order; lookups are
/// linear scans, which is fine at this scale.
#[derive(Debug, Default)]
pub struct InMemoryItemRepository {
    items: RwLock<Vec<Item>>,
}

impl InMemoryItemRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl ItemRepository for InMemoryItemRepository {
    async fn get_item(&self, id: ItemId) -> StoreResult<Option<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(items.iter().find(|i| i.id() == id).cloned())
    }

    async fn get_items(&self) -> StoreResult<Vec<Item>> {
        let items = self
            .items
            .read()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        Ok(items.clone())
    }

    async fn create_item(&self, item: Item) -> StoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        items.push(item);
        Ok(())
    }

    async fn update_item(&self, item: Item) -> StoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        // Overwrite in place so enumeration order stays stable.
        if let Some(slot) = items.iter_mut().find(|i| i.id() == item.id()) {
            *slot = item;
        }
        Ok(())
    }

    async fn delete_item(&self, id: ItemId) -> StoreResult<()> {
        let mut items = self
            .items
            .write()
            .map_err(|_| StoreError::Backend("lock poisoned".to_string()))?;

        items.retain(|i| i.id() != id);
        Ok(())
    }
}
