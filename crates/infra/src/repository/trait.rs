use async_trait::async_trait;
use thiserror::Error;

use catalog_core::ItemId;
use catalog_items::Item;

/// Result type for repository operations.
pub type StoreResult<T> = Result<T, StoreError>;

/// Storage operation error.
///
/// These are **infrastructure failures** (backend unavailable, corrupted
/// state). Absence of a record is not an error: reads return `Ok(None)`.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage backend failure: {0}")]
    Backend(String),
}

/// Storage abstraction for catalog items, keyed by [`ItemId`].
///
/// The HTTP layer depends only on this contract, so any real store (or a test
/// double) can be swapped in behind it. Single-record operations are assumed
/// atomic at the storage layer; no ordering or transactional guarantees
/// beyond that.
#[cfg_attr(any(test, feature = "testing"), mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Look up a single item by id. Absent ids yield `Ok(None)`.
    async fn get_item(&self, id: ItemId) -> StoreResult<Option<Item>>;

    /// Enumerate all items, preserving insertion order.
    async fn get_items(&self) -> StoreResult<Vec<Item>>;

    /// Persist a newly created item.
    async fn create_item(&self, item: Item) -> StoreResult<()>;

    /// Overwrite the stored item carrying the same id.
    async fn update_item(&self, item: Item) -> StoreResult<()>;

    /// Remove the item with the given id.
    async fn delete_item(&self, id: ItemId) -> StoreResult<()>;
}
