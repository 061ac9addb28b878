//! Infrastructure layer: storage adapters behind the repository boundary.

pub mod repository;

pub use repository::{InMemoryItemRepository, ItemRepository, StoreError, StoreResult};

#[cfg(any(test, feature = "testing"))]
pub use repository::MockItemRepository;
