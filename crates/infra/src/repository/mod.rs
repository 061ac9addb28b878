//! Catalog item storage boundary.
//!
//! This module defines an infrastructure-facing abstraction for persisting
//! catalog items without making any storage assumptions.

pub mod in_memory;
pub mod r#trait;

pub use in_memory::InMemoryItemRepository;
pub use r#trait::{ItemRepository, StoreError, StoreResult};

#[cfg(any(test, feature = "testing"))]
pub use r#trait::MockItemRepository;
