//! Infrastructure wiring for the HTTP application.

use std::sync::Arc;

use catalog_infra::{InMemoryItemRepository, ItemRepository};

/// Service container shared across handlers.
///
/// Handlers depend only on the abstract repository contract held here, so a
/// test double or any real store implementation can be swapped in.
pub struct AppServices {
    items: Arc<dyn ItemRepository>,
}

impl AppServices {
    pub fn new(items: Arc<dyn ItemRepository>) -> Self {
        Self { items }
    }

    /// Repository handle used by the item routes.
    pub fn items(&self) -> &dyn ItemRepository {
        self.items.as_ref()
    }
}

/// Build the production service set (in-memory store for now).
pub fn build_services() -> AppServices {
    AppServices::new(Arc::new(InMemoryItemRepository::new()))
}
