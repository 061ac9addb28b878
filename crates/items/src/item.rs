use chrono::{DateTime, Utc};

use catalog_core::ItemId;

/// Catalog item entity.
///
/// `id` and `created_date` are assigned exactly once, at construction. The
/// fields are private and no mutator exists for them; the only way to change
/// an item is [`Item::updated`], which produces a replacement value carrying
/// the original identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    name: String,
    description: Option<String>,
    price: u64,
    created_date: DateTime<Utc>,
}

impl Item {
    /// Construct an item from explicit parts.
    ///
    /// Prefer this in tests, where a fixed id/timestamp keeps assertions
    /// deterministic. Production code goes through [`Item::create`].
    pub fn new(
        id: ItemId,
        name: impl Into<String>,
        description: Option<String>,
        price: u64,
        created_date: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description,
            price,
            created_date,
        }
    }

    /// Create a brand-new item: fresh identifier, current timestamp.
    pub fn create(name: impl Into<String>, description: Option<String>, price: u64) -> Self {
        Self::new(ItemId::new(), name, description, price, Utc::now())
    }

    /// Full replace of the mutable fields (name, description, price).
    ///
    /// Returns a new value preserving `id` and `created_date`. There is no
    /// partial merge; callers supply every mutable field.
    pub fn updated(&self, name: impl Into<String>, description: Option<String>, price: u64) -> Self {
        Self {
            id: self.id,
            name: name.into(),
            description,
            price,
            created_date: self.created_date,
        }
    }

    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn price(&self) -> u64 {
        self.price
    }

    pub fn created_date(&self) -> DateTime<Utc> {
        self.created_date
    }

    /// Case-insensitive substring match on the item name.
    pub fn name_contains(&self, needle: &str) -> bool {
        self.name.to_lowercase().contains(&needle.to_lowercase())
    }
}
