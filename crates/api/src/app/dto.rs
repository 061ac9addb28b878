use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use catalog_core::ItemId;
use catalog_items::Item;

// -------------------------
// Request DTOs
// -------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
}

/// Full replace of the mutable fields; there is no partial merge.
#[derive(Debug, Clone, Deserialize)]
pub struct UpdateItemRequest {
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ListItemsQuery {
    /// Case-insensitive substring filter on the item name.
    pub name: Option<String>,
}

// -------------------------
// Response DTOs
// -------------------------

/// Read projection of an [`Item`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemDto {
    pub id: ItemId,
    pub name: String,
    pub description: Option<String>,
    pub price: u64,
    pub created_date: DateTime<Utc>,
}

impl ItemDto {
    pub fn from_item(item: &Item) -> Self {
        Self {
            id: item.id(),
            name: item.name().to_string(),
            description: item.description().map(str::to_string),
            price: item.price(),
            created_date: item.created_date(),
        }
    }
}
