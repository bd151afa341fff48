//! The fixed product catalog.
//!
//! Items are defined once at startup and never mutated. Cart entries are
//! copies of these items, so every entry always refers to a listed product.

use serde::{Deserialize, Serialize};

use farmconnect_core::{ItemId, Price};

/// A purchasable product.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogItem {
    /// Unique catalog id.
    pub id: ItemId,
    /// Display name.
    pub name: String,
    /// Price of one unit.
    pub unit_price: Price,
    /// Image URL or asset path shown on the product card.
    pub image_ref: String,
}

impl CatalogItem {
    /// Create a catalog item.
    #[must_use]
    pub fn new(id: i32, name: impl Into<String>, unit_price: Price, image_ref: impl Into<String>) -> Self {
        Self {
            id: ItemId::new(id),
            name: name.into(),
            unit_price,
            image_ref: image_ref.into(),
        }
    }
}

/// Read-only list of catalog items, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Wrap a list of items. Uniqueness of ids is checked by
    /// [`StorefrontConfig::validate`](crate::config::StorefrontConfig::validate).
    #[must_use]
    pub const fn new(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// Look up an item by id.
    #[must_use]
    pub fn get(&self, id: ItemId) -> Option<&CatalogItem> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Items in display order.
    #[must_use]
    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    /// Iterate over items in display order.
    pub fn iter(&self) -> impl Iterator<Item = &CatalogItem> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Default for Catalog {
    fn default() -> Self {
        Self::new(default_items())
    }
}

/// The vegetables FarmConnect sells, priced in ether.
#[must_use]
pub fn default_items() -> Vec<CatalogItem> {
    vec![
        CatalogItem::new(1, "Tomato", Price::ether(1, 2), "url"),
        CatalogItem::new(2, "Potato", Price::ether(2, 3), "url"),
        CatalogItem::new(3, "Onion", Price::ether(4, 3), "url"),
        CatalogItem::new(4, "Carrot", Price::ether(5, 3), "url"),
        CatalogItem::new(5, "Cabbage", Price::ether(7, 3), "url"),
        CatalogItem::new(6, "Capsicum", Price::ether(1, 1), "url"),
    ]
}
