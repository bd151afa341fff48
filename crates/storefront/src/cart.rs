//! Client-side shopping cart.
//!
//! The cart is an ordered list of catalog items. There is no quantity
//! field: adding the same item twice stores two entries.

use rust_decimal::{Decimal, RoundingStrategy};

use farmconnect_core::ItemId;

use crate::catalog::CatalogItem;

/// Decimal places of the displayed and charged total.
pub const TOTAL_DECIMALS: u32 = 4;

/// Ordered, duplicate-permitting list of selected items.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    entries: Vec<CatalogItem>,
}

impl Cart {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Append an item. Always succeeds; repeats are kept as separate entries.
    pub fn add(&mut self, item: CatalogItem) {
        self.entries.push(item);
    }

    /// Remove every entry with the given id and return what is left.
    ///
    /// Removing an id that is not in the cart is a no-op.
    pub fn remove_all(&mut self, id: ItemId) -> &[CatalogItem] {
        self.entries.retain(|item| item.id != id);
        &self.entries
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Entries in the order they were added.
    #[must_use]
    pub fn entries(&self) -> &[CatalogItem] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sum of unit prices rounded to [`TOTAL_DECIMALS`] places.
    ///
    /// This is the amount both shown to the user and charged at checkout.
    #[must_use]
    pub fn total(&self) -> Decimal {
        let mut total = self
            .entries
            .iter()
            .map(|item| item.unit_price.amount)
            .sum::<Decimal>()
            .round_dp_with_strategy(TOTAL_DECIMALS, RoundingStrategy::MidpointAwayFromZero);
        total.rescale(TOTAL_DECIMALS);
        total
    }

    /// The total as a fixed four-decimal string, `"0.0000"` when empty.
    #[must_use]
    pub fn formatted_total(&self) -> String {
        self.total().to_string()
    }
}
