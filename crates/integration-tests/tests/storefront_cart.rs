//! Integration tests for the cart and its running total.

#![allow(clippy::unwrap_used)]

use farmconnect_core::{ItemId, Price};
use farmconnect_integration_tests::{RecordingNotifier, log_in, merchant, storefront};
use farmconnect_storefront::{CatalogItem, Storefront, StorefrontConfig, StorefrontError};
use rust_decimal::Decimal;

// =============================================================================
// Totals
// =============================================================================

#[test]
fn test_empty_cart_total() {
    let store = storefront();
    assert_eq!(store.compute_total(), "0.0000");
}

#[test]
fn test_total_tracks_every_add() {
    let mut store = storefront();
    log_in(&mut store);

    let ids = [1, 2, 6, 2, 5, 4];
    let mut expected = Decimal::ZERO;
    for id in ids {
        store.add_item(ItemId::new(id)).unwrap();
        expected += store.catalog().get(ItemId::new(id)).unwrap().unit_price.amount;
        assert_eq!(store.compute_total(), format!("{expected:.4}"));
    }
    assert_eq!(store.state().cart().len(), ids.len());
}

#[test]
fn test_total_rounds_to_four_places() {
    let config = StorefrontConfig::new(merchant()).with_catalog(vec![
        CatalogItem::new(10, "Garlic", Price::ether(12_345, 7), "url"),
        CatalogItem::new(11, "Ginger", Price::ether(5, 5), "url"),
    ]);
    let mut store = Storefront::new(config, RecordingNotifier::default()).unwrap();
    store.add_item(ItemId::new(10)).unwrap();
    store.add_item(ItemId::new(11)).unwrap();
    // 0.0012345 + 0.00005 = 0.0012845
    assert_eq!(store.compute_total(), "0.0013");
}

// =============================================================================
// Catalog membership
// =============================================================================

#[test]
fn test_cart_only_takes_listed_items_at_listed_prices() {
    let mut store = storefront();
    let onion = store.catalog().get(ItemId::new(3)).unwrap().clone();
    store.add_to_cart(onion.clone()).unwrap();

    let cheaper_tomato = CatalogItem::new(1, "Tomato", Price::ether(5, 0), "url");
    assert!(matches!(
        store.add_to_cart(cheaper_tomato),
        Err(StorefrontError::UnknownItem(_))
    ));
    let unlisted = CatalogItem::new(99, "Saffron", Price::ether(1, 0), "url");
    assert!(matches!(
        store.add_to_cart(unlisted),
        Err(StorefrontError::UnknownItem(_))
    ));
    let negative = CatalogItem {
        unit_price: Price::ether(-1, 0),
        ..onion
    };
    assert!(store.add_to_cart(negative).is_err());

    assert_eq!(store.state().cart().len(), 1);
    assert_eq!(store.compute_total(), "0.0040");
    assert!(store.notifier().alerts().is_empty());
}

// =============================================================================
// Removal
// =============================================================================

#[test]
fn test_two_tomatoes_and_an_onion() {
    let mut store = storefront();
    log_in(&mut store);

    store.add_item(ItemId::new(1)).unwrap();
    store.add_item(ItemId::new(1)).unwrap();
    store.add_item(ItemId::new(3)).unwrap();
    assert_eq!(store.compute_total(), "0.0240");

    let remaining = store.remove_from_cart(ItemId::new(1));
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining.first().unwrap().name, "Onion");
    assert_eq!(store.compute_total(), "0.0040");
}

#[test]
fn test_remove_is_idempotent() {
    let mut store = storefront();
    store.add_item(ItemId::new(2)).unwrap();
    store.add_item(ItemId::new(4)).unwrap();

    let once = store.remove_from_cart(ItemId::new(2)).to_vec();
    let twice = store.remove_from_cart(ItemId::new(2)).to_vec();
    assert_eq!(once, twice);
    assert_eq!(store.compute_total(), "0.0050");
}

#[test]
fn test_remove_missing_id_is_noop() {
    let mut store = storefront();
    store.add_item(ItemId::new(5)).unwrap();

    let remaining = store.remove_from_cart(ItemId::new(6));
    assert_eq!(remaining.len(), 1);
    assert_eq!(store.compute_total(), "0.0070");
}

#[test]
fn test_unknown_item_leaves_cart_alone() {
    let mut store = storefront();
    store.add_item(ItemId::new(1)).unwrap();

    let err = store.add_item(ItemId::new(42)).unwrap_err();
    assert!(matches!(err, StorefrontError::UnknownItem(id) if id == ItemId::new(42)));
    assert_eq!(store.state().cart().len(), 1);
    assert!(store.notifier().alerts().is_empty());
}
