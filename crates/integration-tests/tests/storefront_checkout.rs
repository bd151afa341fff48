//! Integration tests for checkout.
//!
//! Every test pays from a [`ScriptedWallet`], which records the transfers it
//! is asked to sign.

#![allow(clippy::unwrap_used)]

use std::rc::Rc;

use farmconnect_core::{ItemId, TxHash, Wei};
use farmconnect_integration_tests::{
    RecordingNotifier, ScriptedWallet, address, log_in, merchant, storefront, storefront_with,
};
use farmconnect_storefront::{Alert, ProviderError, Storefront, StorefrontError};
use rust_decimal::Decimal;

/// Logged in, wallet `0xaaaa...` connected, two tomatoes and an onion in the cart.
async fn ready_to_pay(wallet: &Rc<ScriptedWallet>) -> Storefront<RecordingNotifier> {
    let mut store = storefront_with(wallet);
    log_in(&mut store);
    store.connect_wallet().await.unwrap();
    for id in [1, 1, 3] {
        store.add_item(ItemId::new(id)).unwrap();
    }
    store
}

// =============================================================================
// Preconditions
// =============================================================================

#[tokio::test]
async fn test_checkout_without_wallet_keeps_cart() {
    let mut store = storefront();
    log_in(&mut store);
    store.add_item(ItemId::new(6)).unwrap();

    let err = store.checkout().await.unwrap_err();
    assert!(matches!(err, StorefrontError::WalletNotConnected));
    assert_eq!(store.notifier().alerts(), [Alert::ConnectWallet]);
    assert_eq!(store.state().cart().len(), 1);
    assert_eq!(store.compute_total(), "0.1000");
}

#[tokio::test]
async fn test_checkout_without_wallet_or_items_asks_for_wallet() {
    let mut store = storefront();
    log_in(&mut store);

    let err = store.checkout().await.unwrap_err();
    assert!(matches!(err, StorefrontError::WalletNotConnected));
    assert_eq!(store.notifier().alerts(), [Alert::ConnectWallet]);
}

#[tokio::test]
async fn test_checkout_empty_cart_sends_nothing() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    let mut store = storefront_with(&wallet);
    log_in(&mut store);
    store.connect_wallet().await.unwrap();

    let err = store.checkout().await.unwrap_err();
    assert!(matches!(err, StorefrontError::EmptyCart));
    assert_eq!(store.notifier().alerts(), [Alert::EmptyCart]);
    assert!(wallet.sent().is_empty());
}

// =============================================================================
// Payment
// =============================================================================

#[tokio::test]
async fn test_checkout_pays_merchant_the_displayed_total() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    let mut store = ready_to_pay(&wallet).await;
    assert_eq!(store.compute_total(), "0.0240");

    let receipt = store.checkout().await.unwrap();

    let sent = wallet.sent();
    assert_eq!(sent.len(), 1);
    let tx = sent.first().unwrap();
    assert_eq!(tx.from, address('a'));
    assert_eq!(tx.to, merchant());
    assert_eq!(tx.value, Wei::new(24_000_000_000_000_000));
    assert_eq!(tx.gas, 21_000);

    let json = serde_json::to_value(tx).unwrap();
    assert_eq!(json["value"], "0x5543df729c0000");
    assert_eq!(json["gas"], "0x5208");

    assert_eq!(receipt.amount, Decimal::new(240, 4));
    assert_eq!(receipt.value, tx.value);
    assert_eq!(receipt.items, 3);
}

#[tokio::test]
async fn test_successful_checkout_empties_cart_and_keeps_wallet() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    let mut store = ready_to_pay(&wallet).await;

    let receipt = store.checkout().await.unwrap();
    assert_eq!(receipt.tx_hash, TxHash::new(ScriptedWallet::DEFAULT_HASH));
    assert!(store.state().cart().is_empty());
    assert_eq!(store.compute_total(), "0.0000");
    assert_eq!(store.state().wallet().unwrap().address, address('a'));

    let alert = store.notifier().last().unwrap();
    assert!(alert.is_success());
    assert_eq!(
        alert.to_string(),
        format!(
            "Order placed successfully! Transaction Hash: {}",
            ScriptedWallet::DEFAULT_HASH
        )
    );
}

#[tokio::test]
async fn test_failed_payment_keeps_cart_for_retry() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    wallet.queue_send(Err(ProviderError::Rejected));
    let mut store = ready_to_pay(&wallet).await;

    let err = store.checkout().await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::TransactionFailed(ProviderError::Rejected)
    ));
    assert_eq!(store.notifier().alerts(), [Alert::TransactionFailed]);
    assert_eq!(store.state().cart().len(), 3);
    assert!(store.state().wallet().is_some());

    // Retry goes through with the same transfer.
    let receipt = store.checkout().await.unwrap();
    assert_eq!(receipt.items, 3);
    let sent = wallet.sent();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent.first(), sent.last());
    assert!(store.state().cart().is_empty());
}

#[tokio::test]
async fn test_provider_error_is_reported_as_transaction_failure() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    wallet.queue_send(Err(ProviderError::from_rpc(-32_000, "insufficient funds")));
    let mut store = ready_to_pay(&wallet).await;

    let err = store.checkout().await.unwrap_err();
    assert!(matches!(
        err,
        StorefrontError::TransactionFailed(ProviderError::Rpc { code: -32_000, .. })
    ));
    assert_eq!(store.notifier().alerts(), [Alert::TransactionFailed]);
    assert_eq!(store.compute_total(), "0.0240");
}

#[tokio::test]
async fn test_cart_can_be_refilled_after_checkout() {
    let wallet = ScriptedWallet::approving(vec![address('a')]);
    wallet.queue_send(Ok(TxHash::new("0x01")));
    wallet.queue_send(Ok(TxHash::new("0x02")));
    let mut store = ready_to_pay(&wallet).await;

    assert_eq!(store.checkout().await.unwrap().tx_hash, TxHash::new("0x01"));

    store.add_item(ItemId::new(2)).unwrap();
    let receipt = store.checkout().await.unwrap();
    assert_eq!(receipt.tx_hash, TxHash::new("0x02"));
    assert_eq!(wallet.sent().last().unwrap().value, Wei::new(2_000_000_000_000_000));
}
