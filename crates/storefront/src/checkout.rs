//! Paying for the cart.
//!
//! Checkout is one native-currency transfer of the cart total to the
//! merchant. The storefront does not track confirmation: once the provider
//! returns a transaction hash the order is considered placed.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use tracing::instrument;

use farmconnect_core::{Address, TransactionRequest, TxHash, Wei};

use crate::cart::Cart;
use crate::error::StorefrontError;
use crate::wallet::WalletBinding;

/// Where and how a checkout pays.
#[derive(Debug, Clone, Copy)]
pub struct PaymentTerms<'a> {
    pub merchant: &'a Address,
    pub gas_limit: u64,
}

/// Outcome of a broadcast payment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Receipt {
    /// Identifier returned by the provider.
    pub tx_hash: TxHash,
    /// Amount charged, in ether, at four decimal places.
    pub amount: Decimal,
    /// The same amount in wei, as sent.
    pub value: Wei,
    /// Number of cart entries paid for.
    pub items: usize,
    /// When the provider accepted the transaction.
    pub placed_at: DateTime<Utc>,
}

/// Build the transfer for the current cart.
///
/// # Errors
///
/// Returns `Amount` if the total cannot be expressed in wei.
pub fn build_transfer(
    from: &Address,
    cart: &Cart,
    terms: PaymentTerms<'_>,
) -> Result<TransactionRequest, StorefrontError> {
    let value = Wei::from_ether(cart.total())?;
    Ok(TransactionRequest::transfer(
        from.clone(),
        terms.merchant.clone(),
        value,
        terms.gas_limit,
    ))
}

/// Pay the cart total from the bound wallet.
///
/// The cart is not modified here; the caller clears it on success so a
/// failed payment can be retried without re-adding items.
///
/// # Errors
///
/// Checked in order:
/// - `WalletNotConnected` if no wallet is bound
/// - `EmptyCart` if there is nothing to pay for
/// - `Amount` if the total cannot be expressed in wei
/// - `TransactionFailed` if the provider refuses or fails to broadcast
#[instrument(skip_all, fields(items = cart.len(), total = %cart.formatted_total()))]
pub async fn pay(
    wallet: Option<&WalletBinding>,
    cart: &Cart,
    terms: PaymentTerms<'_>,
) -> Result<Receipt, StorefrontError> {
    let wallet = wallet.ok_or(StorefrontError::WalletNotConnected)?;
    if cart.is_empty() {
        return Err(StorefrontError::EmptyCart);
    }

    let tx = build_transfer(&wallet.address, cart, terms)?;
    tracing::debug!(from = %tx.from, to = %tx.to, value = %tx.value, gas = tx.gas, "sending transfer");

    let tx_hash = wallet
        .handle
        .pay(&tx)
        .await
        .map_err(StorefrontError::TransactionFailed)?;

    tracing::info!(%tx_hash, "transaction accepted");
    Ok(Receipt {
        tx_hash,
        amount: cart.total(),
        value: tx.value,
        items: cart.len(),
        placed_at: Utc::now(),
    })
}
