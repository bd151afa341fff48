//! Unified error handling for storefront actions.
//!
//! Every controller operation returns [`Result<T>`]. [`StorefrontError::alert`]
//! is the one place deciding which failures the user sees and which are
//! only logged.

use thiserror::Error;

use farmconnect_core::{AmountError, ItemId};

use crate::notify::Alert;
use crate::session::LoginError;
use crate::wallet::ProviderError;

/// Application-level error type for the storefront.
#[derive(Debug, Error)]
pub enum StorefrontError {
    /// Wallet connect attempted before logging in.
    #[error("not logged in")]
    NotLoggedIn,

    /// Checkout attempted without a connected wallet.
    #[error("wallet not connected")]
    WalletNotConnected,

    /// Checkout attempted with an empty cart.
    #[error("cart is empty")]
    EmptyCart,

    /// No wallet provider was injected into the page.
    #[error("no wallet provider available")]
    ProviderUnavailable,

    /// The provider refused or failed an account request.
    #[error("wallet provider error: {0}")]
    Provider(#[from] ProviderError),

    /// The provider refused or failed to broadcast the payment.
    #[error("transaction failed: {0}")]
    TransactionFailed(#[source] ProviderError),

    /// The login form was incomplete.
    #[error("login failed: {0}")]
    Login(#[from] LoginError),

    /// An item id that is not in the catalog.
    #[error("unknown catalog item: {0}")]
    UnknownItem(ItemId),

    /// The cart total cannot be sent as a transfer value.
    #[error("invalid payment amount: {0}")]
    Amount(#[from] AmountError),

    /// A view template failed to render.
    #[error("render error: {0}")]
    Render(#[from] askama::Error),
}

impl StorefrontError {
    /// The alert to show for this error, if any.
    ///
    /// Account-request failures are logged but raise no alert, while payment
    /// failures always do.
    #[must_use]
    pub fn alert(&self) -> Option<Alert> {
        match self {
            Self::NotLoggedIn => Some(Alert::LoginRequired),
            Self::WalletNotConnected => Some(Alert::ConnectWallet),
            Self::EmptyCart => Some(Alert::EmptyCart),
            Self::ProviderUnavailable => Some(Alert::InstallWallet),
            Self::TransactionFailed(_) | Self::Amount(_) => Some(Alert::TransactionFailed),
            Self::Provider(_)
            | Self::Login(_)
            | Self::UnknownItem(_)
            | Self::Render(_) => None,
        }
    }

    /// Whether the action was refused before any wallet call was made.
    #[must_use]
    pub const fn is_precondition(&self) -> bool {
        matches!(
            self,
            Self::NotLoggedIn | Self::WalletNotConnected | Self::EmptyCart
        )
    }
}

/// Result type alias for `StorefrontError`.
pub type Result<T> = std::result::Result<T, StorefrontError>;
