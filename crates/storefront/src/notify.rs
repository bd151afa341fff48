//! User-facing alerts.
//!
//! Alerts are blocking, modal-style messages. The controller decides which
//! alert to raise; a [`Notifier`] decides how to show it.

use core::fmt;

use farmconnect_core::TxHash;

/// A message shown to the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Alert {
    /// Wallet connect attempted before logging in.
    LoginRequired,
    /// No injected wallet provider was found.
    InstallWallet,
    /// Checkout attempted without a connected wallet.
    ConnectWallet,
    /// Checkout attempted with nothing in the cart.
    EmptyCart,
    /// The payment could not be signed or broadcast.
    TransactionFailed,
    /// The payment was broadcast.
    OrderPlaced {
        /// Identifier returned by the provider.
        tx_hash: TxHash,
    },
}

impl Alert {
    /// Whether this alert reports a completed action rather than a problem.
    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, Self::OrderPlaced { .. })
    }
}

impl fmt::Display for Alert {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::LoginRequired => {
                f.write_str("Please log in first before connecting your wallet.")
            }
            Self::InstallWallet => f.write_str("Please install MetaMask to connect your wallet."),
            Self::ConnectWallet => f.write_str("Please connect your wallet first."),
            Self::EmptyCart => f.write_str("Your cart is empty."),
            Self::TransactionFailed => f.write_str("Transaction failed. Please try again."),
            Self::OrderPlaced { tx_hash } => {
                write!(f, "Order placed successfully! Transaction Hash: {tx_hash}")
            }
        }
    }
}

/// Something that can put an [`Alert`] in front of the user.
pub trait Notifier {
    fn alert(&self, alert: &Alert);
}

impl<N: Notifier + ?Sized> Notifier for &N {
    fn alert(&self, alert: &Alert) {
        (**self).alert(alert);
    }
}

/// Notifier for hosts without a UI: alerts become log events.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn alert(&self, alert: &Alert) {
        if alert.is_success() {
            tracing::info!(%alert, "alert");
        } else {
            tracing::warn!(%alert, "alert");
        }
    }
}
