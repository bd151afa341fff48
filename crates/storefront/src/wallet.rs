//! Wallet provider seam and the connect flow.
//!
//! The provider is whatever signer the browser injects. The storefront only
//! needs two of its calls: request account access and send a transaction.
//! Both may suspend for as long as the provider's own approval UI is open.

use std::fmt;
use std::rc::Rc;

use async_trait::async_trait;
use thiserror::Error;
use tracing::instrument;

use farmconnect_core::{Address, TransactionRequest, TxHash};

use crate::error::StorefrontError;
use crate::session::SessionState;

/// Errors reported by a wallet provider.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProviderError {
    /// The user declined the request in the provider UI.
    #[error("user rejected the request")]
    Rejected,

    /// Account access was granted but no account was returned.
    #[error("provider returned no accounts")]
    NoAccounts,

    /// Any other provider-side failure.
    #[error("provider error {code}: {message}")]
    Rpc { code: i64, message: String },

    /// The provider answered with something that could not be decoded.
    #[error("unexpected provider response: {0}")]
    InvalidResponse(String),
}

impl ProviderError {
    /// EIP-1193 code for a request the user refused.
    pub const USER_REJECTED: i64 = 4001;

    /// Classify an EIP-1193 error object.
    #[must_use]
    pub fn from_rpc(code: i64, message: impl Into<String>) -> Self {
        if code == Self::USER_REJECTED {
            Self::Rejected
        } else {
            Self::Rpc {
                code,
                message: message.into(),
            }
        }
    }
}

/// A browser-injected signer.
///
/// Futures are not `Send`: browser promises live on the page's only thread.
#[async_trait(?Send)]
pub trait WalletProvider {
    /// Short name used in logs.
    fn name(&self) -> &str {
        "injected"
    }

    /// Ask the user to authorise accounts; returns them in provider order.
    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError>;

    /// Ask the provider to sign and broadcast a transaction.
    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError>;
}

/// Payment capability bound to the provider that authorised an account.
#[derive(Clone)]
pub struct PaymentHandle {
    provider: Rc<dyn WalletProvider>,
}

impl PaymentHandle {
    #[must_use]
    pub fn new(provider: Rc<dyn WalletProvider>) -> Self {
        Self { provider }
    }

    /// Hand a transfer to the bound provider.
    ///
    /// # Errors
    ///
    /// Returns the provider's error if signing or broadcasting fails.
    pub async fn pay(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError> {
        self.provider.send_transaction(tx).await
    }

    /// Name of the bound provider.
    #[must_use]
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }
}

impl fmt::Debug for PaymentHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PaymentHandle")
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// A connected account and the means to pay from it.
#[derive(Debug, Clone)]
pub struct WalletBinding {
    pub address: Address,
    pub handle: PaymentHandle,
}

/// Bind the first account the provider authorises.
///
/// # Errors
///
/// - `NotLoggedIn` if the session has not passed the login form
/// - `ProviderUnavailable` if no provider was injected
/// - `Provider` if the user rejects access or the provider fails
#[instrument(skip_all, fields(provider = ?provider.map(|p| p.name())))]
pub async fn connect(
    session: &SessionState,
    provider: Option<&Rc<dyn WalletProvider>>,
) -> Result<WalletBinding, StorefrontError> {
    if !session.is_logged_in() {
        return Err(StorefrontError::NotLoggedIn);
    }
    let provider = provider.ok_or(StorefrontError::ProviderUnavailable)?;

    let accounts = provider.request_accounts().await?;
    let address = accounts
        .into_iter()
        .next()
        .ok_or(ProviderError::NoAccounts)?;

    tracing::info!(%address, "wallet connected");
    Ok(WalletBinding {
        address,
        handle: PaymentHandle::new(Rc::clone(provider)),
    })
}
