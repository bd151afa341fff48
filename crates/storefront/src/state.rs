//! Application state owned by the controller.

use crate::cart::Cart;
use crate::router::Page;
use crate::session::SessionState;
use crate::wallet::WalletBinding;

/// Everything the rendered page depends on.
///
/// Fields are only mutated through [`Storefront`](crate::Storefront), which
/// keeps the wallet binding behind a logged-in session.
#[derive(Debug, Default)]
pub struct AppState {
    pub(crate) page: Page,
    pub(crate) session: SessionState,
    pub(crate) cart: Cart,
    pub(crate) wallet: Option<WalletBinding>,
    pub(crate) login_error: Option<String>,
}

impl AppState {
    /// The page currently selected.
    #[must_use]
    pub const fn page(&self) -> Page {
        self.page
    }

    #[must_use]
    pub const fn session(&self) -> &SessionState {
        &self.session
    }

    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The connected wallet, if any.
    #[must_use]
    pub const fn wallet(&self) -> Option<&WalletBinding> {
        self.wallet.as_ref()
    }

    /// Message from the last rejected login form, cleared on success.
    #[must_use]
    pub fn login_error(&self) -> Option<&str> {
        self.login_error.as_deref()
    }
}
