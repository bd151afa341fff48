//! The storefront controller.
//!
//! One [`Storefront`] owns the whole application state. Every user action
//! is a method on it; failures are reported through the notifier according
//! to [`StorefrontError::alert`] and returned to the caller as well.

use std::rc::Rc;

use tracing::instrument;

use farmconnect_core::{Address, ItemId};

use crate::catalog::{Catalog, CatalogItem};
use crate::checkout::{self, PaymentTerms, Receipt};
use crate::config::{ConfigError, StorefrontConfig};
use crate::error::{Result, StorefrontError};
use crate::notify::{Alert, Notifier};
use crate::router::{Action, Page};
use crate::session::LoginForm;
use crate::state::AppState;
use crate::views;
use crate::wallet::{self, WalletProvider};

/// Client-side view-state controller.
///
/// The async operations take `&mut self`, so a second wallet call cannot
/// start on the same controller while one is outstanding.
pub struct Storefront<N: Notifier> {
    config: StorefrontConfig,
    catalog: Catalog,
    state: AppState,
    provider: Option<Rc<dyn WalletProvider>>,
    notifier: N,
}

impl<N: Notifier> Storefront<N> {
    /// Create a controller with no wallet provider.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the configuration fails validation.
    pub fn new(config: StorefrontConfig, notifier: N) -> std::result::Result<Self, ConfigError> {
        config.validate()?;
        let catalog = Catalog::new(config.catalog.clone());

        Ok(Self {
            config,
            catalog,
            state: AppState::default(),
            provider: None,
            notifier,
        })
    }

    /// Attach the injected wallet provider.
    #[must_use]
    pub fn with_provider(mut self, provider: Rc<dyn WalletProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    /// Attach or detach the injected wallet provider.
    pub fn set_provider(&mut self, provider: Option<Rc<dyn WalletProvider>>) {
        self.provider = provider;
    }

    #[must_use]
    pub const fn config(&self) -> &StorefrontConfig {
        &self.config
    }

    #[must_use]
    pub const fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    #[must_use]
    pub const fn state(&self) -> &AppState {
        &self.state
    }

    #[must_use]
    pub const fn notifier(&self) -> &N {
        &self.notifier
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    pub fn navigate(&mut self, page: Page) {
        tracing::debug!(from = %self.state.page, to = %page, "navigate");
        self.state.page = page;
    }

    // =========================================================================
    // Session
    // =========================================================================

    /// Submit the login form and go to the home page.
    ///
    /// # Errors
    ///
    /// Returns `Login` if a field is blank or the email is malformed. No
    /// alert is raised; the message is shown on the login page instead.
    #[instrument(skip_all)]
    pub fn login(&mut self, form: &LoginForm) -> Result<()> {
        match self.state.session.login(form) {
            Ok(email) => {
                tracing::info!(%email, "logged in");
                self.state.login_error = None;
                self.state.page = Page::Home;
                Ok(())
            }
            Err(err) => {
                self.state.login_error = Some(err.to_string());
                Err(self.report(err.into()))
            }
        }
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Append a catalog item to the cart.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` unless `item` is exactly the catalog entry with
    /// its id, so every cart entry stays a listed product at its listed price.
    pub fn add_to_cart(&mut self, item: CatalogItem) -> Result<()> {
        if self.catalog.get(item.id) != Some(&item) {
            return Err(self.report(StorefrontError::UnknownItem(item.id)));
        }
        tracing::debug!(item = %item.id, name = %item.name, "add to cart");
        self.state.cart.add(item);
        Ok(())
    }

    /// Append the catalog item with this id.
    ///
    /// # Errors
    ///
    /// Returns `UnknownItem` if the id is not in the catalog.
    pub fn add_item(&mut self, id: ItemId) -> Result<()> {
        let item = self
            .catalog
            .get(id)
            .cloned()
            .ok_or(StorefrontError::UnknownItem(id))
            .map_err(|err| self.report(err))?;
        self.add_to_cart(item)
    }

    /// Remove every cart entry with this id; returns the remaining entries.
    pub fn remove_from_cart(&mut self, id: ItemId) -> &[CatalogItem] {
        tracing::debug!(item = %id, "remove from cart");
        self.state.cart.remove_all(id)
    }

    /// Cart total as a four-decimal string.
    #[must_use]
    pub fn compute_total(&self) -> String {
        self.state.cart.formatted_total()
    }

    // =========================================================================
    // Wallet
    // =========================================================================

    /// Connect the injected wallet and bind its first account.
    ///
    /// # Errors
    ///
    /// - `NotLoggedIn` (alerted) if the login form has not been submitted
    /// - `ProviderUnavailable` (alerted) if no provider is injected
    /// - `Provider` (logged only) if the user rejects or the provider fails
    #[instrument(skip_all)]
    pub async fn connect_wallet(&mut self) -> Result<Address> {
        match wallet::connect(&self.state.session, self.provider.as_ref()).await {
            Ok(binding) => {
                let address = binding.address.clone();
                self.state.wallet = Some(binding);
                Ok(address)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    // =========================================================================
    // Checkout
    // =========================================================================

    /// Pay the cart total to the merchant, then empty the cart.
    ///
    /// # Errors
    ///
    /// - `WalletNotConnected` or `EmptyCart` (alerted) before any wallet call
    /// - `TransactionFailed` (alerted) if the provider fails; the cart is kept
    #[instrument(skip_all)]
    pub async fn checkout(&mut self) -> Result<Receipt> {
        let terms = PaymentTerms {
            merchant: &self.config.merchant_address,
            gas_limit: self.config.gas_limit,
        };

        match checkout::pay(self.state.wallet.as_ref(), &self.state.cart, terms).await {
            Ok(receipt) => {
                self.notifier.alert(&Alert::OrderPlaced {
                    tx_hash: receipt.tx_hash.clone(),
                });
                self.state.cart.clear();
                Ok(receipt)
            }
            Err(err) => Err(self.report(err)),
        }
    }

    /// Perform the action a page button names.
    ///
    /// # Errors
    ///
    /// Returns whatever the underlying operation returns.
    pub async fn dispatch(&mut self, action: Action) -> Result<()> {
        tracing::debug!(?action, "dispatch");
        match action {
            Action::Navigate(page) => self.navigate(page),
            Action::AddToCart(id) => self.add_item(id)?,
            Action::RemoveFromCart(id) => {
                self.remove_from_cart(id);
            }
            Action::ConnectWallet => {
                self.connect_wallet().await?;
            }
            Action::Checkout => {
                self.checkout().await?;
            }
        }
        Ok(())
    }

    // =========================================================================
    // Rendering
    // =========================================================================

    /// Render the current page.
    ///
    /// # Errors
    ///
    /// Returns `Render` if a template fails.
    pub fn render(&self) -> Result<String> {
        Ok(views::render(&self.state, &self.catalog)?)
    }

    /// Render the current page without the document shell.
    ///
    /// # Errors
    ///
    /// Returns `Render` if a template fails.
    pub fn render_fragment(&self) -> Result<String> {
        Ok(views::render_fragment(&self.state, &self.catalog)?)
    }

    /// Log an error and raise its alert, if it has one.
    fn report(&self, err: StorefrontError) -> StorefrontError {
        match err.alert() {
            Some(alert) => {
                if err.is_precondition() {
                    tracing::warn!(error = %err, "action aborted");
                } else {
                    tracing::error!(error = %err, "action failed");
                }
                self.notifier.alert(&alert);
            }
            None => tracing::error!(error = %err, "action failed"),
        }
        err
    }
}
