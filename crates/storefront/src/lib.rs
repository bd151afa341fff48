//! FarmConnect Storefront library.
//!
//! A single-page storefront controller: a fixed vegetable catalog, a
//! client-side cart, a login gate, and checkout through a browser-injected
//! wallet that pays the cart total to the merchant in one transfer.
//!
//! # Architecture
//!
//! - [`Storefront`] owns all state and exposes one method per user action
//! - [`WalletProvider`] is the seam to the injected signer
//! - [`Notifier`] shows blocking alerts
//! - Askama templates render the current page as HTML
//!
//! There is no backend, no persistence and no real authentication.
//!
//! # Browser
//!
//! With the `browser` feature on `wasm32`, the `browser` module mounts the
//! storefront into the page, routes button clicks and the login form to the
//! controller, logs to the browser console, and provides the
//! `window.ethereum` provider and a `window.alert` notifier.

#![cfg_attr(not(any(test, feature = "browser")), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod error;
pub mod notify;
pub mod router;
pub mod session;
pub mod state;
pub mod storefront;
pub mod views;
pub mod wallet;

#[cfg(all(feature = "browser", target_arch = "wasm32"))]
#[allow(unsafe_code)]
pub mod browser;

pub use catalog::{Catalog, CatalogItem};
pub use checkout::Receipt;
pub use config::{ConfigError, StorefrontConfig};
pub use error::{Result, StorefrontError};
pub use notify::{Alert, Notifier, TracingNotifier};
pub use router::{Action, ActionError, Page};
pub use session::{LoginError, LoginForm};
pub use state::AppState;
pub use storefront::Storefront;
pub use wallet::{PaymentHandle, ProviderError, WalletBinding, WalletProvider};
