//! Integration tests for FarmConnect.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p farmconnect-integration-tests
//! RUST_LOG=farmconnect_storefront=debug cargo test -p farmconnect-integration-tests -- --nocapture
//! ```
//!
//! # Test Doubles
//!
//! - [`ScriptedWallet`] - a wallet provider whose answers are set up front
//!   and which records every call
//! - [`RecordingNotifier`] - collects alerts instead of showing them

#![allow(clippy::unwrap_used, clippy::missing_panics_doc)]

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;
use std::rc::Rc;
use std::sync::Once;

use async_trait::async_trait;
use farmconnect_core::{Address, TransactionRequest, TxHash};
use farmconnect_storefront::{
    Alert, LoginForm, Notifier, ProviderError, Storefront, StorefrontConfig, WalletProvider,
};
use tracing_subscriber::EnvFilter;

static TRACING: Once = Once::new();

/// Install a test-friendly tracing subscriber once per test binary.
pub fn init_tracing() {
    TRACING.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("farmconnect_storefront=debug"));
        let _ = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .try_init();
    });
}

/// An address made of one repeated hex digit.
pub fn address(digit: char) -> Address {
    Address::parse(&format!("0x{}", digit.to_string().repeat(40))).unwrap()
}

/// The merchant every test storefront pays.
pub fn merchant() -> Address {
    Address::parse("0x52908400098527886E0F7030069857D2E4169EE7").unwrap()
}

/// Collects alerts in the order they were raised.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    alerts: RefCell<Vec<Alert>>,
}

impl RecordingNotifier {
    pub fn alerts(&self) -> Vec<Alert> {
        self.alerts.borrow().clone()
    }

    pub fn last(&self) -> Option<Alert> {
        self.alerts.borrow().last().cloned()
    }
}

impl Notifier for RecordingNotifier {
    fn alert(&self, alert: &Alert) {
        self.alerts.borrow_mut().push(alert.clone());
    }
}

/// Wallet provider with scripted answers.
///
/// Account requests return the configured result every time. Transaction
/// sends pop results from a queue and succeed with a fixed hash once it is
/// empty.
#[derive(Debug)]
pub struct ScriptedWallet {
    accounts: Result<Vec<Address>, ProviderError>,
    send_results: RefCell<VecDeque<Result<TxHash, ProviderError>>>,
    account_requests: Cell<usize>,
    sent: RefCell<Vec<TransactionRequest>>,
}

impl ScriptedWallet {
    /// Hash returned by sends with nothing queued.
    pub const DEFAULT_HASH: &'static str =
        "0x88df016429689c079f3b2f6ad39fa052532c56795b733da78a91ebe6a713944b";

    /// A wallet that approves access to the given accounts.
    pub fn approving(accounts: Vec<Address>) -> Rc<Self> {
        Self::with_accounts(Ok(accounts))
    }

    /// A wallet whose user declines account access.
    pub fn rejecting() -> Rc<Self> {
        Self::with_accounts(Err(ProviderError::Rejected))
    }

    pub fn with_accounts(accounts: Result<Vec<Address>, ProviderError>) -> Rc<Self> {
        Rc::new(Self {
            accounts,
            send_results: RefCell::new(VecDeque::new()),
            account_requests: Cell::new(0),
            sent: RefCell::new(Vec::new()),
        })
    }

    /// Queue the result of the next transaction send.
    pub fn queue_send(&self, result: Result<TxHash, ProviderError>) {
        self.send_results.borrow_mut().push_back(result);
    }

    pub fn account_requests(&self) -> usize {
        self.account_requests.get()
    }

    /// Every transaction handed to the wallet, including failed ones.
    pub fn sent(&self) -> Vec<TransactionRequest> {
        self.sent.borrow().clone()
    }
}

#[async_trait(?Send)]
impl WalletProvider for ScriptedWallet {
    fn name(&self) -> &str {
        "scripted"
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        self.account_requests.set(self.account_requests.get() + 1);
        self.accounts.clone()
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError> {
        self.sent.borrow_mut().push(tx.clone());
        self.send_results
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| Ok(TxHash::new(Self::DEFAULT_HASH)))
    }
}

/// A storefront with the default catalog and no wallet provider.
pub fn storefront() -> Storefront<RecordingNotifier> {
    init_tracing();
    Storefront::new(StorefrontConfig::new(merchant()), RecordingNotifier::default()).unwrap()
}

/// A storefront wired to `wallet`.
pub fn storefront_with(wallet: &Rc<ScriptedWallet>) -> Storefront<RecordingNotifier> {
    let provider: Rc<dyn WalletProvider> = wallet.clone();
    storefront().with_provider(provider)
}

/// Submit the login form with throwaway credentials.
pub fn log_in(store: &mut Storefront<RecordingNotifier>) {
    store
        .login(&LoginForm::new("grower@farmconnect.test", "hunter2"))
        .unwrap();
}
