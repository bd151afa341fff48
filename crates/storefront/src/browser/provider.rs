//! The injected EIP-1193 provider.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::JsFuture;

use farmconnect_core::{Address, TransactionRequest, TxHash};

use crate::wallet::{ProviderError, WalletProvider};

#[wasm_bindgen]
extern "C" {
    /// The object wallets inject as `window.ethereum`.
    type Eip1193;

    #[wasm_bindgen(method, catch)]
    fn request(this: &Eip1193, args: &JsValue) -> Result<js_sys::Promise, JsValue>;
}

#[derive(Serialize)]
struct RpcRequest<'a, P: Serialize> {
    method: &'a str,
    params: P,
}

#[derive(Deserialize)]
struct RpcError {
    code: Option<i64>,
    message: Option<String>,
}

/// Wallet provider backed by `window.ethereum`.
pub struct InjectedProvider {
    ethereum: Eip1193,
}

impl InjectedProvider {
    /// Look for an injected provider on the global object.
    #[must_use]
    pub fn detect() -> Option<Self> {
        let ethereum = js_sys::Reflect::get(&js_sys::global(), &JsValue::from_str("ethereum")).ok()?;
        if ethereum.is_undefined() || ethereum.is_null() {
            tracing::debug!("no injected wallet provider");
            return None;
        }
        Some(Self {
            ethereum: ethereum.unchecked_into(),
        })
    }

    async fn call<P: Serialize, T: DeserializeOwned>(
        &self,
        method: &str,
        params: P,
    ) -> Result<T, ProviderError> {
        let args = RpcRequest { method, params }
            .serialize(&serde_wasm_bindgen::Serializer::json_compatible())
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))?;

        let promise = self.ethereum.request(&args).map_err(rpc_error)?;
        let value = JsFuture::from(promise).await.map_err(rpc_error)?;

        serde_wasm_bindgen::from_value(value)
            .map_err(|e| ProviderError::InvalidResponse(e.to_string()))
    }
}

/// Decode a rejected EIP-1193 request.
fn rpc_error(err: JsValue) -> ProviderError {
    match serde_wasm_bindgen::from_value::<RpcError>(err.clone()) {
        Ok(RpcError { code, message }) => {
            ProviderError::from_rpc(code.unwrap_or(-1), message.unwrap_or_default())
        }
        Err(_) => ProviderError::from_rpc(-1, format!("{err:?}")),
    }
}

#[async_trait(?Send)]
impl WalletProvider for InjectedProvider {
    fn name(&self) -> &str {
        "window.ethereum"
    }

    async fn request_accounts(&self) -> Result<Vec<Address>, ProviderError> {
        let accounts: Vec<String> = self.call("eth_requestAccounts", Vec::<String>::new()).await?;
        accounts
            .iter()
            .map(|account| {
                Address::parse(account).map_err(|e| ProviderError::InvalidResponse(e.to_string()))
            })
            .collect()
    }

    async fn send_transaction(&self, tx: &TransactionRequest) -> Result<TxHash, ProviderError> {
        let hash: String = self.call("eth_sendTransaction", [tx]).await?;
        Ok(TxHash::new(hash))
    }
}
