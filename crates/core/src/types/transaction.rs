//! Transfer requests handed to a wallet provider.

use core::fmt;

use serde::{Deserialize, Serialize, Serializer};

use super::address::Address;
use super::wei::Wei;

/// A native-currency transfer, shaped like the `eth_sendTransaction`
/// parameter object.
///
/// ```
/// use farmconnect_core::{Address, TransactionRequest, Wei};
///
/// let from = Address::parse("0x1111111111111111111111111111111111111111").unwrap();
/// let to = Address::parse("0x2222222222222222222222222222222222222222").unwrap();
/// let tx = TransactionRequest::transfer(from, to, Wei::new(21), 21_000);
///
/// let json = serde_json::to_value(&tx).unwrap();
/// assert_eq!(json["value"], "0x15");
/// assert_eq!(json["gas"], "0x5208");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRequest {
    /// Paying account.
    pub from: Address,
    /// Receiving account.
    pub to: Address,
    /// Amount transferred.
    pub value: Wei,
    /// Gas limit hint.
    #[serde(serialize_with = "hex_quantity")]
    pub gas: u64,
}

impl TransactionRequest {
    /// Build a plain value transfer.
    #[must_use]
    pub const fn transfer(from: Address, to: Address, value: Wei, gas: u64) -> Self {
        Self {
            from,
            to,
            value,
            gas,
        }
    }
}

fn hex_quantity<S: Serializer>(value: &u64, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&format!("{value:#x}"))
}

/// Identifier of a broadcast transaction, as returned by the provider.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TxHash(String);

impl TxHash {
    /// Wrap a provider-issued hash.
    #[must_use]
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    /// Returns the hash as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TxHash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn addr(digit: char) -> Address {
        Address::parse(&format!("0x{}", digit.to_string().repeat(40))).unwrap()
    }

    #[test]
    fn test_serializes_as_send_transaction_params() {
        let tx = TransactionRequest::transfer(
            addr('a'),
            addr('b'),
            Wei::new(24_000_000_000_000_000),
            21_000,
        );

        let json = serde_json::to_value(&tx).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "from": format!("0x{}", "a".repeat(40)),
                "to": format!("0x{}", "b".repeat(40)),
                "value": "0x5543df729c0000",
                "gas": "0x5208",
            })
        );
    }

    #[test]
    fn test_tx_hash_display() {
        let hash = TxHash::new("0xabc123");
        assert_eq!(hash.to_string(), "0xabc123");
        assert_eq!(hash.as_str(), "0xabc123");
    }
}
