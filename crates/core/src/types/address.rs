//! Account address type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing an [`Address`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AddressError {
    /// The input does not start with `0x`.
    #[error("address must start with 0x")]
    MissingPrefix,
    /// The input has the wrong number of hex digits.
    #[error("address must have {expected} hex digits, got {actual}")]
    WrongLength {
        /// Required number of digits.
        expected: usize,
        /// Digits found after the prefix.
        actual: usize,
    },
    /// The input contains a non-hex character.
    #[error("address contains invalid character {0:?}")]
    InvalidCharacter(char),
}

/// A 20-byte account address in `0x`-prefixed hex form.
///
/// The original casing is kept so checksummed addresses round-trip to the
/// wallet unchanged; equality ignores case.
///
/// ```
/// use farmconnect_core::Address;
///
/// let addr = Address::parse("0x52908400098527886E0F7030069857D2E4169EE7").unwrap();
/// assert_eq!(addr.short(), "0x5290...9EE7");
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, Eq)]
#[serde(try_from = "String", into = "String")]
pub struct Address(String);

impl Address {
    /// Number of hex digits after the prefix.
    pub const HEX_DIGITS: usize = 40;

    /// Parse an `Address` from a string.
    ///
    /// # Errors
    ///
    /// Returns an error if the input is not `0x` followed by exactly 40 hex
    /// digits.
    pub fn parse(s: &str) -> Result<Self, AddressError> {
        let s = s.trim();
        let digits = s
            .strip_prefix("0x")
            .or_else(|| s.strip_prefix("0X"))
            .ok_or(AddressError::MissingPrefix)?;

        if let Some(bad) = digits.chars().find(|c| !c.is_ascii_hexdigit()) {
            return Err(AddressError::InvalidCharacter(bad));
        }

        if digits.len() != Self::HEX_DIGITS {
            return Err(AddressError::WrongLength {
                expected: Self::HEX_DIGITS,
                actual: digits.len(),
            });
        }

        Ok(Self(format!("0x{digits}")))
    }

    /// Returns the address as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether every digit is zero.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        self.0.bytes().skip(2).all(|b| b == b'0')
    }

    /// Abbreviated form for the navigation badge: first six characters,
    /// an ellipsis, then the last four.
    #[must_use]
    pub fn short(&self) -> String {
        let head = self.0.get(..6).unwrap_or(&self.0);
        let tail = self.0.get(self.0.len().saturating_sub(4)..).unwrap_or("");
        format!("{head}...{tail}")
    }
}

impl PartialEq for Address {
    fn eq(&self, other: &Self) -> bool {
        self.0.eq_ignore_ascii_case(&other.0)
    }
}

impl std::hash::Hash for Address {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.0.to_ascii_lowercase().hash(state);
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Address {
    type Error = AddressError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl AsRef<str> for Address {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    const CHECKSUMMED: &str = "0x52908400098527886E0F7030069857D2E4169EE7";

    #[test]
    fn test_parse_keeps_casing() {
        let addr = Address::parse(CHECKSUMMED).unwrap();
        assert_eq!(addr.as_str(), CHECKSUMMED);
    }

    #[test]
    fn test_equality_ignores_case() {
        let upper = Address::parse(CHECKSUMMED).unwrap();
        let lower = Address::parse(&CHECKSUMMED.to_ascii_lowercase()).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(
            Address::parse("52908400098527886E0F7030069857D2E4169EE7"),
            Err(AddressError::MissingPrefix)
        );
        assert_eq!(
            Address::parse("0x1234"),
            Err(AddressError::WrongLength {
                expected: 40,
                actual: 4
            })
        );
        assert_eq!(
            Address::parse("0xYourWebsiteEthAddress"),
            Err(AddressError::InvalidCharacter('Y'))
        );
    }

    #[test]
    fn test_short_form() {
        let addr = Address::parse(CHECKSUMMED).unwrap();
        assert_eq!(addr.short(), "0x5290...9EE7");
    }

    #[test]
    fn test_is_zero() {
        let zero = Address::parse(&format!("0x{}", "0".repeat(40))).unwrap();
        assert!(zero.is_zero());
        assert!(!Address::parse(CHECKSUMMED).unwrap().is_zero());
    }

    #[test]
    fn test_deserialize_validates() {
        let ok: Result<Address, _> = serde_json::from_str(&format!("\"{CHECKSUMMED}\""));
        assert!(ok.is_ok());

        let bad: Result<Address, _> = serde_json::from_str("\"0xnope\"");
        assert!(bad.is_err());
    }
}
