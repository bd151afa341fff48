//! Smallest-unit amounts for native-currency transfers.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::price::Currency;

/// Errors converting an ether amount into [`Wei`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum AmountError {
    /// Negative amounts cannot be transferred.
    #[error("amount cannot be negative")]
    Negative,
    /// The amount has more fractional digits than the smallest unit allows.
    #[error("amount has {scale} decimal places, at most {max} are allowed")]
    TooPrecise {
        /// Decimal places in the amount.
        scale: u32,
        /// Decimal places of the smallest unit.
        max: u32,
    },
    /// The amount does not fit in 128 bits of wei.
    #[error("amount is too large")]
    Overflow,
    /// A hex quantity could not be parsed.
    #[error("invalid hex quantity: {0}")]
    InvalidHex(String),
}

/// An amount of wei, 10^-18 ether.
///
/// Serializes as a `0x`-prefixed hex quantity, the encoding wallet
/// providers expect for `value` fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Wei(u128);

impl Wei {
    /// Zero wei.
    pub const ZERO: Self = Self(0);

    /// Wrap a raw wei amount.
    #[must_use]
    pub const fn new(wei: u128) -> Self {
        Self(wei)
    }

    /// Raw wei amount.
    #[must_use]
    pub const fn as_u128(&self) -> u128 {
        self.0
    }

    /// Convert an amount of ether into wei exactly.
    ///
    /// ```
    /// use farmconnect_core::Wei;
    /// use rust_decimal::Decimal;
    ///
    /// let wei = Wei::from_ether(Decimal::new(240, 4)).unwrap();
    /// assert_eq!(wei.as_u128(), 24_000_000_000_000_000);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative, has more than 18 decimal
    /// places after trailing zeros are dropped, or overflows `u128`.
    pub fn from_ether(amount: Decimal) -> Result<Self, AmountError> {
        let amount = amount.normalize();
        if amount.is_zero() {
            return Ok(Self::ZERO);
        }
        if amount.is_sign_negative() {
            return Err(AmountError::Negative);
        }

        let max = Currency::Eth.decimals();
        let scale = amount.scale();
        if scale > max {
            return Err(AmountError::TooPrecise { scale, max });
        }

        let mantissa = u128::try_from(amount.mantissa()).map_err(|_| AmountError::Negative)?;
        10u128
            .checked_pow(max - scale)
            .and_then(|factor| mantissa.checked_mul(factor))
            .map(Self)
            .ok_or(AmountError::Overflow)
    }

    /// Hex quantity form, e.g. `0x5208`.
    #[must_use]
    pub fn to_hex(&self) -> String {
        format!("{:#x}", self.0)
    }

    /// Parse a `0x`-prefixed hex quantity.
    ///
    /// # Errors
    ///
    /// Returns an error if the prefix is missing or the digits are not hex.
    pub fn from_hex(s: &str) -> Result<Self, AmountError> {
        let digits = s
            .strip_prefix("0x")
            .ok_or_else(|| AmountError::InvalidHex(s.to_owned()))?;
        u128::from_str_radix(digits, 16)
            .map(Self)
            .map_err(|_| AmountError::InvalidHex(s.to_owned()))
    }
}

impl fmt::Display for Wei {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} wei", self.0)
    }
}

impl From<u128> for Wei {
    fn from(wei: u128) -> Self {
        Self(wei)
    }
}

impl Serialize for Wei {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for Wei {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::from_hex(&s).map_err(serde::de::Error::custom)
    }
}
