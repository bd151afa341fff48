//! Type-safe price representation using decimal arithmetic.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A price with currency information.
///
/// Amounts are kept in the currency's standard unit (ether, not wei) so
/// catalog prices read the way they are displayed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Price {
    /// Amount in the currency's standard unit.
    pub amount: Decimal,
    /// Currency the amount is denominated in.
    #[serde(default)]
    pub currency: Currency,
}

impl Price {
    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal, currency: Currency) -> Self {
        Self { amount, currency }
    }

    /// Create an ether price from a mantissa and scale.
    ///
    /// `Price::ether(4, 3)` is 0.004 ETH.
    #[must_use]
    pub fn ether(mantissa: i64, scale: u32) -> Self {
        Self::new(Decimal::new(mantissa, scale), Currency::Eth)
    }

    /// Whether the amount is below zero.
    #[must_use]
    pub fn is_negative(&self) -> bool {
        self.amount.is_sign_negative() && !self.amount.is_zero()
    }

    /// Format for display on a catalog card (e.g., "ETH 0.01").
    #[must_use]
    pub fn display(&self) -> String {
        format!("{} {}", self.currency.code(), self.amount.normalize())
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display())
    }
}

/// Currencies a price can be denominated in.
///
/// Payments are native-currency transfers, so only the chain's own
/// currency is supported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum Currency {
    /// Ether, 18 decimal places.
    #[default]
    #[serde(rename = "ETH")]
    Eth,
}

impl Currency {
    /// Ticker shown next to amounts.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Eth => "ETH",
        }
    }

    /// Number of decimal places of the smallest unit.
    #[must_use]
    pub const fn decimals(&self) -> u32 {
        match self {
            Self::Eth => 18,
        }
    }
}
