//! Type-safe price representation using decimal arithmetic.
//!
//! Prices never touch binary floating point. On the wire they are encoded as
//! decimal strings (`"1.40"`), courtesy of `rust_decimal`'s `serde-with-str`.

use core::fmt;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A monetary amount in the store's single currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(Decimal);

impl Price {
    /// A price of zero.
    pub const ZERO: Self = Self(Decimal::ZERO);

    /// Create a new price.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// Create a price from an amount in cents, e.g. `140` for `1.40`.
    #[must_use]
    pub fn from_cents(cents: i64) -> Self {
        Self(Decimal::new(cents, 2))
    }

    /// The underlying decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }

    /// Price of `quantity` units at this unit price.
    ///
    /// Returns `None` if the result does not fit in a `Decimal`.
    #[must_use]
    pub fn checked_times(self, quantity: i32) -> Option<Self> {
        self.0.checked_mul(Decimal::from(quantity)).map(Self)
    }

    /// Sum of two prices, `None` on overflow.
    #[must_use]
    pub fn checked_add(self, other: Self) -> Option<Self> {
        self.0.checked_add(other.0).map(Self)
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

impl From<Price> for Decimal {
    fn from(price: Price) -> Self {
        price.0
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn test_from_cents() {
        assert_eq!(Price::from_cents(140).amount(), dec!(1.40));
    }

    #[test]
    fn test_checked_times_is_exact() {
        // 0.1 * 3 is the classic float trap
        let price = Price::new(dec!(0.10));
        assert_eq!(price.checked_times(3), Some(Price::new(dec!(0.30))));
    }

    #[test]
    fn test_checked_times_overflow() {
        assert_eq!(Price::new(Decimal::MAX).checked_times(2), None);
    }

    #[test]
    fn test_display_two_places() {
        assert_eq!(Price::new(dec!(6.5)).to_string(), "6.50");
    }

    #[test]
    fn test_serializes_as_string() {
        let json = serde_json::to_string(&Price::new(dec!(2.30))).unwrap();
        assert_eq!(json, "\"2.30\"");

        let price: Price = serde_json::from_str("\"1.40\"").unwrap();
        assert_eq!(price.amount(), dec!(1.40));
    }
}
