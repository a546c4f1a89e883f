//! Amount type representing a decimal number with a currency.
//!
//! Numbers are exact decimals; the scale read from the source file is kept,
//! so `12.30` is written back as `12.30`.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// An amount is a quantity paired with a currency.
///
/// # Examples
///
/// ```
/// use n26_core::Amount;
/// use rust_decimal_macros::dec;
///
/// let amount = Amount::new(dec!(12.30), "EUR");
/// assert_eq!(amount.number, dec!(12.30));
/// assert_eq!(amount.currency, "EUR");
/// assert_eq!(amount.to_string(), "12.30 EUR");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Amount {
    /// The decimal quantity
    pub number: Decimal,
    /// The currency code (e.g., "EUR")
    pub currency: String,
}

impl Amount {
    /// Create a new amount.
    #[must_use]
    pub fn new(number: Decimal, currency: impl Into<String>) -> Self {
        Self {
            number,
            currency: currency.into(),
        }
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.number, self.currency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_display_keeps_scale() {
        assert_eq!(Amount::new(dec!(12.30), "EUR").to_string(), "12.30 EUR");
        assert_eq!(Amount::new(dec!(-5), "EUR").to_string(), "-5 EUR");
    }
}
