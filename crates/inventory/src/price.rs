use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use sweetshop_core::{DomainError, DomainResult, ValueObject};

/// Non-negative unit price in the shop currency.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "Decimal", into = "Decimal")]
pub struct Price(Decimal);

impl ValueObject for Price {}

impl Price {
    pub const ZERO: Price = Price(Decimal::ZERO);

    pub fn new(amount: Decimal) -> DomainResult<Self> {
        if amount < Decimal::ZERO {
            return Err(DomainError::invalid_input("price cannot be negative"));
        }
        Ok(Self(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }
}

impl TryFrom<Decimal> for Price {
    type Error = DomainError;

    fn try_from(value: Decimal) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Price> for Decimal {
    fn from(value: Price) -> Self {
        value.0
    }
}

impl core::fmt::Display for Price {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{:.2}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_negative() {
        assert!(Price::new(Decimal::new(-1, 2)).is_err());
        assert_eq!(Price::new(Decimal::ZERO).unwrap(), Price::ZERO);
    }

    #[test]
    fn displays_two_places() {
        assert_eq!(Price::new(Decimal::new(25, 1)).unwrap().to_string(), "2.50");
    }

    #[test]
    fn deserialize_validates() {
        let ok: Price = serde_json::from_str("\"3.99\"").unwrap();
        assert_eq!(ok.amount(), Decimal::new(399, 2));
        assert!(serde_json::from_str::<Price>("\"-3.99\"").is_err());
    }
}
