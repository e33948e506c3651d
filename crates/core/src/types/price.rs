//! Product price.
//!
//! Prices are stored as `NUMERIC` and decoded exactly, but the JSON contract
//! requires a number, so serialization goes through `f64`. A price never
//! reaches a client as a string.

use core::fmt;
use core::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A catalogue price in the shop's single currency (roubles).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(#[serde(with = "rust_decimal::serde::float")] Decimal);

impl Price {
    /// Wrap a decimal amount.
    #[must_use]
    pub const fn new(amount: Decimal) -> Self {
        Self(amount)
    }

    /// The exact decimal amount.
    #[must_use]
    pub const fn amount(&self) -> Decimal {
        self.0
    }
}

impl From<Decimal> for Price {
    fn from(amount: Decimal) -> Self {
        Self(amount)
    }
}

/// Parses plain (`79990.00`) and scientific (`7.999e4`) notation, the two
/// shapes a `NUMERIC` value takes once it has passed through JSON.
impl FromStr for Price {
    type Err = rust_decimal::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Decimal::from_str(s)
            .or_else(|_| Decimal::from_scientific(s))
            .map(Self)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(feature = "postgres")]
impl sqlx::Type<sqlx::Postgres> for Price {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <Decimal as sqlx::Type<sqlx::Postgres>>::type_info()
    }

    fn compatible(ty: &sqlx::postgres::PgTypeInfo) -> bool {
        <Decimal as sqlx::Type<sqlx::Postgres>>::compatible(ty)
    }
}

#[cfg(feature = "postgres")]
impl<'r> sqlx::Decode<'r, sqlx::Postgres> for Price {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        Ok(Self(<Decimal as sqlx::Decode<sqlx::Postgres>>::decode(value)?))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn serializes_as_json_number() {
        let price = Price::new(Decimal::new(8_999_050, 2));
        let json = serde_json::to_value(price).unwrap();
        assert!(json.is_number());
        assert!((json.as_f64().unwrap() - 89_990.5).abs() < f64::EPSILON);
    }

    #[test]
    fn whole_amount_stays_numeric() {
        let json = serde_json::to_string(&Price::new(Decimal::from(1500))).unwrap();
        assert_eq!(json, "1500.0");
    }

    #[test]
    fn parses_plain_and_scientific_text() {
        assert_eq!(
            " 79990.00 ".parse::<Price>().unwrap(),
            Price::new(Decimal::new(7_999_000, 2))
        );
        assert_eq!(
            "7.999e4".parse::<Price>().unwrap().amount(),
            Decimal::from(79_990)
        );
        assert!("free".parse::<Price>().is_err());
    }

    #[test]
    fn display_keeps_exact_decimal() {
        assert_eq!(Price::new(Decimal::new(1999, 2)).to_string(), "19.99");
    }
}
