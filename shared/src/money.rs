//! Money helpers using rust_decimal for precision
//!
//! Prices are persisted as integer cents and surfaced as `Decimal` with two
//! decimal places. Displayed amounts use banker's rounding.

use rust_decimal::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Monetary values carry two decimal places
pub const DECIMAL_PLACES: u32 = 2;

/// Maximum allowed product price (999,999.99)
pub const MAX_PRICE: Decimal = Decimal::from_parts(99_999_999, 0, 0, false, 2);

/// IVA rate applicable to a product
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "i64", try_from = "i64")]
pub enum TaxRate {
    /// 0% IVA
    Exempt,
    /// 15% IVA
    #[default]
    Standard,
}

impl TaxRate {
    pub const ALL: [TaxRate; 2] = [TaxRate::Exempt, TaxRate::Standard];

    /// Rate in whole percent
    pub const fn percent(&self) -> i64 {
        match self {
            TaxRate::Exempt => 0,
            TaxRate::Standard => 15,
        }
    }

    /// `"15% IVA"` / `"0% IVA"`
    pub fn label(&self) -> String {
        format!("{}% IVA", self.percent())
    }

    /// Rate as a fraction (`0.15`)
    pub fn fraction(&self) -> Decimal {
        Decimal::new(self.percent(), 2)
    }
}

/// Tax rate outside the allowed choices
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidTaxRate(pub i64);

impl fmt::Display for InvalidTaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid tax rate: {}", self.0)
    }
}

impl std::error::Error for InvalidTaxRate {}

impl TryFrom<i64> for TaxRate {
    type Error = InvalidTaxRate;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(TaxRate::Exempt),
            15 => Ok(TaxRate::Standard),
            other => Err(InvalidTaxRate(other)),
        }
    }
}

impl From<TaxRate> for i64 {
    fn from(rate: TaxRate) -> Self {
        rate.percent()
    }
}

impl fmt::Display for TaxRate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.percent())
    }
}

/// Why a price was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PriceError {
    NotPositive,
    TooLarge,
    TooManyDecimals,
}

impl PriceError {
    pub const fn message(&self) -> &'static str {
        match self {
            PriceError::NotPositive => "El precio debe ser mayor a 0.",
            PriceError::TooLarge => "El precio no puede exceder $999,999.99.",
            PriceError::TooManyDecimals => "El precio no puede tener más de 2 decimales.",
        }
    }
}

/// Check a product price: positive, at most 999,999.99, at most two
/// decimal places as written (`"10.500"` is rejected).
pub fn check_price(price: Decimal) -> Result<(), PriceError> {
    if price <= Decimal::ZERO {
        return Err(PriceError::NotPositive);
    }
    if price > MAX_PRICE {
        return Err(PriceError::TooLarge);
    }
    if price.scale() > DECIMAL_PLACES {
        return Err(PriceError::TooManyDecimals);
    }
    Ok(())
}

/// Convert a checked price to integer cents
pub fn to_cents(price: Decimal) -> Option<i64> {
    (price * Decimal::ONE_HUNDRED).trunc().to_i64()
}

/// Convert integer cents back to a two-place decimal
pub fn from_cents(cents: i64) -> Decimal {
    Decimal::new(cents, DECIMAL_PLACES)
}

/// `price × (1 + rate/100)`, unrounded
pub fn price_with_tax(price: Decimal, rate: TaxRate) -> Decimal {
    price * (Decimal::ONE + rate.fraction())
}

/// `price × rate/100`, unrounded
pub fn tax_amount(price: Decimal, rate: TaxRate) -> Decimal {
    price * rate.fraction()
}

/// Format as `$1234.50`, rounding half to even.
pub fn format_money(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(DECIMAL_PLACES, RoundingStrategy::MidpointNearestEven);
    format!("${:.2}", rounded)
}
