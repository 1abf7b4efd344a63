//! Product Model

use crate::money::{self, TaxRate};
use crate::validation::normalize_title;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Product entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Product {
    pub id: i64,
    pub name: String,
    pub description: String,
    /// Price before tax, in cents
    pub price_cents: i64,
    #[cfg_attr(feature = "db", sqlx(try_from = "i64"))]
    pub tax_rate: TaxRate,
    /// Image path relative to the media root
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Product {
    pub fn price(&self) -> Decimal {
        money::from_cents(self.price_cents)
    }

    pub fn price_with_tax(&self) -> Decimal {
        money::price_with_tax(self.price(), self.tax_rate)
    }

    pub fn tax_amount(&self) -> Decimal {
        money::tax_amount(self.price(), self.tax_rate)
    }

    /// `"$450.00"`
    pub fn price_display(&self) -> String {
        money::format_money(self.price())
    }

    pub fn price_with_tax_display(&self) -> String {
        money::format_money(self.price_with_tax())
    }

    pub fn tax_label(&self) -> String {
        self.tax_rate.label()
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Create / update product payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ProductInput {
    #[validate(length(
        min = 3,
        max = 200,
        message = "El nombre del producto debe tener entre 3 y 200 caracteres."
    ))]
    pub name: String,
    #[validate(length(
        min = 10,
        message = "La descripción debe ser más detallada (al menos 10 caracteres)."
    ))]
    pub description: String,
    pub price: Decimal,
    pub tax_rate: TaxRate,
}

impl ProductInput {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_title(&self.name),
            description: self.description.trim().to_string(),
            ..self
        }
    }

    /// Price bounds and precision
    pub fn check_price(&self) -> Result<(), &'static str> {
        money::check_price(self.price).map_err(|e| e.message())
    }

    /// Case-insensitive uniqueness key for the name
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }

    pub fn price_cents(&self) -> Option<i64> {
        money::to_cents(self.price)
    }
}

impl From<&Product> for ProductInput {
    fn from(product: &Product) -> Self {
        Self {
            name: product.name.clone(),
            description: product.description.clone(),
            price: product.price(),
            tax_rate: product.tax_rate,
        }
    }
}
