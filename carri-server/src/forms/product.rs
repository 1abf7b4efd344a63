//! Product form

use rust_decimal::Decimal;
use shared::error::AppResult;
use shared::models::{Product, ProductInput};
use shared::money::TaxRate;
use validator::Validate;

use super::{Cleaned, FormErrors, RawForm, WithImage, clean_image, finish};
use crate::core::ServerState;
use crate::db::repository::RepoError;

pub const NAME_EXISTS: &str = "Ya existe un producto con este nombre.";

/// Struct field to input name
fn input_name(field: &str) -> &'static str {
    match field {
        "name" => "nombre",
        "description" => "descripcion",
        "price" => "precio",
        "tax_rate" => "iva",
        _ => "__all__",
    }
}

/// Pre-populated values for the edit form
pub fn initial(product: &Product) -> RawForm {
    RawForm::from_pairs([
        ("nombre", product.name.clone()),
        ("descripcion", product.description.clone()),
        ("precio", product.price().to_string()),
        ("iva", i64::from(product.tax_rate).to_string()),
    ])
}

/// Values for an empty create form
pub fn blank() -> RawForm {
    RawForm::from_pairs([("iva", i64::from(TaxRate::default()).to_string())])
}

fn parse_tax_rate(value: &str) -> Option<TaxRate> {
    value
        .parse::<i64>()
        .ok()
        .and_then(|v| TaxRate::try_from(v).ok())
}

/// Validate a product submission; `exclude_id` is the product being edited
pub async fn clean(
    state: &ServerState,
    raw: &RawForm,
    exclude_id: Option<i64>,
) -> AppResult<Cleaned<WithImage<ProductInput>>> {
    let mut errors = FormErrors::new();

    let name = raw.required("nombre", &mut errors);
    let description = raw.required("descripcion", &mut errors);
    let price = raw.required_decimal("precio", &mut errors);
    let tax_rate = raw.required_choice("iva", &mut errors, parse_tax_rate);

    let input = ProductInput {
        name: name.unwrap_or_default(),
        description: description.unwrap_or_default(),
        price: price.unwrap_or(Decimal::ONE),
        tax_rate: tax_rate.unwrap_or_default(),
    }
    .normalized();

    errors.merge_validation(input.validate(), input_name);

    if price.is_some()
        && let Err(msg) = input.check_price()
    {
        errors.add("precio", msg);
    }

    if !errors.has("nombre") && state.products().name_taken(&input.name, exclude_id).await? {
        errors.add("nombre", NAME_EXISTS);
    }

    let image = clean_image(&state.media, raw, &mut errors);

    Ok(finish(WithImage { input, image }, errors))
}

/// Map a unique violation raced past the pre-check to a field error
pub fn conflict_errors(err: &RepoError) -> Option<FormErrors> {
    if err.is_duplicate_of("product.name_key") {
        let mut errors = FormErrors::new();
        errors.add("nombre", NAME_EXISTS);
        return Some(errors);
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_tax_rate() {
        assert_eq!(parse_tax_rate("15"), Some(TaxRate::Standard));
        assert_eq!(parse_tax_rate("0"), Some(TaxRate::Exempt));
        assert_eq!(parse_tax_rate("12"), None);
        assert_eq!(parse_tax_rate("quince"), None);
    }

    #[test]
    fn test_blank_defaults_to_standard_rate() {
        assert_eq!(blank().get("iva"), "15");
    }

    #[test]
    fn test_conflict_errors() {
        let errors = conflict_errors(&RepoError::Duplicate("product.name_key".into())).unwrap();
        assert_eq!(errors.field("nombre"), [NAME_EXISTS.to_string()]);
        assert!(conflict_errors(&RepoError::Database("x".into())).is_none());
    }
}
