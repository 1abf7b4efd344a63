//! Supplier form (urlencoded, no image)

use shared::error::AppResult;
use shared::models::{Supplier, SupplierInput};
use validator::Validate;

use super::{Cleaned, FormErrors, RawForm, finish};
use crate::core::ServerState;
use crate::db::repository::RepoError;

pub const NAME_EXISTS: &str = "Ya existe un proveedor con este nombre.";
pub const EMAIL_EXISTS: &str = "Ya existe un proveedor con este correo electrónico.";

fn input_name(field: &str) -> &'static str {
    match field {
        "name" => "nombre",
        "description" => "descripcion",
        "phone" => "telefono",
        "country" => "pais",
        "email" => "correo",
        "address" => "direccion",
        _ => "__all__",
    }
}

pub fn initial(supplier: &Supplier) -> RawForm {
    RawForm::from_pairs([
        ("nombre", supplier.name.clone()),
        ("descripcion", supplier.description.clone()),
        ("telefono", supplier.phone.clone()),
        ("pais", supplier.country.clone()),
        ("correo", supplier.email.clone()),
        ("direccion", supplier.address.clone()),
    ])
}

pub async fn clean(
    state: &ServerState,
    raw: &RawForm,
    exclude_id: Option<i64>,
) -> AppResult<Cleaned<SupplierInput>> {
    let mut errors = FormErrors::new();

    let input = SupplierInput {
        name: raw.required("nombre", &mut errors).unwrap_or_default(),
        description: raw.required("descripcion", &mut errors).unwrap_or_default(),
        phone: raw.required("telefono", &mut errors).unwrap_or_default(),
        country: raw.required("pais", &mut errors).unwrap_or_default(),
        email: raw.required("correo", &mut errors).unwrap_or_default(),
        address: raw.required("direccion", &mut errors).unwrap_or_default(),
    }
    .normalized();

    errors.merge_validation(input.validate(), input_name);

    let suppliers = state.suppliers();
    if !errors.has("nombre") && suppliers.name_taken(&input.name, exclude_id).await? {
        errors.add("nombre", NAME_EXISTS);
    }
    if !errors.has("correo") && suppliers.email_taken(&input.email, exclude_id).await? {
        errors.add("correo", EMAIL_EXISTS);
    }

    Ok(finish(input, errors))
}

pub fn conflict_errors(err: &RepoError) -> Option<FormErrors> {
    let mut errors = FormErrors::new();
    if err.is_duplicate_of("supplier.name_key") {
        errors.add("nombre", NAME_EXISTS);
    } else if err.is_duplicate_of("supplier.email") {
        errors.add("correo", EMAIL_EXISTS);
    } else {
        return None;
    }
    Some(errors)
}
