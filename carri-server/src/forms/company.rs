//! Company form

use shared::error::AppResult;
use shared::models::{Company, CompanyInput};
use shared::util::current_year;
use validator::Validate;

use super::{Cleaned, FormErrors, RawForm, WithImage, clean_image, finish};
use crate::core::ServerState;
use crate::db::repository::RepoError;
use crate::db::repository::company::COMPANY_ID;

pub const SINGLETON: &str = "Solo puede existir una empresa en el sistema.";
pub const RUC_EXISTS: &str = "Ya existe una empresa con este RUC.";

fn input_name(field: &str) -> &'static str {
    match field {
        "name" => "nombre",
        "address" => "direccion",
        "mission" => "mision",
        "vision" => "vision",
        "founding_year" => "anio_fundacion",
        "ruc" => "ruc",
        _ => "__all__",
    }
}

pub fn initial(company: &Company) -> RawForm {
    RawForm::from_pairs([
        ("nombre", company.name.clone()),
        ("direccion", company.address.clone()),
        ("mision", company.mission.clone()),
        ("vision", company.vision.clone()),
        ("anio_fundacion", company.founding_year.to_string()),
        ("ruc", company.ruc.clone()),
    ])
}

/// Validate a company submission.
///
/// `editing` is false for creation, where an existing company is a
/// form-level error.
pub async fn clean(
    state: &ServerState,
    raw: &RawForm,
    editing: bool,
) -> AppResult<Cleaned<WithImage<CompanyInput>>> {
    let mut errors = FormErrors::new();
    let companies = state.companies();

    let founding_year = raw
        .required_integer("anio_fundacion", &mut errors)
        .map(|year| year.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32);

    let input = CompanyInput {
        name: raw.required("nombre", &mut errors).unwrap_or_default(),
        address: raw.required("direccion", &mut errors).unwrap_or_default(),
        mission: raw.required("mision", &mut errors).unwrap_or_default(),
        vision: raw.required("vision", &mut errors).unwrap_or_default(),
        founding_year: founding_year.unwrap_or(1900),
        ruc: raw.required("ruc", &mut errors).unwrap_or_default(),
    }
    .normalized();

    errors.merge_validation(input.validate(), input_name);

    if founding_year.is_some()
        && !errors.has("anio_fundacion")
        && let Err(msg) = input.check_founding_year(current_year())
    {
        errors.add("anio_fundacion", msg);
    }

    let exclude_id = editing.then_some(COMPANY_ID);
    if !errors.has("ruc") && companies.ruc_taken(&input.ruc, exclude_id).await? {
        errors.add("ruc", RUC_EXISTS);
    }

    if !editing && companies.exists().await? {
        errors.add_form(SINGLETON);
    }

    let image = clean_image(&state.media, raw, &mut errors);

    Ok(finish(WithImage { input, image }, errors))
}

pub fn conflict_errors(err: &RepoError) -> Option<FormErrors> {
    let mut errors = FormErrors::new();
    if err.is_duplicate_of("company.id") {
        errors.add_form(SINGLETON);
    } else if err.is_duplicate_of("company.ruc") {
        errors.add("ruc", RUC_EXISTS);
    } else {
        return None;
    }
    Some(errors)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_conflicts() {
        let errors = conflict_errors(&RepoError::Duplicate("company.id".into())).unwrap();
        assert_eq!(errors.form(), [SINGLETON.to_string()]);

        let errors = conflict_errors(&RepoError::Duplicate("company.ruc".into())).unwrap();
        assert_eq!(errors.field("ruc"), [RUC_EXISTS.to_string()]);

        assert!(conflict_errors(&RepoError::NotFound("company".into())).is_none());
    }
}
