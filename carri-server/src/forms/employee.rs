//! Employee form

use shared::error::AppResult;
use shared::models::{Employee, EmployeeInput};
use validator::Validate;

use super::{Cleaned, FormErrors, RawForm, WithImage, clean_image, finish};
use crate::core::ServerState;
use crate::db::repository::RepoError;

pub const EMAIL_EXISTS: &str = "Ya existe un trabajador con este correo electrónico.";
pub const CEDULA_EXISTS: &str = "Ya existe un trabajador con esta cédula.";
pub const CODE_EXISTS: &str = "Ya existe un trabajador con este código de empleado.";

fn input_name(field: &str) -> &'static str {
    match field {
        "first_name" => "nombre",
        "last_name" => "apellido",
        "email" => "correo",
        "cedula" => "cedula",
        "employee_code" => "codigo_empleado",
        "employee_type" => "tipo_trabajador",
        _ => "__all__",
    }
}

pub fn initial(employee: &Employee) -> RawForm {
    RawForm::from_pairs([
        ("nombre", employee.first_name.clone()),
        ("apellido", employee.last_name.clone()),
        ("correo", employee.email.clone()),
        ("cedula", employee.cedula.clone()),
        ("codigo_empleado", employee.employee_code.clone()),
        ("tipo_trabajador", employee.employee_type.clone()),
    ])
}

pub async fn clean(
    state: &ServerState,
    raw: &RawForm,
    exclude_id: Option<i64>,
) -> AppResult<Cleaned<WithImage<EmployeeInput>>> {
    let mut errors = FormErrors::new();

    let input = EmployeeInput {
        first_name: raw.required("nombre", &mut errors).unwrap_or_default(),
        last_name: raw.required("apellido", &mut errors).unwrap_or_default(),
        email: raw.required("correo", &mut errors).unwrap_or_default(),
        cedula: raw.required("cedula", &mut errors).unwrap_or_default(),
        employee_code: raw.required("codigo_empleado", &mut errors).unwrap_or_default(),
        employee_type: raw.get("tipo_trabajador").to_string(),
    }
    .normalized();

    errors.merge_validation(input.validate(), input_name);

    let employees = state.employees();
    if !errors.has("correo") && employees.email_taken(&input.email, exclude_id).await? {
        errors.add("correo", EMAIL_EXISTS);
    }
    if !errors.has("cedula") && employees.cedula_taken(&input.cedula, exclude_id).await? {
        errors.add("cedula", CEDULA_EXISTS);
    }
    if !errors.has("codigo_empleado")
        && employees.code_taken(&input.employee_code, exclude_id).await?
    {
        errors.add("codigo_empleado", CODE_EXISTS);
    }

    let image = clean_image(&state.media, raw, &mut errors);

    Ok(finish(WithImage { input, image }, errors))
}

pub fn conflict_errors(err: &RepoError) -> Option<FormErrors> {
    let (field, message) = if err.is_duplicate_of("employee.email") {
        ("correo", EMAIL_EXISTS)
    } else if err.is_duplicate_of("employee.cedula") {
        ("cedula", CEDULA_EXISTS)
    } else if err.is_duplicate_of("employee.employee_code") {
        ("codigo_empleado", CODE_EXISTS)
    } else {
        return None;
    };
    let mut errors = FormErrors::new();
    errors.add(field, message);
    Some(errors)
}
