//! Employee Handlers

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Employee;

use crate::api::{discard_image, parse_id, store_image};
use crate::core::ServerState;
use crate::db::repository::{CatalogRepository, EmployeeDraft};
use crate::forms::{CORRECT_ERRORS, FormErrors, RawForm, employee as employee_form};
use crate::pagination::{EMPLOYEES_PER_PAGE, PageQuery, fetch_page};
use crate::views;
use crate::web::{self, Flash, FlashMessage};

const RESOURCE: &str = "employee";
const LIST_URL: &str = "/trabajadores/";
const MEDIA_DIR: &str = "trabajadores";

async fn load(state: &ServerState, raw_id: &str) -> AppResult<Employee> {
    let id = parse_id(raw_id, RESOURCE)?;
    state
        .employees()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id))
}

fn invalid(employee: Option<&Employee>, raw: &RawForm, errors: &FormErrors, mut flash: Flash) -> Response {
    flash.push(FlashMessage::error(CORRECT_ERRORS));
    web::page(
        views::employees::form_page(employee, raw, errors, &flash),
        &flash,
    )
}

/// GET /trabajadores/
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
    flash: Flash,
) -> AppResult<Response> {
    let page = fetch_page(&state.employees(), &query, EMPLOYEES_PER_PAGE).await?;
    Ok(web::page(views::employees::list(&page, &flash), &flash))
}

/// GET /trabajadores/agregar/
pub async fn create_form(flash: Flash) -> Response {
    let html = views::employees::form_page(None, &RawForm::new(), &FormErrors::new(), &flash);
    web::page(html, &flash)
}

/// POST /trabajadores/agregar/
pub async fn create(
    State(state): State<ServerState>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match employee_form::clean(&state, &raw, None).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(None, &raw, &errors, flash)),
    };

    let image = store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await?;
    let draft = EmployeeDraft {
        input: cleaned.input,
        image,
    };

    match state.employees().create(&draft).await {
        Ok(employee) => {
            tracing::info!(employee_id = employee.id, code = %employee.employee_code, "Employee created");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El trabajador {} ha sido creado exitosamente.",
                    employee.full_name()
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), None).await;
            match employee_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(None, &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /trabajadores/{id}/editar/
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let employee = load(&state, &id).await?;
    let html = views::employees::form_page(
        Some(&employee),
        &employee_form::initial(&employee),
        &FormErrors::new(),
        &flash,
    );
    Ok(web::page(html, &flash))
}

/// POST /trabajadores/{id}/editar/
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    let employee = load(&state, &id).await?;
    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match employee_form::clean(&state, &raw, Some(employee.id)).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(Some(&employee), &raw, &errors, flash)),
    };

    let image = match store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await? {
        Some(path) => Some(path),
        None => employee.image.clone(),
    };
    let draft = EmployeeDraft {
        input: cleaned.input,
        image,
    };

    match state.employees().update(employee.id, &draft).await {
        Ok(updated) => {
            discard_image(&state, employee.image.as_deref(), updated.image.as_deref()).await;
            tracing::info!(employee_id = updated.id, code = %updated.employee_code, "Employee updated");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El trabajador {} ha sido actualizado exitosamente.",
                    updated.full_name()
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), employee.image.as_deref()).await;
            match employee_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(Some(&employee), &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /trabajadores/{id}/eliminar/
pub async fn confirm_delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let employee = load(&state, &id).await?;
    Ok(web::page(views::employees::delete_page(&employee, &flash), &flash))
}

/// POST /trabajadores/{id}/eliminar/
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, RESOURCE)?;
    let employee = state
        .employees()
        .delete(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::EmployeeNotFound).with_detail("id", id))?;

    discard_image(&state, employee.image.as_deref(), None).await;
    tracing::info!(employee_id = employee.id, "Employee deleted");

    Ok(web::redirect_with(
        LIST_URL,
        FlashMessage::success(format!(
            "El trabajador {} ha sido eliminado exitosamente.",
            employee.full_name()
        )),
    ))
}
