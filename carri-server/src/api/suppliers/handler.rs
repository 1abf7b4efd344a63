//! Supplier Handlers
//!
//! The supplier form has no image, so submissions are urlencoded.

use axum::Form;
use axum::extract::{Path, Query, State};
use axum::response::Response;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Supplier;
use std::collections::HashMap;

use crate::api::parse_id;
use crate::core::ServerState;
use crate::db::repository::CatalogRepository;
use crate::forms::{CORRECT_ERRORS, FormErrors, RawForm, supplier as supplier_form};
use crate::pagination::{PageQuery, SUPPLIERS_PER_PAGE, fetch_page};
use crate::views;
use crate::web::{self, Flash, FlashMessage};

const RESOURCE: &str = "supplier";
const LIST_URL: &str = "/proveedores/";

async fn load(state: &ServerState, raw_id: &str) -> AppResult<Supplier> {
    let id = parse_id(raw_id, RESOURCE)?;
    state
        .suppliers()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SupplierNotFound).with_detail("id", id))
}

fn invalid(supplier: Option<&Supplier>, raw: &RawForm, errors: &FormErrors, mut flash: Flash) -> Response {
    flash.push(FlashMessage::error(CORRECT_ERRORS));
    web::page(
        views::suppliers::form_page(supplier, raw, errors, &flash),
        &flash,
    )
}

/// GET /proveedores/
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
    flash: Flash,
) -> AppResult<Response> {
    let page = fetch_page(&state.suppliers(), &query, SUPPLIERS_PER_PAGE).await?;
    Ok(web::page(views::suppliers::list(&page, &flash), &flash))
}

/// GET /proveedores/agregar/
pub async fn create_form(flash: Flash) -> Response {
    let html = views::suppliers::form_page(None, &RawForm::new(), &FormErrors::new(), &flash);
    web::page(html, &flash)
}

/// POST /proveedores/agregar/
pub async fn create(
    State(state): State<ServerState>,
    flash: Flash,
    Form(fields): Form<HashMap<String, String>>,
) -> AppResult<Response> {
    let raw = RawForm::from_map(fields);
    let input = match supplier_form::clean(&state, &raw, None).await? {
        Ok(input) => input,
        Err(errors) => return Ok(invalid(None, &raw, &errors, flash)),
    };

    match state.suppliers().create(&input).await {
        Ok(supplier) => {
            tracing::info!(supplier_id = supplier.id, name = %supplier.name, "Supplier created");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El proveedor \"{}\" ha sido creado exitosamente.",
                    supplier.name
                )),
            ))
        }
        Err(err) => match supplier_form::conflict_errors(&err) {
            Some(errors) => Ok(invalid(None, &raw, &errors, flash)),
            None => Err(err.into()),
        },
    }
}

/// GET /proveedores/{id}/editar/
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let supplier = load(&state, &id).await?;
    let html = views::suppliers::form_page(
        Some(&supplier),
        &supplier_form::initial(&supplier),
        &FormErrors::new(),
        &flash,
    );
    Ok(web::page(html, &flash))
}

/// POST /proveedores/{id}/editar/
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
    Form(fields): Form<HashMap<String, String>>,
) -> AppResult<Response> {
    let supplier = load(&state, &id).await?;
    let raw = RawForm::from_map(fields);
    let input = match supplier_form::clean(&state, &raw, Some(supplier.id)).await? {
        Ok(input) => input,
        Err(errors) => return Ok(invalid(Some(&supplier), &raw, &errors, flash)),
    };

    match state.suppliers().update(supplier.id, &input).await {
        Ok(updated) => {
            tracing::info!(supplier_id = updated.id, name = %updated.name, "Supplier updated");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El proveedor \"{}\" ha sido actualizado exitosamente.",
                    updated.name
                )),
            ))
        }
        Err(err) => match supplier_form::conflict_errors(&err) {
            Some(errors) => Ok(invalid(Some(&supplier), &raw, &errors, flash)),
            None => Err(err.into()),
        },
    }
}

/// GET /proveedores/{id}/eliminar/
pub async fn confirm_delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let supplier = load(&state, &id).await?;
    Ok(web::page(views::suppliers::delete_page(&supplier, &flash), &flash))
}

/// POST /proveedores/{id}/eliminar/
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, RESOURCE)?;
    let supplier = state
        .suppliers()
        .delete(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::SupplierNotFound).with_detail("id", id))?;

    tracing::info!(supplier_id = supplier.id, name = %supplier.name, "Supplier deleted");

    Ok(web::redirect_with(
        LIST_URL,
        FlashMessage::success(format!(
            "El proveedor \"{}\" ha sido eliminado exitosamente.",
            supplier.name
        )),
    ))
}
