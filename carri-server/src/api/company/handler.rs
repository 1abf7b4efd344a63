//! Company Handlers

use axum::extract::{Multipart, State};
use axum::response::Response;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Company;

use crate::api::{discard_image, store_image};
use crate::core::ServerState;
use crate::db::repository::CompanyDraft;
use crate::forms::{CORRECT_ERRORS, FormErrors, RawForm, company as company_form};
use crate::views;
use crate::web::{self, Flash, FlashMessage};

const DETAIL_URL: &str = "/nosotros/";
const MEDIA_DIR: &str = "empresa";

/// Shown when the create page is requested while a company exists
const ALREADY_REGISTERED: &str = "Ya existe información de la empresa registrada.";

async fn load(state: &ServerState) -> AppResult<Company> {
    state
        .companies()
        .get()
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))
}

fn invalid(company: Option<&Company>, raw: &RawForm, errors: &FormErrors, mut flash: Flash) -> Response {
    flash.push(FlashMessage::error(CORRECT_ERRORS));
    web::page(
        views::company::form_page(company, raw, errors, &flash),
        &flash,
    )
}

fn already_registered() -> Response {
    web::redirect_with(DETAIL_URL, FlashMessage::warning(ALREADY_REGISTERED))
}

/// GET /nosotros/
pub async fn detail(State(state): State<ServerState>, flash: Flash) -> AppResult<Response> {
    let company = state.companies().get().await?;
    Ok(web::page(
        views::company::detail(company.as_ref(), &flash),
        &flash,
    ))
}

/// GET /nosotros/agregar/
pub async fn create_form(State(state): State<ServerState>, flash: Flash) -> AppResult<Response> {
    if state.companies().exists().await? {
        return Ok(already_registered());
    }
    let html = views::company::form_page(None, &RawForm::new(), &FormErrors::new(), &flash);
    Ok(web::page(html, &flash))
}

/// POST /nosotros/agregar/
pub async fn create(
    State(state): State<ServerState>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    if state.companies().exists().await? {
        return Ok(already_registered());
    }

    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match company_form::clean(&state, &raw, false).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(None, &raw, &errors, flash)),
    };

    let image = store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await?;
    let draft = CompanyDraft {
        input: cleaned.input,
        image,
    };

    match state.companies().create(&draft).await {
        Ok(company) => {
            tracing::info!(name = %company.name, ruc = %company.ruc, "Company created");
            Ok(web::redirect_with(
                DETAIL_URL,
                FlashMessage::success(format!(
                    "La información de {} ha sido creada exitosamente.",
                    company.name
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), None).await;
            match company_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(None, &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /nosotros/editar/
pub async fn edit_form(State(state): State<ServerState>, flash: Flash) -> AppResult<Response> {
    let company = load(&state).await?;
    let html = views::company::form_page(
        Some(&company),
        &company_form::initial(&company),
        &FormErrors::new(),
        &flash,
    );
    Ok(web::page(html, &flash))
}

/// POST /nosotros/editar/
pub async fn update(
    State(state): State<ServerState>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    let company = load(&state).await?;
    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match company_form::clean(&state, &raw, true).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(Some(&company), &raw, &errors, flash)),
    };

    let image = match store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await? {
        Some(path) => Some(path),
        None => company.image.clone(),
    };
    let draft = CompanyDraft {
        input: cleaned.input,
        image,
    };

    match state.companies().update(&draft).await {
        Ok(updated) => {
            discard_image(&state, company.image.as_deref(), updated.image.as_deref()).await;
            tracing::info!(name = %updated.name, "Company updated");
            Ok(web::redirect_with(
                DETAIL_URL,
                FlashMessage::success(format!(
                    "La información de {} ha sido actualizada exitosamente.",
                    updated.name
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), company.image.as_deref()).await;
            match company_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(Some(&company), &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /nosotros/eliminar/
pub async fn confirm_delete(State(state): State<ServerState>, flash: Flash) -> AppResult<Response> {
    let company = load(&state).await?;
    Ok(web::page(views::company::delete_page(&company, &flash), &flash))
}

/// POST /nosotros/eliminar/
pub async fn delete(State(state): State<ServerState>) -> AppResult<Response> {
    let company = state
        .companies()
        .delete()
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::CompanyNotFound))?;

    discard_image(&state, company.image.as_deref(), None).await;
    tracing::info!(name = %company.name, "Company deleted");

    Ok(web::redirect_with(
        DETAIL_URL,
        FlashMessage::success(format!(
            "La información de {} ha sido eliminada exitosamente.",
            company.name
        )),
    ))
}
