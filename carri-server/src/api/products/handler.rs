//! Product Handlers

use axum::extract::{Multipart, Path, Query, State};
use axum::response::Response;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::Product;

use crate::api::{discard_image, parse_id, store_image};
use crate::core::ServerState;
use crate::db::repository::{CatalogRepository, ProductDraft};
use crate::forms::{CORRECT_ERRORS, FormErrors, RawForm, product as product_form};
use crate::pagination::{PRODUCTS_PER_PAGE, PageQuery, fetch_page};
use crate::views;
use crate::web::{self, Flash, FlashMessage};

const RESOURCE: &str = "product";
const LIST_URL: &str = "/productos/";
const MEDIA_DIR: &str = "productos";

async fn load(state: &ServerState, raw_id: &str) -> AppResult<Product> {
    let id = parse_id(raw_id, RESOURCE)?;
    state
        .products()
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))
}

fn invalid(product: Option<&Product>, raw: &RawForm, errors: &FormErrors, mut flash: Flash) -> Response {
    flash.push(FlashMessage::error(CORRECT_ERRORS));
    web::page(
        views::products::form_page(product, raw, errors, &flash),
        &flash,
    )
}

/// GET /productos/
pub async fn list(
    State(state): State<ServerState>,
    Query(query): Query<PageQuery>,
    flash: Flash,
) -> AppResult<Response> {
    let page = fetch_page(&state.products(), &query, PRODUCTS_PER_PAGE).await?;
    Ok(web::page(views::products::list(&page, &flash), &flash))
}

/// GET /productos/agregar/
pub async fn create_form(flash: Flash) -> Response {
    let html = views::products::form_page(None, &product_form::blank(), &FormErrors::new(), &flash);
    web::page(html, &flash)
}

/// POST /productos/agregar/
pub async fn create(
    State(state): State<ServerState>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match product_form::clean(&state, &raw, None).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(None, &raw, &errors, flash)),
    };

    let image = store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await?;
    let draft = ProductDraft {
        input: cleaned.input,
        image,
    };

    match state.products().create(&draft).await {
        Ok(product) => {
            tracing::info!(product_id = product.id, name = %product.name, "Product created");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El producto \"{}\" ha sido creado exitosamente.",
                    product.name
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), None).await;
            match product_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(None, &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /productos/{id}/editar/
pub async fn edit_form(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let product = load(&state, &id).await?;
    let html = views::products::form_page(
        Some(&product),
        &product_form::initial(&product),
        &FormErrors::new(),
        &flash,
    );
    Ok(web::page(html, &flash))
}

/// POST /productos/{id}/editar/
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
    multipart: Multipart,
) -> AppResult<Response> {
    let product = load(&state, &id).await?;
    let raw = RawForm::from_multipart(multipart).await?;
    let cleaned = match product_form::clean(&state, &raw, Some(product.id)).await? {
        Ok(cleaned) => cleaned,
        Err(errors) => return Ok(invalid(Some(&product), &raw, &errors, flash)),
    };

    // Without a new file the stored image is kept
    let image = match store_image(&state, MEDIA_DIR, cleaned.image.as_ref()).await? {
        Some(path) => Some(path),
        None => product.image.clone(),
    };
    let draft = ProductDraft {
        input: cleaned.input,
        image,
    };

    match state.products().update(product.id, &draft).await {
        Ok(updated) => {
            discard_image(&state, product.image.as_deref(), updated.image.as_deref()).await;
            tracing::info!(product_id = updated.id, name = %updated.name, "Product updated");
            Ok(web::redirect_with(
                LIST_URL,
                FlashMessage::success(format!(
                    "El producto \"{}\" ha sido actualizado exitosamente.",
                    updated.name
                )),
            ))
        }
        Err(err) => {
            discard_image(&state, draft.image.as_deref(), product.image.as_deref()).await;
            match product_form::conflict_errors(&err) {
                Some(errors) => Ok(invalid(Some(&product), &raw, &errors, flash)),
                None => Err(err.into()),
            }
        }
    }
}

/// GET /productos/{id}/eliminar/
pub async fn confirm_delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    flash: Flash,
) -> AppResult<Response> {
    let product = load(&state, &id).await?;
    Ok(web::page(views::products::delete_page(&product, &flash), &flash))
}

/// POST /productos/{id}/eliminar/
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Response> {
    let id = parse_id(&id, RESOURCE)?;
    let product = state
        .products()
        .delete(id)
        .await?
        .ok_or_else(|| AppError::new(ErrorCode::ProductNotFound).with_detail("id", id))?;

    discard_image(&state, product.image.as_deref(), None).await;
    tracing::info!(product_id = product.id, name = %product.name, "Product deleted");

    Ok(web::redirect_with(
        LIST_URL,
        FlashMessage::success(format!(
            "El producto \"{}\" ha sido eliminado exitosamente.",
            product.name
        )),
    ))
}
