//! HTTP routes
//!
//! # Structure
//!
//! - [`health`] - liveness probe
//! - [`company`] - company profile (`/nosotros/`)
//! - [`products`] - product catalog (`/productos/`)
//! - [`suppliers`] - supplier catalog (`/proveedores/`)
//! - [`employees`] - staff catalog (`/trabajadores/`)
//!
//! Handlers render HTML, answer successful writes with a 302 carrying a flash
//! message, and re-render the form (200) when validation fails.

pub mod company;
pub mod employees;
pub mod health;
pub mod products;
pub mod suppliers;

use axum::extract::DefaultBodyLimit;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Router, middleware};
use shared::error::{AppError, AppResult};
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;

use crate::core::ServerState;
use crate::db::repository::image_in_use;
use crate::services::ImageUpload;
use crate::views;
use crate::web::{self, Flash};

/// Log `METHOD URI STATUS` for every request
async fn log_request(
    request: axum::http::Request<axum::body::Body>,
    next: middleware::Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let response = next.run(request).await;

    let status = response.status();

    tracing::info!(target: "http_access", "{} {} {}", method, uri, status);

    response
}

/// Build the application router with its state attached
pub fn build_app(state: ServerState) -> Router {
    let media = ServeDir::new(state.media.root());
    let body_limit = state.config.body_limit();

    Router::<ServerState>::new()
        .route("/", get(home))
        .merge(health::router())
        .merge(company::router())
        .merge(products::router())
        .merge(suppliers::router())
        .merge(employees::router())
        .nest_service("/media", media)
        .fallback(not_found)
        .layer(DefaultBodyLimit::max(body_limit))
        .layer(middleware::from_fn(log_request))
        .layer(CompressionLayer::new())
        .with_state(state)
}

/// GET / - landing page
async fn home(flash: Flash) -> Response {
    web::page(views::home::render(&flash), &flash)
}

async fn not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Html(views::error_page(404, "La página que busca no existe.")),
    )
        .into_response()
}

/// Parse a path id; anything that is not an integer is a 404
pub(crate) fn parse_id(raw: &str, resource: &str) -> AppResult<i64> {
    raw.parse::<i64>()
        .map_err(|_| AppError::not_found(format!("{resource} {raw}")))
}

/// Store an accepted upload under `entity`, returning its media path
pub(crate) async fn store_image(
    state: &ServerState,
    entity: &str,
    upload: Option<&ImageUpload>,
) -> AppResult<Option<String>> {
    match upload {
        Some(upload) => Ok(Some(state.media.save(entity, upload).await?)),
        None => Ok(None),
    }
}

/// After a write, drop the file that is no longer referenced
///
/// The file stays on disk while any other row still points at it.
pub(crate) async fn discard_image(state: &ServerState, stale: Option<&str>, kept: Option<&str>) {
    let Some(path) = stale.filter(|path| Some(*path) != kept) else {
        return;
    };
    match image_in_use(&state.pool, path).await {
        Ok(false) => state.media.remove(path).await,
        Ok(true) => tracing::debug!(path, "Image still referenced, keeping file"),
        Err(e) => tracing::warn!(path, error = %e, "Image reference check failed, keeping file"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42", "product").unwrap(), 42);
        let err = parse_id("abc", "product").unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.http_status(), StatusCode::NOT_FOUND);
    }
}
