//! Supplier routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/proveedores/", get(handler::list))
        .route(
            "/proveedores/agregar/",
            get(handler::create_form).post(handler::create),
        )
        .route(
            "/proveedores/{id}/editar/",
            get(handler::edit_form).post(handler::update),
        )
        .route(
            "/proveedores/{id}/eliminar/",
            get(handler::confirm_delete).post(handler::delete),
        )
}
