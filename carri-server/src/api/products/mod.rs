//! Product routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/productos/", get(handler::list))
        .route(
            "/productos/agregar/",
            get(handler::create_form).post(handler::create),
        )
        .route(
            "/productos/{id}/editar/",
            get(handler::edit_form).post(handler::update),
        )
        .route(
            "/productos/{id}/eliminar/",
            get(handler::confirm_delete).post(handler::delete),
        )
}
