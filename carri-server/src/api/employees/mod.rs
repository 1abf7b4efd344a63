//! Employee routes

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/trabajadores/", get(handler::list))
        .route(
            "/trabajadores/agregar/",
            get(handler::create_form).post(handler::create),
        )
        .route(
            "/trabajadores/{id}/editar/",
            get(handler::edit_form).post(handler::update),
        )
        .route(
            "/trabajadores/{id}/eliminar/",
            get(handler::confirm_delete).post(handler::delete),
        )
}
