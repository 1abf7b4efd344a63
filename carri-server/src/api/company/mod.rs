//! Company profile routes
//!
//! The company is a singleton, so routes carry no id.

mod handler;

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/nosotros/", get(handler::detail))
        .route(
            "/nosotros/agregar/",
            get(handler::create_form).post(handler::create),
        )
        .route(
            "/nosotros/editar/",
            get(handler::edit_form).post(handler::update),
        )
        .route(
            "/nosotros/eliminar/",
            get(handler::confirm_delete).post(handler::delete),
        )
}
