//! Health check route
//!
//! | Path | Method | Meaning |
//! |------|--------|---------|
//! | /health | GET | `200 OK` while the process serves requests |

use axum::{Router, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health
async fn health() -> &'static str {
    "OK"
}
