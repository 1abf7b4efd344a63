//! Shared types for CarriAcces
//!
//! Domain models, validated input payloads, error codes, money helpers and
//! text normalization used by the server and the seeding tool.

pub mod error;
pub mod models;
pub mod money;
pub mod util;
pub mod validation;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};
pub use validator::Validate;
