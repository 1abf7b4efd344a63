//! Data models
//!
//! Entities are persisted by carri-server; the `*Input` payloads carry the
//! declarative validation rules applied to every create/update submission.
//! DB row types use `#[cfg_attr(feature = "db", derive(sqlx::FromRow))]`.
//! All IDs are `i64` (SQLite INTEGER PRIMARY KEY).

pub mod company;
pub mod employee;
pub mod product;
pub mod supplier;

// Re-exports
pub use company::*;
pub use employee::*;
pub use product::*;
pub use supplier::*;
