//! CarriAcces server
//!
//! Administrative web application for an automotive-accessories shop: the
//! company profile (a singleton) plus product, supplier and employee
//! catalogs, rendered as HTML.
//!
//! # Module layout
//!
//! ```text
//! carri-server/src/
//! ├── core/          # config, state, server, startup errors
//! ├── db/            # SQLite pool, migrations, repositories
//! ├── forms/         # form parsing and validation pipeline
//! ├── services/      # media storage
//! ├── pagination.rs  # list paging
//! ├── web/           # flash cookie, redirects
//! ├── views/         # HTML pages
//! ├── api/           # routes and handlers
//! ├── seed.rs        # demo data
//! └── utils/         # logging
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod forms;
pub mod pagination;
pub mod seed;
pub mod services;
pub mod utils;
pub mod views;
pub mod web;

// Re-export public types
pub use core::{Config, Server, ServerError, ServerState};
pub use shared::error::{AppError, AppResult, ErrorCode};

// Re-export logger functions
pub use utils::logger::{init_logger, init_logger_with_file};

/// Load `.env` and install the logger
pub fn setup_environment() {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    init_logger_with_file(log_level.as_deref(), log_dir.as_deref());
}

pub fn print_banner() {
    println!(
        r#"
   ______                 _ ___
  / ____/___ ___________(_)   | ____________  _____
 / /   / __ `/ ___/ ___/ / /| |/ ___/ ___/ _ \/ ___/
/ /___/ /_/ / /  / /  / / ___ / /__/ /__/  __(__  )
\____/\__,_/_/  /_/  /_/_/  |_\___/\___/\___/____/
    "#
    );
}
