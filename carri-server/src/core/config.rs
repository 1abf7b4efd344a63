use std::path::PathBuf;

/// Default per-image upload cap (5 MiB)
pub const DEFAULT_MAX_UPLOAD_BYTES: usize = 5 * 1024 * 1024;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Meaning |
/// |----------|---------|---------|
/// | WORK_DIR | ./data | Base directory for database, media and logs |
/// | HTTP_PORT | 8000 | HTTP listen port |
/// | DATABASE_PATH | {WORK_DIR}/carriacces.db | SQLite file |
/// | MEDIA_DIR | {WORK_DIR}/media | Uploaded images |
/// | ENVIRONMENT | development | development / staging / production |
/// | LOG_LEVEL | info | Default log filter when RUST_LOG is unset |
/// | LOG_DIR | (unset) | Enables daily rolling file logs |
/// | MAX_UPLOAD_BYTES | 5242880 | Per-image size cap |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Graceful shutdown budget |
///
/// # Example
///
/// ```ignore
/// WORK_DIR=/srv/carriacces HTTP_PORT=8080 cargo run
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Base directory
    pub work_dir: String,
    /// HTTP listen port
    pub http_port: u16,
    /// SQLite database file (`None` means `{work_dir}/carriacces.db`)
    pub database_path: Option<String>,
    /// Media directory (`None` means `{work_dir}/media`)
    pub media_dir: Option<String>,
    /// Runtime environment: development | staging | production
    pub environment: String,
    /// Default log level
    pub log_level: String,
    /// Optional directory for rolling log files
    pub log_dir: Option<String>,
    /// Per-image size cap in bytes
    pub max_upload_bytes: usize,
    /// Graceful shutdown budget (milliseconds)
    pub shutdown_timeout_ms: u64,
}

impl Config {
    /// Load configuration from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        Self {
            work_dir: std::env::var("WORK_DIR").unwrap_or_else(|_| "./data".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8000),
            database_path: std::env::var("DATABASE_PATH").ok().filter(|s| !s.is_empty()),
            media_dir: std::env::var("MEDIA_DIR").ok().filter(|s| !s.is_empty()),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into()),
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_dir: std::env::var("LOG_DIR").ok().filter(|s| !s.is_empty()),
            max_upload_bytes: std::env::var("MAX_UPLOAD_BYTES")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_MAX_UPLOAD_BYTES),
            shutdown_timeout_ms: std::env::var("SHUTDOWN_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(10000),
        }
    }

    /// Override the work directory and port (tests)
    ///
    /// Database and media paths are reset so they follow the new work dir.
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.http_port = http_port;
        config.database_path = None;
        config.media_dir = None;
        config
    }

    pub fn work_dir(&self) -> PathBuf {
        PathBuf::from(&self.work_dir)
    }

    /// Resolved SQLite file path
    pub fn database_path(&self) -> PathBuf {
        match &self.database_path {
            Some(path) => PathBuf::from(path),
            None => self.work_dir().join("carriacces.db"),
        }
    }

    /// Resolved media directory
    pub fn media_dir(&self) -> PathBuf {
        match &self.media_dir {
            Some(dir) => PathBuf::from(dir),
            None => self.work_dir().join("media"),
        }
    }

    /// Request body cap: one image plus room for the text fields
    pub fn body_limit(&self) -> usize {
        self.max_upload_bytes + 1024 * 1024
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
