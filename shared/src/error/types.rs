//! Error types and their HTML rendering

use super::category::ErrorCategory;
use super::codes::ErrorCode;
use crate::util::escape_html;
use http::StatusCode;
use serde_json::Value;
use std::collections::HashMap;
use thiserror::Error;

/// Application error with structured error code and details
///
/// This is the primary error type for CarriAcces, providing:
/// - Standardized error codes via [`ErrorCode`]
/// - Human-readable messages
/// - Optional structured details for logging
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct AppError {
    /// The error code identifying the type of error
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details (field-level errors, context, etc.)
    pub details: Option<HashMap<String, Value>>,
}

impl AppError {
    /// Create a new error with the default message for the error code
    pub fn new(code: ErrorCode) -> Self {
        Self {
            message: code.message().to_string(),
            code,
            details: None,
        }
    }

    /// Create a new error with a custom message
    pub fn with_message(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            details: None,
        }
    }

    /// Add a detail entry to this error
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.details
            .get_or_insert_with(HashMap::new)
            .insert(key.into(), value.into());
        self
    }

    /// Get the HTTP status code for this error
    pub fn http_status(&self) -> StatusCode {
        self.code.http_status()
    }

    // ==================== Convenience constructors ====================

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::ValidationFailed, msg)
    }

    /// Create a generic not found error
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(ErrorCode::NotFound).with_detail("resource", resource.into())
    }

    /// Create a database error
    pub fn database(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::DatabaseError, msg)
    }

    /// Create an invalid request error
    pub fn invalid_request(msg: impl Into<String>) -> Self {
        Self::with_message(ErrorCode::InvalidRequest, msg)
    }

    /// Message safe to show to a visitor.
    ///
    /// System errors carry driver/IO text, so only the code's generic
    /// message is exposed for them.
    pub fn public_message(&self) -> &str {
        if self.code.category() == ErrorCategory::System {
            self.code.message()
        } else {
            &self.message
        }
    }
}

/// Type alias for Result with AppError
pub type AppResult<T> = Result<T, AppError>;

// ===== Axum Integration =====

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::response::Html;

        let status = self.http_status();

        if self.code.category() == ErrorCategory::System {
            tracing::error!(
                code = %self.code,
                message = %self.message,
                "System error occurred"
            );
        }

        let title = format!(
            "{} {}",
            status.as_u16(),
            status.canonical_reason().unwrap_or("Error")
        );
        let body = format!(
            "<!DOCTYPE html>\n<html lang=\"es\">\n<head><meta charset=\"utf-8\">\
             <title>{title} | CarriAcces</title></head>\n<body>\n\
             <main class=\"container\">\n<h1>{title}</h1>\n<p>{message}</p>\n\
             <p><a href=\"/\">Volver al inicio</a></p>\n</main>\n</body>\n</html>\n",
            title = escape_html(&title),
            message = escape_html(self.public_message()),
        );

        (status, Html(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_error_new() {
        let err = AppError::new(ErrorCode::ProductNotFound);
        assert_eq!(err.code, ErrorCode::ProductNotFound);
        assert_eq!(err.message, "El producto solicitado no existe.");
        assert!(err.details.is_none());
    }

    #[test]
    fn test_app_error_with_detail() {
        let err = AppError::validation("Precio inválido")
            .with_detail("field", "price")
            .with_detail("value", "-1");

        assert_eq!(err.code, ErrorCode::ValidationFailed);
        let details = err.details.unwrap();
        assert_eq!(details.get("field").unwrap(), "price");
        assert_eq!(details.get("value").unwrap(), "-1");
    }

    #[test]
    fn test_app_error_http_status() {
        assert_eq!(
            AppError::new(ErrorCode::SupplierNotFound).http_status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            AppError::database("disk I/O error").http_status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AppError::invalid_request("bad multipart").http_status(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_not_found_keeps_resource() {
        let err = AppError::not_found("product 42");
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(
            err.details.as_ref().unwrap().get("resource").unwrap(),
            "product 42"
        );
    }

    #[test]
    fn test_public_message_hides_system_details() {
        let err = AppError::database("no such table: product");
        assert_eq!(err.public_message(), "Error de base de datos.");

        let err = AppError::validation("Precio inválido");
        assert_eq!(err.public_message(), "Precio inválido");
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::with_message(ErrorCode::NotFound, "Producto no encontrado");
        assert_eq!(format!("{}", err), "Producto no encontrado");
    }

    #[test]
    fn test_into_response_status() {
        use axum::response::IntoResponse;

        let response = AppError::new(ErrorCode::EmployeeNotFound).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let content_type = response
            .headers()
            .get(http::header::CONTENT_TYPE)
            .unwrap()
            .to_str()
            .unwrap();
        assert!(content_type.starts_with("text/html"));
    }
}
