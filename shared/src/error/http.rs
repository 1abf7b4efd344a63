//! HTTP status code mapping for error codes

use super::codes::ErrorCode;
use http::StatusCode;

impl ErrorCode {
    /// Get the appropriate HTTP status code for this error code
    pub fn http_status(&self) -> StatusCode {
        match self {
            // 404 Not Found
            Self::NotFound
            | Self::CompanyNotFound
            | Self::ProductNotFound
            | Self::SupplierNotFound
            | Self::EmployeeNotFound => StatusCode::NOT_FOUND,

            // 409 Conflict
            Self::AlreadyExists
            | Self::CompanyAlreadyExists
            | Self::CompanyRucExists
            | Self::ProductNameExists
            | Self::SupplierNameExists
            | Self::SupplierEmailExists
            | Self::EmployeeEmailExists
            | Self::EmployeeCedulaExists
            | Self::EmployeeCodeExists => StatusCode::CONFLICT,

            // 413 Payload Too Large
            Self::FileTooLarge => StatusCode::PAYLOAD_TOO_LARGE,

            // 500 Internal Server Error
            Self::DatabaseError
            | Self::ConfigError
            | Self::FileStorageFailed => StatusCode::INTERNAL_SERVER_ERROR,

            // 400 Bad Request (default for validation errors)
            _ => StatusCode::BAD_REQUEST,
        }
    }
}
