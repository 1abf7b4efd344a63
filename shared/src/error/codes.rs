//! Unified error codes for CarriAcces
//!
//! Error codes are organized by category:
//! - 0xxx: General errors
//! - 3xxx: Company errors
//! - 6xxx: Product errors (65xx: file upload)
//! - 7xxx: Supplier errors
//! - 8xxx: Employee errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// All error codes are represented as u16 values so they can be logged and
/// serialized compactly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Validation failed
    ValidationFailed = 2,
    /// Resource not found
    NotFound = 3,
    /// Resource already exists
    AlreadyExists = 4,
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 3xxx: Company ====================
    /// No company profile registered
    CompanyNotFound = 3001,
    /// A company profile already exists (singleton)
    CompanyAlreadyExists = 3002,
    /// RUC already registered
    CompanyRucExists = 3003,

    // ==================== 6xxx: Product ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product name already exists
    ProductNameExists = 6003,

    // ==================== 65xx: File Upload ====================
    /// File too large
    FileTooLarge = 6501,
    /// Unsupported file format (MIME type)
    UnsupportedFileFormat = 6502,
    /// File does not decode as an image
    InvalidImageFile = 6503,
    /// Empty file
    EmptyFile = 6505,
    /// Invalid file extension
    InvalidFileExtension = 6507,
    /// File storage failed
    FileStorageFailed = 6509,

    // ==================== 7xxx: Supplier ====================
    /// Supplier not found
    SupplierNotFound = 7001,
    /// Supplier name already exists
    SupplierNameExists = 7002,
    /// Supplier email already exists
    SupplierEmailExists = 7003,

    // ==================== 8xxx: Employee ====================
    /// Employee not found
    EmployeeNotFound = 8001,
    /// Employee email already exists
    EmployeeEmailExists = 8002,
    /// Employee cédula already exists
    EmployeeCedulaExists = 8003,
    /// Employee code already exists
    EmployeeCodeExists = 8004,

    // ==================== 9xxx: System ====================
    /// Database error
    DatabaseError = 9002,
    /// Configuration error
    ConfigError = 9005,
}

impl ErrorCode {
    /// Get the numeric code value
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Get the user-facing (Spanish) message for this error code
    pub const fn message(&self) -> &'static str {
        match self {
            // General
            ErrorCode::ValidationFailed => "Por favor corrija los errores en el formulario.",
            ErrorCode::NotFound => "La página solicitada no existe.",
            ErrorCode::AlreadyExists => "El registro ya existe.",
            ErrorCode::InvalidRequest => "Solicitud inválida.",

            // Company
            ErrorCode::CompanyNotFound => "No hay información de la empresa registrada.",
            ErrorCode::CompanyAlreadyExists => "Solo puede existir una empresa en el sistema.",
            ErrorCode::CompanyRucExists => "Ya existe una empresa con este RUC.",

            // Product
            ErrorCode::ProductNotFound => "El producto solicitado no existe.",
            ErrorCode::ProductNameExists => "Ya existe un producto con este nombre.",

            // File Upload
            ErrorCode::FileTooLarge => "La imagen no puede ser mayor a 5MB.",
            ErrorCode::UnsupportedFileFormat => {
                "Solo se permiten imágenes en formato JPG, PNG o WebP."
            }
            ErrorCode::InvalidImageFile => "El archivo no es una imagen válida o está corrupto.",
            ErrorCode::EmptyFile => "El archivo enviado está vacío.",
            ErrorCode::InvalidFileExtension => {
                "Tipo de archivo no permitido. Tipos permitidos: .jpg, .jpeg, .png, .webp"
            }
            ErrorCode::FileStorageFailed => "No se pudo guardar el archivo.",

            // Supplier
            ErrorCode::SupplierNotFound => "El proveedor solicitado no existe.",
            ErrorCode::SupplierNameExists => "Ya existe un proveedor con este nombre.",
            ErrorCode::SupplierEmailExists => "Ya existe un proveedor con este correo electrónico.",

            // Employee
            ErrorCode::EmployeeNotFound => "El trabajador solicitado no existe.",
            ErrorCode::EmployeeEmailExists => {
                "Ya existe un trabajador con este correo electrónico."
            }
            ErrorCode::EmployeeCedulaExists => "Ya existe un trabajador con esta cédula.",
            ErrorCode::EmployeeCodeExists => {
                "Ya existe un trabajador con este código de empleado."
            }

            // System
            ErrorCode::DatabaseError => "Error de base de datos.",
            ErrorCode::ConfigError => "Error de configuración.",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "E{:04}", self.code())
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            // General
            2 => Ok(ErrorCode::ValidationFailed),
            3 => Ok(ErrorCode::NotFound),
            4 => Ok(ErrorCode::AlreadyExists),
            5 => Ok(ErrorCode::InvalidRequest),

            // Company
            3001 => Ok(ErrorCode::CompanyNotFound),
            3002 => Ok(ErrorCode::CompanyAlreadyExists),
            3003 => Ok(ErrorCode::CompanyRucExists),

            // Product
            6001 => Ok(ErrorCode::ProductNotFound),
            6003 => Ok(ErrorCode::ProductNameExists),

            // File Upload
            6501 => Ok(ErrorCode::FileTooLarge),
            6502 => Ok(ErrorCode::UnsupportedFileFormat),
            6503 => Ok(ErrorCode::InvalidImageFile),
            6505 => Ok(ErrorCode::EmptyFile),
            6507 => Ok(ErrorCode::InvalidFileExtension),
            6509 => Ok(ErrorCode::FileStorageFailed),

            // Supplier
            7001 => Ok(ErrorCode::SupplierNotFound),
            7002 => Ok(ErrorCode::SupplierNameExists),
            7003 => Ok(ErrorCode::SupplierEmailExists),

            // Employee
            8001 => Ok(ErrorCode::EmployeeNotFound),
            8002 => Ok(ErrorCode::EmployeeEmailExists),
            8003 => Ok(ErrorCode::EmployeeCedulaExists),
            8004 => Ok(ErrorCode::EmployeeCodeExists),

            // System
            9002 => Ok(ErrorCode::DatabaseError),
            9005 => Ok(ErrorCode::ConfigError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_roundtrip_through_u16() {
        for code in [
            ErrorCode::NotFound,
            ErrorCode::CompanyAlreadyExists,
            ErrorCode::ProductNameExists,
            ErrorCode::FileTooLarge,
            ErrorCode::SupplierEmailExists,
            ErrorCode::EmployeeCodeExists,
            ErrorCode::DatabaseError,
        ] {
            assert_eq!(ErrorCode::try_from(code.code()), Ok(code));
        }
    }

    #[test]
    fn test_invalid_code() {
        assert_eq!(ErrorCode::try_from(4242), Err(InvalidErrorCode(4242)));
        assert_eq!(ErrorCode::try_from(0), Err(InvalidErrorCode(0)));
        assert_eq!(ErrorCode::try_from(6002), Err(InvalidErrorCode(6002)));
    }

    #[test]
    fn test_serde_as_number() {
        let json = serde_json::to_string(&ErrorCode::ProductNotFound).unwrap();
        assert_eq!(json, "6001");
        let code: ErrorCode = serde_json::from_str("8003").unwrap();
        assert_eq!(code, ErrorCode::EmployeeCedulaExists);
        assert!(serde_json::from_str::<ErrorCode>("12345").is_err());
    }

    #[test]
    fn test_display() {
        assert_eq!(ErrorCode::NotFound.to_string(), "E0003");
        assert_eq!(ErrorCode::SupplierNotFound.to_string(), "E7001");
    }

    #[test]
    fn test_singleton_message() {
        assert_eq!(
            ErrorCode::CompanyAlreadyExists.message(),
            "Solo puede existir una empresa en el sistema."
        );
    }
}
