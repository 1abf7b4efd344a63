//! Employee Model

use crate::validation::{
    CEDULA_RE, normalize_lower, normalize_title, normalize_upper, validate_first_name,
    validate_last_name,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Employee type used when the form leaves it blank
pub const DEFAULT_EMPLOYEE_TYPE: &str = "Empleado";

/// Employee entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Employee {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    /// National id (10 digits)
    pub cedula: String,
    pub employee_code: String,
    pub employee_type: String,
    /// Photo path relative to the media root
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Employee {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    pub fn has_image(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Create / update employee payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct EmployeeInput {
    #[validate(
        length(min = 2, max = 100, message = "El nombre debe tener entre 2 y 100 caracteres."),
        custom(function = "validate_first_name")
    )]
    pub first_name: String,
    #[validate(
        length(min = 2, max = 100, message = "El apellido debe tener entre 2 y 100 caracteres."),
        custom(function = "validate_last_name")
    )]
    pub last_name: String,
    #[validate(
        email(message = "Introduzca una dirección de correo electrónico válida."),
        length(max = 254, message = "El correo no puede exceder 254 caracteres.")
    )]
    pub email: String,
    #[validate(regex(path = *CEDULA_RE, message = "La cédula debe contener exactamente 10 dígitos."))]
    pub cedula: String,
    #[validate(length(
        min = 3,
        max = 20,
        message = "El código de empleado debe tener entre 3 y 20 caracteres."
    ))]
    pub employee_code: String,
    #[validate(length(
        min = 1,
        max = 50,
        message = "El tipo de trabajador no puede exceder 50 caracteres."
    ))]
    pub employee_type: String,
}

impl EmployeeInput {
    pub fn normalized(self) -> Self {
        let employee_type = self.employee_type.trim();
        Self {
            first_name: normalize_title(&self.first_name),
            last_name: normalize_title(&self.last_name),
            email: normalize_lower(&self.email),
            cedula: self.cedula.trim().to_string(),
            employee_code: normalize_upper(&self.employee_code),
            employee_type: if employee_type.is_empty() {
                DEFAULT_EMPLOYEE_TYPE.to_string()
            } else {
                employee_type.to_string()
            },
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

impl From<&Employee> for EmployeeInput {
    fn from(employee: &Employee) -> Self {
        Self {
            first_name: employee.first_name.clone(),
            last_name: employee.last_name.clone(),
            email: employee.email.clone(),
            cedula: employee.cedula.clone(),
            employee_code: employee.employee_code.clone(),
            employee_type: employee.employee_type.clone(),
        }
    }
}
