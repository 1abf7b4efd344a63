//! Supplier Model

use crate::validation::{
    PHONE_RE, SUPPLIER_EMAIL_RE, normalize_lower, normalize_title, validate_country,
    validate_phone_digits,
};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Supplier entity
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Supplier {
    pub id: i64,
    pub name: String,
    pub description: String,
    pub phone: String,
    pub country: String,
    pub email: String,
    pub address: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Supplier {
    /// `"Email: a@b.com | Tel: 099..."`, empty parts omitted
    pub fn contact_info(&self) -> String {
        let mut parts = Vec::with_capacity(2);
        if !self.email.is_empty() {
            parts.push(format!("Email: {}", self.email));
        }
        if !self.phone.is_empty() {
            parts.push(format!("Tel: {}", self.phone));
        }
        parts.join(" | ")
    }

    /// `"Ecuador, Av. Amazonas 123"`, empty parts omitted
    pub fn location_info(&self) -> String {
        [self.country.as_str(), self.address.as_str()]
            .into_iter()
            .filter(|s| !s.is_empty())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Create / update supplier payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct SupplierInput {
    #[validate(length(
        min = 3,
        max = 200,
        message = "El nombre del proveedor debe tener entre 3 y 200 caracteres."
    ))]
    pub name: String,
    #[validate(length(
        min = 10,
        message = "La descripción debe ser más detallada (al menos 10 caracteres)."
    ))]
    pub description: String,
    #[validate(
        regex(path = *PHONE_RE, message = "Ingrese un número de teléfono válido."),
        custom(function = "validate_phone_digits")
    )]
    pub phone: String,
    #[validate(
        length(
            min = 2,
            max = 100,
            message = "El nombre del país debe tener entre 2 y 100 caracteres."
        ),
        custom(function = "validate_country")
    )]
    pub country: String,
    #[validate(
        email(message = "Introduzca una dirección de correo electrónico válida."),
        regex(path = *SUPPLIER_EMAIL_RE, message = "Ingrese un correo electrónico válido."),
        length(max = 254, message = "El correo no puede exceder 254 caracteres.")
    )]
    pub email: String,
    #[validate(length(
        min = 10,
        message = "La dirección debe ser más específica (al menos 10 caracteres)."
    ))]
    pub address: String,
}

impl SupplierInput {
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_title(&self.name),
            description: self.description.trim().to_string(),
            phone: self.phone.trim().to_string(),
            country: normalize_title(&self.country),
            email: normalize_lower(&self.email),
            address: self.address.trim().to_string(),
        }
    }

    /// Case-insensitive uniqueness key for the name
    pub fn name_key(&self) -> String {
        self.name.to_lowercase()
    }
}

impl From<&Supplier> for SupplierInput {
    fn from(supplier: &Supplier) -> Self {
        Self {
            name: supplier.name.clone(),
            description: supplier.description.clone(),
            phone: supplier.phone.clone(),
            country: supplier.country.clone(),
            email: supplier.email.clone(),
            address: supplier.address.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_input() -> SupplierInput {
        SupplierInput {
            name: "autopartes andinas".to_string(),
            description: "Distribuidor de repuestos originales".to_string(),
            phone: "+593-2-2234567".to_string(),
            country: "ecuador".to_string(),
            email: " Ventas@AutopartesAndinas.com ".to_string(),
            address: "Av. Amazonas N34-120, Quito".to_string(),
        }
    }

    #[test]
    fn test_valid_supplier() {
        let input = valid_input().normalized();
        assert_eq!(input.name, "Autopartes Andinas");
        assert_eq!(input.country, "Ecuador");
        assert_eq!(input.email, "ventas@autopartesandinas.com");
        assert!(input.validate().is_ok());
    }

    #[test]
    fn test_short_phone_rejected() {
        let mut input = valid_input().normalized();
        input.phone = "123".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("phone"));
    }

    #[test]
    fn test_phone_with_letters_rejected() {
        let mut input = valid_input().normalized();
        input.phone = "099-ABC-4567".to_string();
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_country_with_digits_rejected() {
        let mut input = valid_input().normalized();
        input.country = "Ecuador 2".to_string();
        let errors = input.validate().unwrap_err();
        let country = errors.field_errors()["country"];
        assert_eq!(
            country[0].message.as_deref(),
            Some("El país solo puede contener letras, espacios y guiones.")
        );
    }

    #[test]
    fn test_email_without_tld_rejected() {
        let mut input = valid_input().normalized();
        input.email = "ventas@autopartes".to_string();
        let errors = input.validate().unwrap_err();
        assert!(errors.field_errors().contains_key("email"));
    }

    #[test]
    fn test_contact_and_location() {
        let supplier = Supplier {
            id: 1,
            name: "Autopartes Andinas".to_string(),
            description: "Distribuidor".to_string(),
            phone: "022234567".to_string(),
            country: "Ecuador".to_string(),
            email: "ventas@andinas.com".to_string(),
            address: "Av. Amazonas".to_string(),
            created_at: 0,
            updated_at: 0,
        };
        assert_eq!(
            supplier.contact_info(),
            "Email: ventas@andinas.com | Tel: 022234567"
        );
        assert_eq!(supplier.location_info(), "Ecuador, Av. Amazonas");

        let bare = Supplier {
            phone: String::new(),
            address: String::new(),
            ..supplier
        };
        assert_eq!(bare.contact_info(), "Email: ventas@andinas.com");
        assert_eq!(bare.location_info(), "Ecuador");
    }
}
