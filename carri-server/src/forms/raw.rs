//! Raw submitted form data

use axum::extract::Multipart;
use axum::http::StatusCode;
use rust_decimal::Decimal;
use shared::error::{AppError, AppResult, ErrorCode};
use std::collections::HashMap;
use std::str::FromStr;

use super::errors::{FormErrors, REQUIRED};
use crate::services::ImageUpload;

pub const INVALID_INTEGER: &str = "Introduzca un número entero.";
pub const INVALID_NUMBER: &str = "Introduzca un número.";
pub const INVALID_CHOICE: &str = "Escoja una opción válida.";

/// Input name of the image field on multipart forms
pub const IMAGE_FIELD: &str = "imagen";

/// Text fields keyed by input name, plus the optional image part.
///
/// Also used to re-render a form with what the user typed.
#[derive(Debug, Clone, Default)]
pub struct RawForm {
    fields: HashMap<String, String>,
    image: Option<ImageUpload>,
}

impl RawForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            fields: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            image: None,
        }
    }

    pub fn from_map(fields: HashMap<String, String>) -> Self {
        Self {
            fields,
            image: None,
        }
    }

    /// Read every part of a `multipart/form-data` body
    pub async fn from_multipart(mut multipart: Multipart) -> AppResult<Self> {
        let mut form = Self::new();

        while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
            let name = field.name().unwrap_or_default().to_string();

            if field.file_name().is_some() {
                let file_name = field.file_name().map(str::to_string);
                let content_type = field.content_type().map(str::to_string);
                let bytes = field.bytes().await.map_err(multipart_error)?;
                if name == IMAGE_FIELD {
                    form.image = Some(ImageUpload {
                        file_name,
                        content_type,
                        bytes,
                    });
                }
            } else {
                let value = field.text().await.map_err(multipart_error)?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    pub fn get(&self, name: &str) -> &str {
        self.fields.get(name).map(String::as_str).unwrap_or_default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(name.into(), value.into());
    }

    pub fn image(&self) -> Option<&ImageUpload> {
        self.image.as_ref()
    }

    pub fn set_image(&mut self, image: ImageUpload) {
        self.image = Some(image);
    }

    /// The value, or a required-field error when it is blank
    pub fn required(&self, name: &'static str, errors: &mut FormErrors) -> Option<String> {
        let value = self.get(name);
        if value.trim().is_empty() {
            errors.add(name, REQUIRED);
            return None;
        }
        Some(value.to_string())
    }

    pub fn required_integer(&self, name: &'static str, errors: &mut FormErrors) -> Option<i64> {
        let value = self.required(name, errors)?;
        match value.trim().parse::<i64>() {
            Ok(n) => Some(n),
            Err(_) => {
                errors.add(name, INVALID_INTEGER);
                None
            }
        }
    }

    pub fn required_decimal(&self, name: &'static str, errors: &mut FormErrors) -> Option<Decimal> {
        let value = self.required(name, errors)?;
        match Decimal::from_str(value.trim()) {
            Ok(d) => Some(d),
            Err(_) => {
                errors.add(name, INVALID_NUMBER);
                None
            }
        }
    }

    /// A required select whose options are parsed by `parse`
    pub fn required_choice<T>(
        &self,
        name: &'static str,
        errors: &mut FormErrors,
        parse: impl Fn(&str) -> Option<T>,
    ) -> Option<T> {
        let value = self.required(name, errors)?;
        let parsed = parse(value.trim());
        if parsed.is_none() {
            errors.add(name, INVALID_CHOICE);
        }
        parsed
    }
}

fn multipart_error(err: axum::extract::multipart::MultipartError) -> AppError {
    if err.status() == StatusCode::PAYLOAD_TOO_LARGE {
        return AppError::with_message(ErrorCode::FileTooLarge, err.body_text());
    }
    AppError::invalid_request(format!("Invalid multipart body: {}", err.body_text()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required() {
        let form = RawForm::from_pairs([("nombre", "  "), ("ruc", " 1790012345001 ")]);
        let mut errors = FormErrors::new();

        assert_eq!(form.required("nombre", &mut errors), None);
        assert_eq!(form.required("falta", &mut errors), None);
        assert_eq!(
            form.required("ruc", &mut errors).as_deref(),
            Some(" 1790012345001 ")
        );
        assert_eq!(errors.field("nombre"), [REQUIRED.to_string()]);
        assert!(errors.has("falta"));
        assert!(!errors.has("ruc"));
    }

    #[test]
    fn test_numeric_parsing() {
        let form = RawForm::from_pairs([
            ("anio", "dos mil"),
            ("anio_ok", " 2010 "),
            ("precio", "12,50"),
            ("precio_ok", "12.50"),
        ]);
        let mut errors = FormErrors::new();

        assert_eq!(form.required_integer("anio", &mut errors), None);
        assert_eq!(form.required_integer("anio_ok", &mut errors), Some(2010));
        assert_eq!(form.required_decimal("precio", &mut errors), None);
        assert_eq!(
            form.required_decimal("precio_ok", &mut errors),
            Some(Decimal::new(1250, 2))
        );
        assert_eq!(errors.field("anio"), [INVALID_INTEGER.to_string()]);
        assert_eq!(errors.field("precio"), [INVALID_NUMBER.to_string()]);
    }

    #[test]
    fn test_choice() {
        let form = RawForm::from_pairs([("iva", "12")]);
        let mut errors = FormErrors::new();
        let parsed = form.required_choice("iva", &mut errors, |v| match v {
            "0" | "15" => Some(v.to_string()),
            _ => None,
        });
        assert_eq!(parsed, None);
        assert_eq!(errors.field("iva"), [INVALID_CHOICE.to_string()]);
    }
}
