//! Form error collection

use std::collections::BTreeMap;
use validator::ValidationErrors;

/// Message for a required field left blank
pub const REQUIRED: &str = "Este campo es obligatorio.";

/// Page-level message shown when a submission is rejected
pub const CORRECT_ERRORS: &str = "Por favor corrija los errores en el formulario.";

/// Field-scoped and form-scoped messages of one submission.
///
/// Fields are keyed by their HTML input name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FormErrors {
    fields: BTreeMap<&'static str, Vec<String>>,
    form: Vec<String>,
}

impl FormErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &'static str, message: impl Into<String>) {
        self.fields.entry(field).or_default().push(message.into());
    }

    pub fn add_form(&mut self, message: impl Into<String>) {
        self.form.push(message.into());
    }

    pub fn has(&self, field: &str) -> bool {
        self.fields.contains_key(field)
    }

    pub fn field(&self, field: &str) -> &[String] {
        self.fields.get(field).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn form(&self) -> &[String] {
        &self.form
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty() && self.form.is_empty()
    }

    /// Merge declarative rule failures.
    ///
    /// `rename` maps a struct field to its input name. Only the first failing
    /// rule of each field is reported, and fields that already carry an error
    /// (blank or unparsable) are skipped.
    pub fn merge_validation(
        &mut self,
        result: Result<(), ValidationErrors>,
        rename: impl Fn(&str) -> &'static str,
    ) {
        let Err(errors) = result else {
            return;
        };

        let mut pending = Vec::new();
        for (field, list) in errors.field_errors() {
            let name = rename(&field);
            if self.has(name) {
                continue;
            }
            if let Some(first) = list.first() {
                let message = first
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| first.code.to_string());
                pending.push((name, message));
            }
        }
        for (name, message) in pending {
            self.add(name, message);
        }
    }
}
