//! Company Model

use crate::validation::{RUC_RE, normalize_title};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Company profile (singleton: at most one row ever exists)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "db", derive(sqlx::FromRow))]
pub struct Company {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub mission: String,
    pub vision: String,
    pub founding_year: i32,
    /// Registro Único de Contribuyente (13 digits)
    pub ruc: String,
    /// Logo path relative to the media root
    pub image: Option<String>,
    pub created_at: i64,
    pub updated_at: i64,
}

impl Company {
    pub fn has_logo(&self) -> bool {
        self.image.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// Create / update company payload
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct CompanyInput {
    #[validate(length(
        min = 3,
        max = 200,
        message = "El nombre de la empresa debe tener entre 3 y 200 caracteres."
    ))]
    pub name: String,
    #[validate(length(
        min = 10,
        message = "La dirección debe ser más específica (al menos 10 caracteres)."
    ))]
    pub address: String,
    #[validate(length(
        min = 20,
        message = "La misión debe ser más descriptiva (al menos 20 caracteres)."
    ))]
    pub mission: String,
    #[validate(length(
        min = 20,
        message = "La visión debe ser más descriptiva (al menos 20 caracteres)."
    ))]
    pub vision: String,
    #[validate(range(min = 1900, message = "El año de fundación no puede ser anterior a 1900."))]
    pub founding_year: i32,
    #[validate(regex(path = *RUC_RE, message = "El RUC debe contener exactamente 13 dígitos."))]
    pub ruc: String,
}

impl CompanyInput {
    /// Trim every text field and title-case the name
    pub fn normalized(self) -> Self {
        Self {
            name: normalize_title(&self.name),
            address: self.address.trim().to_string(),
            mission: self.mission.trim().to_string(),
            vision: self.vision.trim().to_string(),
            founding_year: self.founding_year,
            ruc: self.ruc.trim().to_string(),
        }
    }

    /// The founding year cannot lie in the future.
    pub fn check_founding_year(&self, current_year: i32) -> Result<(), String> {
        if self.founding_year > current_year {
            return Err(format!(
                "El año de fundación no puede ser mayor al año actual ({current_year})."
            ));
        }
        Ok(())
    }
}

impl From<&Company> for CompanyInput {
    fn from(company: &Company) -> Self {
        Self {
            name: company.name.clone(),
            address: company.address.clone(),
            mission: company.mission.clone(),
            vision: company.vision.clone(),
            founding_year: company.founding_year,
            ruc: company.ruc.clone(),
        }
    }
}
