//! Component category entity model and DTOs.

use facility_core::error::CoreError;
use facility_core::patch::{deserialize_non_empty, merge_str};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A row from the `component_categories` table.
#[derive(Debug, Clone, FromRow)]
pub struct ComponentCategory {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateComponentCategory {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl CreateComponentCategory {
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .text("code", &self.code)
            .text("name", &self.name)
            .check()?;
        validate_format(self)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateComponentCategory {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 1, max = 100))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub description: Option<String>,
}

impl ComponentCategory {
    pub fn apply(&mut self, input: &UpdateComponentCategory) {
        merge_str(&mut self.code, &input.code);
        merge_str(&mut self.name, &input.name);
        merge_str(&mut self.description, &input.description);
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ComponentCategoryResponse {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub description: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<ComponentCategory> for ComponentCategoryResponse {
    fn from(c: ComponentCategory) -> Self {
        Self {
            id: c.id,
            code: c.code,
            name: c.name,
            description: c.description,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}
