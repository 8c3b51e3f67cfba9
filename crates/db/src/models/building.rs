//! Building entity model and DTOs.

use facility_core::error::CoreError;
use facility_core::patch::{deserialize_non_empty, merge_str};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A building row from the `buildings` table.
#[derive(Debug, Clone, FromRow)]
pub struct Building {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub location: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new building.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateBuilding {
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 500))]
    pub location: String,
}

impl CreateBuilding {
    /// Required fields first, then field formats.
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .text("code", &self.code)
            .text("name", &self.name)
            .check()?;
        validate_format(self)
    }
}

/// DTO for updating an existing building. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateBuilding {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 1, max = 100))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(max = 500))]
    pub location: Option<String>,
}

impl Building {
    /// Merge the provided fields of `input` into this row.
    pub fn apply(&mut self, input: &UpdateBuilding) {
        merge_str(&mut self.code, &input.code);
        merge_str(&mut self.name, &input.name);
        merge_str(&mut self.location, &input.location);
    }
}

/// Building as returned to clients. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize)]
pub struct BuildingResponse {
    pub id: DbId,
    pub code: String,
    pub name: String,
    pub location: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Building> for BuildingResponse {
    fn from(b: Building) -> Self {
        Self {
            id: b.id,
            code: b.code,
            name: b.name,
            location: b.location,
            created_at: b.created_at.timestamp(),
            updated_at: b.updated_at.timestamp(),
        }
    }
}
