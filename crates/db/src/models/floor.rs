//! Floor entity model and DTOs.

use facility_core::error::CoreError;
use facility_core::patch::{deserialize_non_empty, merge_id, merge_num, merge_str};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::building::BuildingResponse;

/// A floor row from the `floors` table.
#[derive(Debug, Clone, FromRow)]
pub struct Floor {
    pub id: DbId,
    pub building_id: DbId,
    pub number: i32,
    pub name: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A floor joined with the building it belongs to.
#[derive(Debug, Clone, FromRow)]
pub struct FloorWithBuilding {
    #[sqlx(flatten)]
    pub floor: Floor,
    pub building_code: String,
    pub building_name: String,
    pub building_location: String,
    pub building_created_at: Timestamp,
    pub building_updated_at: Timestamp,
}

/// DTO for creating a new floor.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateFloor {
    #[serde(default)]
    pub building_id: DbId,
    #[serde(default)]
    pub floor_number: i32,
    #[serde(default)]
    #[validate(length(min = 2, max = 255))]
    pub name: String,
}

impl CreateFloor {
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .id("building_id", self.building_id)
            .number("floor_number", self.floor_number)
            .text("name", &self.name)
            .check()?;
        validate_format(self)
    }
}

/// DTO for updating an existing floor. All fields are optional.
///
/// A provided `building_id` moves the floor to another building; the target
/// must exist.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateFloor {
    pub building_id: Option<DbId>,
    pub floor_number: Option<i32>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,
}

impl Floor {
    pub fn apply(&mut self, input: &UpdateFloor) {
        merge_id(&mut self.building_id, input.building_id);
        merge_num(&mut self.number, input.floor_number);
        merge_str(&mut self.name, &input.name);
    }
}

/// Floor as returned to clients. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize)]
pub struct FloorResponse {
    pub id: DbId,
    pub building_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<BuildingResponse>,
    pub floor_number: i32,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Floor> for FloorResponse {
    fn from(f: Floor) -> Self {
        Self {
            id: f.id,
            building_id: f.building_id,
            building: None,
            floor_number: f.number,
            name: f.name,
            created_at: f.created_at.timestamp(),
            updated_at: f.updated_at.timestamp(),
        }
    }
}

impl From<FloorWithBuilding> for FloorResponse {
    fn from(row: FloorWithBuilding) -> Self {
        let building = BuildingResponse {
            id: row.floor.building_id,
            code: row.building_code,
            name: row.building_name,
            location: row.building_location,
            created_at: row.building_created_at.timestamp(),
            updated_at: row.building_updated_at.timestamp(),
        };
        let mut response = FloorResponse::from(row.floor);
        response.building = Some(building);
        response
    }
}
