//! Room entity model and DTOs.

use facility_core::error::CoreError;
use facility_core::patch::{deserialize_non_empty, merge_id, merge_str};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

use crate::models::building::BuildingResponse;
use crate::models::floor::FloorResponse;

/// A room row from the `rooms` table.
#[derive(Debug, Clone, FromRow)]
pub struct Room {
    pub id: DbId,
    pub floor_id: DbId,
    pub code: String,
    pub name: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A room joined with its floor and that floor's building.
#[derive(Debug, Clone, FromRow)]
pub struct RoomWithFloor {
    #[sqlx(flatten)]
    pub room: Room,
    pub floor_building_id: DbId,
    pub floor_number: i32,
    pub floor_name: String,
    pub floor_created_at: Timestamp,
    pub floor_updated_at: Timestamp,
    pub building_code: String,
    pub building_name: String,
    pub building_location: String,
    pub building_created_at: Timestamp,
    pub building_updated_at: Timestamp,
}

/// DTO for creating a new room.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateRoom {
    #[serde(default)]
    pub floor_id: DbId,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 255))]
    pub name: String,
}

impl CreateRoom {
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .id("floor_id", self.floor_id)
            .text("code", &self.code)
            .text("name", &self.name)
            .check()?;
        validate_format(self)
    }
}

/// DTO for updating an existing room. All fields are optional.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateRoom {
    pub floor_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 1, max = 100))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,
}

impl Room {
    pub fn apply(&mut self, input: &UpdateRoom) {
        merge_id(&mut self.floor_id, input.floor_id);
        merge_str(&mut self.code, &input.code);
        merge_str(&mut self.name, &input.name);
    }
}

/// Room as returned to clients. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize)]
pub struct RoomResponse {
    pub id: DbId,
    pub floor_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub floor: Option<FloorResponse>,
    pub code: String,
    pub name: String,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Room> for RoomResponse {
    fn from(r: Room) -> Self {
        Self {
            id: r.id,
            floor_id: r.floor_id,
            floor: None,
            code: r.code,
            name: r.name,
            created_at: r.created_at.timestamp(),
            updated_at: r.updated_at.timestamp(),
        }
    }
}

impl From<RoomWithFloor> for RoomResponse {
    fn from(row: RoomWithFloor) -> Self {
        let building = BuildingResponse {
            id: row.floor_building_id,
            code: row.building_code,
            name: row.building_name,
            location: row.building_location,
            created_at: row.building_created_at.timestamp(),
            updated_at: row.building_updated_at.timestamp(),
        };
        let floor = FloorResponse {
            id: row.room.floor_id,
            building_id: row.floor_building_id,
            building: Some(building),
            floor_number: row.floor_number,
            name: row.floor_name,
            created_at: row.floor_created_at.timestamp(),
            updated_at: row.floor_updated_at.timestamp(),
        };
        let mut response = RoomResponse::from(row.room);
        response.floor = Some(floor);
        response
    }
}
