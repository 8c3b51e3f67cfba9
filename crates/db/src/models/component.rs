//! Component entity model and DTOs.
//!
//! A component always belongs to a category and optionally sits in a room.

use facility_core::error::CoreError;
use facility_core::patch::{
    deserialize_non_empty, deserialize_nullable, merge_id, merge_nullable_id, merge_num,
    merge_str,
};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A component row from the `components` table.
#[derive(Debug, Clone, FromRow)]
pub struct Component {
    pub id: DbId,
    pub room_id: Option<DbId>,
    pub category_id: DbId,
    pub code: String,
    pub name: String,
    pub brand: String,
    pub specification: String,
    pub procurement_year: i32,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new component.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateComponent {
    /// Optional; non-positive ids are treated as absent.
    #[serde(default)]
    pub room_id: Option<DbId>,
    #[serde(default)]
    pub category_id: DbId,
    #[serde(default)]
    #[validate(length(min = 1, max = 100))]
    pub code: String,
    #[serde(default)]
    #[validate(length(min = 2, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(length(max = 255))]
    pub brand: String,
    #[serde(default)]
    pub specification: String,
    #[serde(default)]
    pub procurement_year: i32,
}

impl CreateComponent {
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .id("category_id", self.category_id)
            .text("code", &self.code)
            .text("name", &self.name)
            .check()?;
        validate_format(self)
    }

    /// The room to place the component in, if one was given.
    pub fn room_id(&self) -> Option<DbId> {
        self.room_id.filter(|id| *id > 0)
    }
}

/// DTO for updating an existing component. All fields are optional.
///
/// `room_id` is tri-state: absent leaves the room unchanged, `null` takes the
/// component out of its room, a value moves it.
#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateComponent {
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub room_id: Option<Option<DbId>>,
    pub category_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 1, max = 100))]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 2, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(max = 255))]
    pub brand: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub specification: Option<String>,
    pub procurement_year: Option<i32>,
}

impl Component {
    pub fn apply(&mut self, input: &UpdateComponent) {
        merge_nullable_id(&mut self.room_id, input.room_id);
        merge_id(&mut self.category_id, input.category_id);
        merge_str(&mut self.code, &input.code);
        merge_str(&mut self.name, &input.name);
        merge_str(&mut self.brand, &input.brand);
        merge_str(&mut self.specification, &input.specification);
        merge_num(&mut self.procurement_year, input.procurement_year);
    }
}

/// Body of `PUT /components/{id}/assign-room`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignRoom {
    #[serde(default)]
    pub room_id: DbId,
}

/// Component as returned to clients. Timestamps are Unix seconds.
#[derive(Debug, Clone, Serialize)]
pub struct ComponentResponse {
    pub id: DbId,
    pub room_id: Option<DbId>,
    pub category_id: DbId,
    pub code: String,
    pub name: String,
    pub brand: String,
    pub specification: String,
    pub procurement_year: i32,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Component> for ComponentResponse {
    fn from(c: Component) -> Self {
        Self {
            id: c.id,
            room_id: c.room_id,
            category_id: c.category_id,
            code: c.code,
            name: c.name,
            brand: c.brand,
            specification: c.specification,
            procurement_year: c.procurement_year,
            created_at: c.created_at.timestamp(),
            updated_at: c.updated_at.timestamp(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn pump() -> Component {
        Component {
            id: 7,
            room_id: Some(2),
            category_id: 1,
            code: "PMP-01".into(),
            name: "Water pump".into(),
            brand: "Grundfos".into(),
            specification: "CR 5-10".into(),
            procurement_year: 2019,
            deleted_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn omitted_room_leaves_room_unchanged() {
        let patch: UpdateComponent = serde_json::from_str(r#"{"name": "Booster pump"}"#).unwrap();
        let mut c = pump();
        c.apply(&patch);
        assert_eq!(c.room_id, Some(2));
        assert_eq!(c.name, "Booster pump");
    }

    #[test]
    fn explicit_null_room_unassigns() {
        let patch: UpdateComponent = serde_json::from_str(r#"{"room_id": null}"#).unwrap();
        let mut c = pump();
        c.apply(&patch);
        assert_eq!(c.room_id, None);
    }

    #[test]
    fn negative_category_is_not_provided() {
        let patch: UpdateComponent =
            serde_json::from_str(r#"{"category_id": -3, "name": "Booster pump"}"#).unwrap();
        let mut c = pump();
        c.apply(&patch);
        assert_eq!(c.category_id, 1);
        assert_eq!(c.name, "Booster pump");
    }

    #[test]
    fn zero_year_and_empty_brand_are_ignored() {
        let patch: UpdateComponent =
            serde_json::from_str(r#"{"procurement_year": 0, "brand": ""}"#).unwrap();
        let mut c = pump();
        c.apply(&patch);
        assert_eq!(c.procurement_year, 2019);
        assert_eq!(c.brand, "Grundfos");
    }

    #[test]
    fn non_positive_room_on_create_is_absent() {
        let input = CreateComponent {
            room_id: Some(0),
            ..Default::default()
        };
        assert_eq!(input.room_id(), None);
    }

    #[test]
    fn create_requires_category_code_and_name() {
        let err = CreateComponent::default().check().unwrap_err();
        assert_eq!(err.to_string(), "category_id, code, and name are required");
    }
}
