//! User entity model and DTOs. Users exist to be assigned to reports.

use facility_core::error::CoreError;
use facility_core::patch::{deserialize_non_empty, merge_str};
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::{validate_format, RequiredFields};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use validator::Validate;

/// A user row from the `users` table.
#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: DbId,
    pub name: String,
    pub email: String,
    pub deleted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct CreateUser {
    #[serde(default)]
    #[validate(length(min = 1, max = 255))]
    pub name: String,
    #[serde(default)]
    #[validate(email)]
    pub email: String,
}

impl CreateUser {
    pub fn check(&self) -> Result<(), CoreError> {
        RequiredFields::new()
            .text("name", &self.name)
            .text("email", &self.email)
            .check()?;
        validate_format(self)
    }
}

#[derive(Debug, Clone, Default, Deserialize, Validate)]
pub struct UpdateUser {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(length(min = 1, max = 255))]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    #[validate(email)]
    pub email: Option<String>,
}

impl User {
    pub fn apply(&mut self, input: &UpdateUser) {
        merge_str(&mut self.name, &input.name);
        merge_str(&mut self.email, &input.email);
    }
}

/// User as returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct UserResponse {
    pub id: DbId,
    pub name: String,
    pub email: String,
}

impl From<User> for UserResponse {
    fn from(u: User) -> Self {
        Self {
            id: u.id,
            name: u.name,
            email: u.email,
        }
    }
}
