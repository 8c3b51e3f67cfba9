//! Incident report model and DTOs.
//!
//! Reports are filed against a room and a component and may be assigned to a
//! user. Unlike the hierarchy entities they are hard-deleted, and their
//! timestamps are serialized as RFC 3339 strings.

use chrono::SecondsFormat;
use facility_core::error::CoreError;
use facility_core::patch::{
    deserialize_non_empty, deserialize_nullable, merge_id, merge_nullable_id, merge_str,
    provided_str,
};
use facility_core::report_status::ReportStatus;
use facility_core::types::{DbId, Timestamp};
use facility_core::validation::RequiredFields;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A report row from the `reports` table.
#[derive(Debug, Clone, FromRow)]
pub struct Report {
    pub id: DbId,
    pub name: String,
    pub room_id: DbId,
    pub component_id: DbId,
    pub user_id: Option<DbId>,
    pub status: ReportStatus,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for filing a new report.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateReport {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub room_id: DbId,
    #[serde(default)]
    pub component_id: DbId,
    #[serde(default)]
    pub user_id: Option<DbId>,
    /// One of `PENDING`, `IN_PROGRESS`, `COMPLETED`; defaults to `PENDING`.
    #[serde(default)]
    pub status: Option<String>,
}

impl CreateReport {
    /// Check required fields and resolve the initial status.
    pub fn check(&self) -> Result<ReportStatus, CoreError> {
        RequiredFields::new()
            .text("name", &self.name)
            .id("room_id", self.room_id)
            .id("component_id", self.component_id)
            .check()?;
        ReportStatus::parse_or_default(self.status.as_deref())
    }

    /// The assignee, if one was given. Non-positive ids are treated as absent.
    pub fn user_id(&self) -> Option<DbId> {
        self.user_id.filter(|id| *id > 0)
    }
}

/// DTO for updating a report. All fields are optional.
///
/// `user_id` is tri-state: absent leaves the assignee unchanged, `null`
/// unassigns, a value reassigns.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpdateReport {
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub name: Option<String>,
    pub room_id: Option<DbId>,
    pub component_id: Option<DbId>,
    #[serde(default, deserialize_with = "deserialize_nullable")]
    pub user_id: Option<Option<DbId>>,
    #[serde(default, deserialize_with = "deserialize_non_empty")]
    pub status: Option<String>,
}

impl Report {
    /// Merge the provided fields of `input` into this row.
    ///
    /// Fails without modifying the row when `status` is not a known literal.
    pub fn apply(&mut self, input: &UpdateReport) -> Result<(), CoreError> {
        let status = match provided_str(&input.status) {
            Some(s) => Some(s.parse::<ReportStatus>()?),
            None => None,
        };
        if let Some(next) = status {
            if !self.status.can_transition_to(next) {
                return Err(CoreError::Validation(format!(
                    "status cannot change from {} to {next}",
                    self.status
                )));
            }
            self.status = next;
        }
        merge_str(&mut self.name, &input.name);
        merge_id(&mut self.room_id, input.room_id);
        merge_id(&mut self.component_id, input.component_id);
        merge_nullable_id(&mut self.user_id, input.user_id);
        Ok(())
    }
}

/// Body of `PUT /reports/{id}/assign-user`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AssignUser {
    #[serde(default)]
    pub user_id: DbId,
}

/// Report as returned to clients. Timestamps are RFC 3339 strings.
#[derive(Debug, Clone, Serialize)]
pub struct ReportResponse {
    pub id: DbId,
    pub name: String,
    pub room_id: DbId,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<DbId>,
    pub component_id: DbId,
    pub status: ReportStatus,
    pub created_at: String,
    pub updated_at: String,
}

impl From<Report> for ReportResponse {
    fn from(r: Report) -> Self {
        Self {
            id: r.id,
            name: r.name,
            room_id: r.room_id,
            user_id: r.user_id,
            component_id: r.component_id,
            status: r.status,
            created_at: r.created_at.to_rfc3339_opts(SecondsFormat::Secs, true),
            updated_at: r.updated_at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}
