//! Incident report status.
//!
//! Stored as the PostgreSQL enum `report_status` and serialized as the
//! upper-case literals `PENDING`, `IN_PROGRESS`, `COMPLETED`.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[cfg_attr(feature = "db", derive(sqlx::Type))]
#[cfg_attr(
    feature = "db",
    sqlx(type_name = "report_status", rename_all = "SCREAMING_SNAKE_CASE")
)]
pub enum ReportStatus {
    #[default]
    Pending,
    InProgress,
    Completed,
}

impl ReportStatus {
    pub const ALL: [ReportStatus; 3] = [
        ReportStatus::Pending,
        ReportStatus::InProgress,
        ReportStatus::Completed,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ReportStatus::Pending => "PENDING",
            ReportStatus::InProgress => "IN_PROGRESS",
            ReportStatus::Completed => "COMPLETED",
        }
    }

    /// Whether a report may move from `self` to `next`.
    ///
    /// No workflow order is enforced: every status may be set from every
    /// other status, including moving a completed report back to pending.
    pub fn can_transition_to(self, _next: ReportStatus) -> bool {
        true
    }

    /// Parse an optional status literal, defaulting to `PENDING` when absent
    /// or empty.
    pub fn parse_or_default(value: Option<&str>) -> Result<Self, CoreError> {
        match value {
            None | Some("") => Ok(ReportStatus::default()),
            Some(s) => s.parse(),
        }
    }
}

impl fmt::Display for ReportStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReportStatus {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReportStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| {
                CoreError::Validation(format!(
                    "status must be one of PENDING, IN_PROGRESS, COMPLETED; got '{s}'"
                ))
            })
    }
}
