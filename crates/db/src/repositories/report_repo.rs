//! Repository for the `reports` table.
//!
//! Reports have no tombstone: they are removed with [`ReportRepo::hard_delete`]
//! and keep referencing rooms, components and users after those are
//! soft-deleted.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::RequiredFields;
use sqlx::{PgConnection, PgPool};

use crate::error::StoreResult;
use crate::models::report::{CreateReport, Report, UpdateReport};
use crate::repositories::require_live;

const COLUMNS: &str = "id, name, room_id, component_id, user_id, status, created_at, updated_at";

/// Provides CRUD and assignment operations for reports.
pub struct ReportRepo;

impl ReportRepo {
    /// File a new report against a live room and component, optionally
    /// assigned to a live user.
    pub async fn create(pool: &PgPool, input: &CreateReport) -> StoreResult<Report> {
        let status = input.check()?;
        let user_id = input.user_id();
        let mut tx = pool.begin().await?;
        require_live(&mut tx, "rooms", entities::ROOM, input.room_id).await?;
        require_live(&mut tx, "components", entities::COMPONENT, input.component_id).await?;
        if let Some(user_id) = user_id {
            require_live(&mut tx, "users", entities::USER, user_id).await?;
        }

        let query = format!(
            "INSERT INTO reports (name, room_id, component_id, user_id, status)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(&input.name)
            .bind(input.room_id)
            .bind(input.component_id)
            .bind(user_id)
            .bind(status)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(report_id = report.id, status = %report.status, "Report created");
        Ok(report)
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Report>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1");
        sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Page<Report>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM reports")
            .fetch_one(&mut *conn)
            .await?;
        let query = format!("SELECT {COLUMNS} FROM reports ORDER BY id LIMIT $1 OFFSET $2");
        let rows = sqlx::query_as::<_, Report>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// Update a report. Any status may be set from any other; changed room,
    /// component or user references must be live.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateReport) -> StoreResult<Report> {
        let mut tx = pool.begin().await?;

        let mut report = Self::lock(&mut tx, id).await?;
        let previous = report.clone();
        report.apply(input)?;
        if report.room_id != previous.room_id {
            require_live(&mut tx, "rooms", entities::ROOM, report.room_id).await?;
        }
        if report.component_id != previous.component_id {
            require_live(&mut tx, "components", entities::COMPONENT, report.component_id).await?;
        }
        if let Some(user_id) = report.user_id.filter(|u| Some(*u) != previous.user_id) {
            require_live(&mut tx, "users", entities::USER, user_id).await?;
        }

        let query = format!(
            "UPDATE reports SET
                name = $2, room_id = $3, component_id = $4, user_id = $5, status = $6,
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(&report.name)
            .bind(report.room_id)
            .bind(report.component_id)
            .bind(report.user_id)
            .bind(report.status)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        if report.status != previous.status {
            tracing::info!(
                report_id = id,
                from = %previous.status,
                to = %report.status,
                "Report status changed"
            );
        }
        tracing::info!(report_id = id, "Report updated");
        Ok(report)
    }

    /// Assign a report to a user. The report is resolved first, then the
    /// user.
    pub async fn assign_user(pool: &PgPool, id: DbId, user_id: DbId) -> StoreResult<Report> {
        RequiredFields::new().id("user_id", user_id).check()?;
        let mut tx = pool.begin().await?;
        Self::lock(&mut tx, id).await?;
        require_live(&mut tx, "users", entities::USER, user_id).await?;

        let query = format!(
            "UPDATE reports SET user_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(report_id = id, user_id, "Report assigned");
        Ok(report)
    }

    /// Permanently delete a report. Returns `true` if a row was removed.
    pub async fn hard_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM reports WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        let deleted = result.rows_affected() > 0;
        if deleted {
            tracing::info!(report_id = id, "Report deleted");
        }
        Ok(deleted)
    }

    async fn lock(conn: &mut PgConnection, id: DbId) -> StoreResult<Report> {
        let query = format!("SELECT {COLUMNS} FROM reports WHERE id = $1 FOR UPDATE");
        let report = sqlx::query_as::<_, Report>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::REPORT,
                id,
            })?;
        Ok(report)
    }
}
