//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async operations that
//! accept `&PgPool` as the first argument. Writes that reference a parent
//! run inside one transaction: the parent row is locked `FOR SHARE` while
//! it is checked, so it cannot be soft-deleted before the write commits.

use facility_core::error::CoreError;
use facility_core::types::DbId;
use sqlx::PgConnection;

use crate::error::StoreResult;

pub mod building_repo;
pub mod component_category_repo;
pub mod component_repo;
pub mod floor_repo;
pub mod report_repo;
pub mod room_repo;
pub mod user_repo;

pub use building_repo::BuildingRepo;
pub use component_category_repo::ComponentCategoryRepo;
pub use component_repo::ComponentRepo;
pub use floor_repo::FloorRepo;
pub use report_repo::ReportRepo;
pub use room_repo::RoomRepo;
pub use user_repo::UserRepo;

/// Fail with [`CoreError::NotFound`] unless `table` holds a live row `id`.
///
/// The row is locked `FOR SHARE` until the surrounding transaction ends.
pub(crate) async fn require_live(
    conn: &mut PgConnection,
    table: &str,
    entity: &'static str,
    id: DbId,
) -> StoreResult<()> {
    let query = format!("SELECT id FROM {table} WHERE id = $1 AND deleted_at IS NULL FOR SHARE");
    let found = sqlx::query_scalar::<_, DbId>(&query)
        .bind(id)
        .fetch_optional(&mut *conn)
        .await?;
    match found {
        Some(_) => Ok(()),
        None => Err(CoreError::NotFound { entity, id }.into()),
    }
}

/// Tombstone a single live row. Returns `true` if a row was marked deleted.
pub(crate) async fn soft_delete_row(
    conn: &mut PgConnection,
    table: &str,
    id: DbId,
) -> Result<bool, sqlx::Error> {
    let query = format!(
        "UPDATE {table} SET deleted_at = NOW() WHERE id = $1 AND deleted_at IS NULL"
    );
    let result = sqlx::query(&query).bind(id).execute(&mut *conn).await?;
    Ok(result.rows_affected() > 0)
}

/// Tombstone every live row of `table` whose `parent_column` is one of
/// `parent_ids`, returning the ids that were marked.
pub(crate) async fn soft_delete_children(
    conn: &mut PgConnection,
    table: &str,
    parent_column: &str,
    parent_ids: &[DbId],
) -> Result<Vec<DbId>, sqlx::Error> {
    if parent_ids.is_empty() {
        return Ok(Vec::new());
    }
    let query = format!(
        "UPDATE {table} SET deleted_at = NOW() \
         WHERE {parent_column} = ANY($1) AND deleted_at IS NULL \
         RETURNING id"
    );
    sqlx::query_scalar::<_, DbId>(&query)
        .bind(parent_ids)
        .fetch_all(&mut *conn)
        .await
}

/// Count the live rows of `table`, optionally restricted to one parent.
pub(crate) async fn count_live(
    conn: &mut PgConnection,
    table: &str,
    parent: Option<(&str, DbId)>,
) -> Result<i64, sqlx::Error> {
    match parent {
        Some((column, id)) => {
            let query = format!(
                "SELECT COUNT(*) FROM {table} WHERE {column} = $1 AND deleted_at IS NULL"
            );
            sqlx::query_scalar::<_, i64>(&query)
                .bind(id)
                .fetch_one(&mut *conn)
                .await
        }
        None => {
            let query = format!("SELECT COUNT(*) FROM {table} WHERE deleted_at IS NULL");
            sqlx::query_scalar::<_, i64>(&query)
                .fetch_one(&mut *conn)
                .await
        }
    }
}
