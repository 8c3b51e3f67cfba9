//! Repository for the `floors` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::validate_format;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::floor::{CreateFloor, Floor, FloorWithBuilding, UpdateFloor};
use crate::repositories::{count_live, require_live, soft_delete_children, soft_delete_row};

const COLUMNS: &str = "id, building_id, number, name, deleted_at, created_at, updated_at";

/// Floor columns prefixed with `f.` plus the owning building's columns.
const JOINED_COLUMNS: &str = "f.id, f.building_id, f.number, f.name, f.deleted_at, \
     f.created_at, f.updated_at, \
     b.code AS building_code, b.name AS building_name, b.location AS building_location, \
     b.created_at AS building_created_at, b.updated_at AS building_updated_at";

/// Provides CRUD operations for floors.
pub struct FloorRepo;

impl FloorRepo {
    /// Insert a new floor under a live building.
    pub async fn create(pool: &PgPool, input: &CreateFloor) -> StoreResult<Floor> {
        input.check()?;
        let mut tx = pool.begin().await?;
        require_live(&mut tx, "buildings", entities::BUILDING, input.building_id).await?;

        let query = format!(
            "INSERT INTO floors (building_id, number, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let floor = sqlx::query_as::<_, Floor>(&query)
            .bind(input.building_id)
            .bind(input.floor_number)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(floor_id = floor.id, building_id = floor.building_id, "Floor created");
        Ok(floor)
    }

    /// Find a floor by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Floor>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM floors WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live floors with their building embedded.
    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
    ) -> Result<Page<FloorWithBuilding>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "floors", None).await?;
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM floors f
             JOIN buildings b ON b.id = f.building_id
             WHERE f.deleted_at IS NULL
             ORDER BY f.id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, FloorWithBuilding>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// List the live floors of one building. The building must be live.
    pub async fn list_by_building(
        pool: &PgPool,
        building_id: DbId,
        page: PageRequest,
    ) -> StoreResult<Page<Floor>> {
        let mut conn = pool.acquire().await?;
        require_live(&mut conn, "buildings", entities::BUILDING, building_id).await?;
        let total = count_live(&mut conn, "floors", Some(("building_id", building_id))).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM floors
             WHERE building_id = $1 AND deleted_at IS NULL
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Floor>(&query)
            .bind(building_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// Update a floor. Moving it to another building requires that building
    /// to be live.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateFloor) -> StoreResult<Floor> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let query =
            format!("SELECT {COLUMNS} FROM floors WHERE id = $1 AND deleted_at IS NULL FOR UPDATE");
        let mut floor = sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::FLOOR,
                id,
            })?;
        let previous_building = floor.building_id;
        floor.apply(input);
        if floor.building_id != previous_building {
            require_live(&mut tx, "buildings", entities::BUILDING, floor.building_id).await?;
        }

        let query = format!(
            "UPDATE floors SET building_id = $2, number = $3, name = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let floor = sqlx::query_as::<_, Floor>(&query)
            .bind(id)
            .bind(floor.building_id)
            .bind(floor.number)
            .bind(&floor.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(floor_id = id, "Floor updated");
        Ok(floor)
    }

    /// Soft-delete a floor with its rooms and their components.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if !soft_delete_row(&mut tx, "floors", id).await? {
            return Ok(false);
        }
        let rooms = soft_delete_children(&mut tx, "rooms", "floor_id", &[id]).await?;
        let components = soft_delete_children(&mut tx, "components", "room_id", &rooms).await?;
        tx.commit().await?;

        tracing::info!(
            floor_id = id,
            rooms = rooms.len(),
            components = components.len(),
            "Floor soft-deleted"
        );
        Ok(true)
    }
}
