//! Repository for the `buildings` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::validate_format;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::building::{Building, CreateBuilding, UpdateBuilding};
use crate::repositories::{count_live, soft_delete_children, soft_delete_row};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, code, name, location, deleted_at, created_at, updated_at";

/// Provides CRUD operations for buildings.
pub struct BuildingRepo;

impl BuildingRepo {
    /// Insert a new building, returning the created row.
    ///
    /// A live building with the same code yields [`CoreError::Duplicate`].
    pub async fn create(pool: &PgPool, input: &CreateBuilding) -> StoreResult<Building> {
        input.check()?;
        let query = format!(
            "INSERT INTO buildings (code, name, location)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let building = sqlx::query_as::<_, Building>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.location)
            .fetch_one(pool)
            .await?;
        tracing::info!(building_id = building.id, code = %building.code, "Building created");
        Ok(building)
    }

    /// Find a building by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a building by ID, including soft-deleted rows. Used to resolve
    /// historical links from rows that outlived their building.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Building>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM buildings WHERE id = $1");
        sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live buildings in id order, one page at a time.
    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Page<Building>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "buildings", None).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM buildings WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Building>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// Update a building. Only provided fields in `input` are applied.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateBuilding) -> StoreResult<Building> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM buildings WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        let mut building = sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::BUILDING,
                id,
            })?;
        building.apply(input);

        let query = format!(
            "UPDATE buildings SET code = $2, name = $3, location = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let building = sqlx::query_as::<_, Building>(&query)
            .bind(id)
            .bind(&building.code)
            .bind(&building.name)
            .bind(&building.location)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(building_id = id, "Building updated");
        Ok(building)
    }

    /// Soft-delete a building together with its floors, their rooms, and the
    /// components in those rooms. Returns `true` if the building was live.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if !soft_delete_row(&mut tx, "buildings", id).await? {
            return Ok(false);
        }
        let floors = soft_delete_children(&mut tx, "floors", "building_id", &[id]).await?;
        let rooms = soft_delete_children(&mut tx, "rooms", "floor_id", &floors).await?;
        let components = soft_delete_children(&mut tx, "components", "room_id", &rooms).await?;
        tx.commit().await?;

        tracing::info!(
            building_id = id,
            floors = floors.len(),
            rooms = rooms.len(),
            components = components.len(),
            "Building soft-deleted"
        );
        Ok(true)
    }
}
