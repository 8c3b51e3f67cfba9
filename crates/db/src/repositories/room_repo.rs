//! Repository for the `rooms` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::validate_format;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::room::{CreateRoom, Room, RoomWithFloor, UpdateRoom};
use crate::repositories::{count_live, require_live, soft_delete_children, soft_delete_row};

const COLUMNS: &str = "id, floor_id, code, name, deleted_at, created_at, updated_at";

/// Room columns plus the floor and building each room sits in.
const JOINED_COLUMNS: &str = "r.id, r.floor_id, r.code, r.name, r.deleted_at, \
     r.created_at, r.updated_at, \
     f.building_id AS floor_building_id, f.number AS floor_number, f.name AS floor_name, \
     f.created_at AS floor_created_at, f.updated_at AS floor_updated_at, \
     b.code AS building_code, b.name AS building_name, b.location AS building_location, \
     b.created_at AS building_created_at, b.updated_at AS building_updated_at";

/// Provides CRUD operations for rooms.
pub struct RoomRepo;

impl RoomRepo {
    /// Insert a new room on a live floor.
    pub async fn create(pool: &PgPool, input: &CreateRoom) -> StoreResult<Room> {
        input.check()?;
        let mut tx = pool.begin().await?;
        require_live(&mut tx, "floors", entities::FLOOR, input.floor_id).await?;

        let query = format!(
            "INSERT INTO rooms (floor_id, code, name)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(input.floor_id)
            .bind(&input.code)
            .bind(&input.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(room_id = room.id, floor_id = room.floor_id, "Room created");
        Ok(room)
    }

    /// Find a room by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Room>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List live rooms with their floor and building embedded.
    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Page<RoomWithFloor>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "rooms", None).await?;
        let query = format!(
            "SELECT {JOINED_COLUMNS}
             FROM rooms r
             JOIN floors f ON f.id = r.floor_id
             JOIN buildings b ON b.id = f.building_id
             WHERE r.deleted_at IS NULL
             ORDER BY r.id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, RoomWithFloor>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// List the live rooms on one floor. The floor must be live.
    pub async fn list_by_floor(
        pool: &PgPool,
        floor_id: DbId,
        page: PageRequest,
    ) -> StoreResult<Page<Room>> {
        let mut conn = pool.acquire().await?;
        require_live(&mut conn, "floors", entities::FLOOR, floor_id).await?;
        let total = count_live(&mut conn, "rooms", Some(("floor_id", floor_id))).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM rooms
             WHERE floor_id = $1 AND deleted_at IS NULL
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Room>(&query)
            .bind(floor_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// Update a room. Moving it to another floor requires that floor to be
    /// live.
    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateRoom) -> StoreResult<Room> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let query =
            format!("SELECT {COLUMNS} FROM rooms WHERE id = $1 AND deleted_at IS NULL FOR UPDATE");
        let mut room = sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::ROOM,
                id,
            })?;
        let previous_floor = room.floor_id;
        room.apply(input);
        if room.floor_id != previous_floor {
            require_live(&mut tx, "floors", entities::FLOOR, room.floor_id).await?;
        }

        let query = format!(
            "UPDATE rooms SET floor_id = $2, code = $3, name = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let room = sqlx::query_as::<_, Room>(&query)
            .bind(id)
            .bind(room.floor_id)
            .bind(&room.code)
            .bind(&room.name)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(room_id = id, "Room updated");
        Ok(room)
    }

    /// Soft-delete a room and the components placed in it.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if !soft_delete_row(&mut tx, "rooms", id).await? {
            return Ok(false);
        }
        let components = soft_delete_children(&mut tx, "components", "room_id", &[id]).await?;
        tx.commit().await?;

        tracing::info!(room_id = id, components = components.len(), "Room soft-deleted");
        Ok(true)
    }
}
