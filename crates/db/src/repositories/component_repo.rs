//! Repository for the `components` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::{validate_format, RequiredFields};
use sqlx::{PgConnection, PgPool};

use crate::error::StoreResult;
use crate::models::component::{Component, CreateComponent, UpdateComponent};
use crate::repositories::{count_live, require_live, soft_delete_row};

const COLUMNS: &str = "id, room_id, category_id, code, name, brand, specification, \
     procurement_year, deleted_at, created_at, updated_at";

/// Provides CRUD operations for components.
pub struct ComponentRepo;

impl ComponentRepo {
    /// Insert a new component. The category must be live, and so must the
    /// room when one is given.
    pub async fn create(pool: &PgPool, input: &CreateComponent) -> StoreResult<Component> {
        input.check()?;
        let room_id = input.room_id();
        let mut tx = pool.begin().await?;
        require_live(
            &mut tx,
            "component_categories",
            entities::COMPONENT_CATEGORY,
            input.category_id,
        )
        .await?;
        if let Some(room_id) = room_id {
            require_live(&mut tx, "rooms", entities::ROOM, room_id).await?;
        }

        let query = format!(
            "INSERT INTO components
                (room_id, category_id, code, name, brand, specification, procurement_year)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(room_id)
            .bind(input.category_id)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.brand)
            .bind(&input.specification)
            .bind(input.procurement_year)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(
            component_id = component.id,
            category_id = component.category_id,
            room_id = ?component.room_id,
            "Component created"
        );
        Ok(component)
    }

    /// Find a component by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Component>, sqlx::Error> {
        let query =
            format!("SELECT {COLUMNS} FROM components WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a component by ID, including soft-deleted rows. Reports keep
    /// pointing at components after they are retired.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<Component>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM components WHERE id = $1");
        sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Page<Component>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "components", None).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM components WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, Component>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// List the live components placed in one room. The room must be live.
    pub async fn list_by_room(
        pool: &PgPool,
        room_id: DbId,
        page: PageRequest,
    ) -> StoreResult<Page<Component>> {
        let mut conn = pool.acquire().await?;
        require_live(&mut conn, "rooms", entities::ROOM, room_id).await?;
        Self::list_by_parent(&mut conn, "room_id", room_id, page).await
    }

    /// List the live components of one category. The category must be live.
    pub async fn list_by_category(
        pool: &PgPool,
        category_id: DbId,
        page: PageRequest,
    ) -> StoreResult<Page<Component>> {
        let mut conn = pool.acquire().await?;
        require_live(
            &mut conn,
            "component_categories",
            entities::COMPONENT_CATEGORY,
            category_id,
        )
        .await?;
        Self::list_by_parent(&mut conn, "category_id", category_id, page).await
    }

    async fn list_by_parent(
        conn: &mut PgConnection,
        column: &str,
        parent_id: DbId,
        page: PageRequest,
    ) -> StoreResult<Page<Component>> {
        let total = count_live(conn, "components", Some((column, parent_id))).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM components
             WHERE {column} = $1 AND deleted_at IS NULL
             ORDER BY id LIMIT $2 OFFSET $3"
        );
        let rows = sqlx::query_as::<_, Component>(&query)
            .bind(parent_id)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    /// Update a component. A changed category or room must be live; an
    /// explicit `null` room takes the component out of its room.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponent,
    ) -> StoreResult<Component> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let mut component = Self::lock_live(&mut tx, id).await?;
        let previous = (component.category_id, component.room_id);
        component.apply(input);
        if component.category_id != previous.0 {
            require_live(
                &mut tx,
                "component_categories",
                entities::COMPONENT_CATEGORY,
                component.category_id,
            )
            .await?;
        }
        if let Some(room_id) = component.room_id.filter(|r| Some(*r) != previous.1) {
            require_live(&mut tx, "rooms", entities::ROOM, room_id).await?;
        }

        let query = format!(
            "UPDATE components SET
                room_id = $2, category_id = $3, code = $4, name = $5, brand = $6,
                specification = $7, procurement_year = $8, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(component.room_id)
            .bind(component.category_id)
            .bind(&component.code)
            .bind(&component.name)
            .bind(&component.brand)
            .bind(&component.specification)
            .bind(component.procurement_year)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(component_id = id, "Component updated");
        Ok(component)
    }

    /// Place a component in a room. The component is resolved first, then
    /// the room.
    pub async fn assign_room(pool: &PgPool, id: DbId, room_id: DbId) -> StoreResult<Component> {
        RequiredFields::new().id("room_id", room_id).check()?;
        let mut tx = pool.begin().await?;
        Self::lock_live(&mut tx, id).await?;
        require_live(&mut tx, "rooms", entities::ROOM, room_id).await?;

        let query = format!(
            "UPDATE components SET room_id = $2, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .bind(room_id)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(component_id = id, room_id, "Component assigned to room");
        Ok(component)
    }

    /// Soft-delete a component. Reports filed against it are kept.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let deleted = soft_delete_row(&mut conn, "components", id).await?;
        if deleted {
            tracing::info!(component_id = id, "Component soft-deleted");
        }
        Ok(deleted)
    }

    async fn lock_live(conn: &mut PgConnection, id: DbId) -> StoreResult<Component> {
        let query = format!(
            "SELECT {COLUMNS} FROM components WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        let component = sqlx::query_as::<_, Component>(&query)
            .bind(id)
            .fetch_optional(&mut *conn)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::COMPONENT,
                id,
            })?;
        Ok(component)
    }
}
