//! Repository for the `component_categories` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::validate_format;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::component_category::{
    ComponentCategory, CreateComponentCategory, UpdateComponentCategory,
};
use crate::repositories::{count_live, soft_delete_children, soft_delete_row};

const COLUMNS: &str = "id, code, name, description, deleted_at, created_at, updated_at";

/// Provides CRUD operations for component categories.
pub struct ComponentCategoryRepo;

impl ComponentCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        input: &CreateComponentCategory,
    ) -> StoreResult<ComponentCategory> {
        input.check()?;
        let query = format!(
            "INSERT INTO component_categories (code, name, description)
             VALUES ($1, $2, $3)
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, ComponentCategory>(&query)
            .bind(&input.code)
            .bind(&input.name)
            .bind(&input.description)
            .fetch_one(pool)
            .await?;
        tracing::info!(category_id = category.id, code = %category.code, "Component category created");
        Ok(category)
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<ComponentCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM component_categories WHERE id = $1 AND deleted_at IS NULL"
        );
        sqlx::query_as::<_, ComponentCategory>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(
        pool: &PgPool,
        page: PageRequest,
    ) -> Result<Page<ComponentCategory>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "component_categories", None).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM component_categories WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, ComponentCategory>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateComponentCategory,
    ) -> StoreResult<ComponentCategory> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let query = format!(
            "SELECT {COLUMNS} FROM component_categories
             WHERE id = $1 AND deleted_at IS NULL FOR UPDATE"
        );
        let mut category = sqlx::query_as::<_, ComponentCategory>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::COMPONENT_CATEGORY,
                id,
            })?;
        category.apply(input);

        let query = format!(
            "UPDATE component_categories
             SET code = $2, name = $3, description = $4, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let category = sqlx::query_as::<_, ComponentCategory>(&query)
            .bind(id)
            .bind(&category.code)
            .bind(&category.name)
            .bind(&category.description)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(category_id = id, "Component category updated");
        Ok(category)
    }

    /// Soft-delete a category and every component filed under it.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut tx = pool.begin().await?;
        if !soft_delete_row(&mut tx, "component_categories", id).await? {
            return Ok(false);
        }
        let components =
            soft_delete_children(&mut tx, "components", "category_id", &[id]).await?;
        tx.commit().await?;

        tracing::info!(
            category_id = id,
            components = components.len(),
            "Component category soft-deleted"
        );
        Ok(true)
    }
}
