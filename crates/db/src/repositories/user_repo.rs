//! Repository for the `users` table.

use facility_core::entities;
use facility_core::error::CoreError;
use facility_core::pagination::{Page, PageRequest};
use facility_core::types::DbId;
use facility_core::validation::validate_format;
use sqlx::PgPool;

use crate::error::StoreResult;
use crate::models::user::{CreateUser, UpdateUser, User};
use crate::repositories::{count_live, soft_delete_row};

const COLUMNS: &str = "id, name, email, deleted_at, created_at, updated_at";

/// Provides CRUD operations for users.
pub struct UserRepo;

impl UserRepo {
    /// Insert a new user. Emails are unique among live users.
    pub async fn create(pool: &PgPool, input: &CreateUser) -> StoreResult<User> {
        input.check()?;
        let query = format!(
            "INSERT INTO users (name, email)
             VALUES ($1, $2)
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(&input.name)
            .bind(&input.email)
            .fetch_one(pool)
            .await?;
        tracing::info!(user_id = user.id, "User created");
        Ok(user)
    }

    /// Find a user by its ID. Excludes soft-deleted rows.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find a user by ID, including soft-deleted rows. Reports keep their
    /// assignee after the user is removed.
    pub async fn find_by_id_include_deleted(
        pool: &PgPool,
        id: DbId,
    ) -> Result<Option<User>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM users WHERE id = $1");
        sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list(pool: &PgPool, page: PageRequest) -> Result<Page<User>, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let total = count_live(&mut conn, "users", None).await?;
        let query = format!(
            "SELECT {COLUMNS} FROM users WHERE deleted_at IS NULL
             ORDER BY id LIMIT $1 OFFSET $2"
        );
        let rows = sqlx::query_as::<_, User>(&query)
            .bind(page.limit())
            .bind(page.offset())
            .fetch_all(&mut *conn)
            .await?;
        Ok(Page::new(rows, total, page))
    }

    pub async fn update(pool: &PgPool, id: DbId, input: &UpdateUser) -> StoreResult<User> {
        validate_format(input)?;
        let mut tx = pool.begin().await?;

        let query =
            format!("SELECT {COLUMNS} FROM users WHERE id = $1 AND deleted_at IS NULL FOR UPDATE");
        let mut user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
            .ok_or(CoreError::NotFound {
                entity: entities::USER,
                id,
            })?;
        user.apply(input);

        let query = format!(
            "UPDATE users SET name = $2, email = $3, updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let user = sqlx::query_as::<_, User>(&query)
            .bind(id)
            .bind(&user.name)
            .bind(&user.email)
            .fetch_one(&mut *tx)
            .await?;
        tx.commit().await?;

        tracing::info!(user_id = id, "User updated");
        Ok(user)
    }

    /// Soft-delete a user. Reports assigned to the user keep the assignment.
    pub async fn soft_delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let mut conn = pool.acquire().await?;
        let deleted = soft_delete_row(&mut conn, "users", id).await?;
        if deleted {
            tracing::info!(user_id = id, "User soft-deleted");
        }
        Ok(deleted)
    }
}
