//! Store-level error type.

use facility_core::entities;
use facility_core::error::CoreError;

/// PostgreSQL SQLSTATE for `unique_violation`.
const UNIQUE_VIOLATION: &str = "23505";

/// Unique indexes and the entity/field they guard.
const UNIQUE_KEYS: &[(&str, &str, &str)] = &[
    ("uq_buildings_code", entities::BUILDING, "code"),
    ("uq_rooms_code", entities::ROOM, "code"),
    ("uq_component_categories_code", entities::COMPONENT_CATEGORY, "code"),
    ("uq_components_code", entities::COMPONENT, "code"),
    ("uq_users_email", entities::USER, "email"),
];

/// Error returned by repository operations that enforce domain rules.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Validation, missing entity, or duplicate key.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Any other database failure.
    #[error("Database error: {0}")]
    Database(sqlx::Error),
}

pub type StoreResult<T> = Result<T, StoreError>;

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match duplicate_key(&err) {
            Some(core) => StoreError::Core(core),
            None => StoreError::Database(err),
        }
    }
}

/// Map a unique-index violation onto [`CoreError::Duplicate`].
fn duplicate_key(err: &sqlx::Error) -> Option<CoreError> {
    let sqlx::Error::Database(db_err) = err else {
        return None;
    };
    if db_err.code().as_deref() != Some(UNIQUE_VIOLATION) {
        return None;
    }
    let constraint = db_err.constraint().unwrap_or("unknown");
    let (entity, field) = UNIQUE_KEYS
        .iter()
        .find(|(name, _, _)| *name == constraint)
        .map(|(_, entity, field)| (*entity, *field))
        .unwrap_or(("record", "key"));
    tracing::debug!(constraint, "Unique constraint violated");
    Some(CoreError::Duplicate { entity, field })
}
