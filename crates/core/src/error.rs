use crate::types::DbId;

/// Domain errors surfaced by store operations.
///
/// Everything else (connection loss, unexpected SQL failures) is an internal
/// error and is carried by the layer that talks to the database.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// A required field is missing or a value is malformed.
    #[error("{0}")]
    Validation(String),

    /// The entity, or a parent it references, does not exist or is
    /// soft-deleted.
    #[error("{entity} not found")]
    NotFound { entity: &'static str, id: DbId },

    /// A unique key (`code`, `email`) is already taken by a live row.
    #[error("{entity} with this {field} already exists")]
    Duplicate {
        entity: &'static str,
        field: &'static str,
    },
}
