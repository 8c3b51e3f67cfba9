//! Domain model structs and DTOs.
//!
//! Each submodule contains:
//! - A `FromRow` entity struct matching the database row
//! - A `Deserialize` create DTO with its required-field and format checks
//! - A `Deserialize` update DTO (all `Option` fields) plus the merge that
//!   applies it to a loaded row
//! - A `Serialize` response DTO in the shape clients consume

pub mod building;
pub mod component;
pub mod component_category;
pub mod floor;
pub mod report;
pub mod room;
pub mod user;
