//! HTTP handlers, one module per resource.
//!
//! Handlers stay thin: extract, call the repository, map the row into its
//! response DTO and wrap it in the envelope.

pub mod building;
pub mod component;
pub mod component_category;
pub mod floor;
pub mod report;
pub mod room;
pub mod user;
