//! Facility core library.
//!
//! Pure domain logic shared by the store and HTTP layers: identifier types,
//! the error taxonomy, pagination policy, required-field validation,
//! partial-update helpers and the report status enum. Nothing here performs
//! I/O.

pub mod entities;
pub mod error;
pub mod pagination;
pub mod patch;
pub mod report_status;
pub mod types;
pub mod validation;
