//! Human-readable entity names used in error messages.
//!
//! These appear verbatim in `"<entity> not found"` responses, so they are
//! lowercase and match the wording clients already match against.

pub const BUILDING: &str = "building";
pub const FLOOR: &str = "floor";
pub const ROOM: &str = "room";
pub const COMPONENT_CATEGORY: &str = "component category";
pub const COMPONENT: &str = "component";
pub const REPORT: &str = "report";
pub const USER: &str = "user";
