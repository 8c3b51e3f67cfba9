//! Partial-update helpers.
//!
//! Update DTOs carry every field as `Option<T>`. A scalar field only
//! overwrites the stored value when it is *provided*: `Some` and non-empty
//! for strings, `Some` and non-zero for numbers. `Some("")` and `Some(0)`
//! behave exactly like omission, so scalar fields can never be reset to an
//! empty value through an update.
//!
//! Nullable references are tri-state (`Option<Option<T>>`): absent leaves
//! the value alone, an explicit JSON `null` clears it, a value replaces it.

use serde::{Deserialize, Deserializer};

use crate::types::DbId;

/// The provided string, if any. Empty strings count as omitted.
pub fn provided_str(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

/// The provided number, if any. Zero counts as omitted.
pub fn provided_num<T>(value: Option<T>) -> Option<T>
where
    T: Copy + Default + PartialEq,
{
    value.filter(|v| *v != T::default())
}

/// Overwrite `target` when `value` is a provided string.
pub fn merge_str(target: &mut String, value: &Option<String>) {
    if let Some(v) = provided_str(value) {
        *target = v.to_string();
    }
}

/// Overwrite `target` when `value` is a provided (non-zero) number.
pub fn merge_num<T>(target: &mut T, value: Option<T>)
where
    T: Copy + Default + PartialEq,
{
    if let Some(v) = provided_num(value) {
        *target = v;
    }
}

/// Overwrite a required reference when `value` is a positive id.
pub fn merge_id(target: &mut DbId, value: Option<DbId>) {
    if let Some(id) = value.filter(|id| *id > 0) {
        *target = id;
    }
}

/// Apply a tri-state nullable patch to `target`.
pub fn merge_nullable<T: Copy>(target: &mut Option<T>, value: Option<Option<T>>) {
    if let Some(v) = value {
        *target = v;
    }
}

/// Apply a tri-state reference patch. A non-positive id counts as omitted.
pub fn merge_nullable_id(target: &mut Option<DbId>, value: Option<Option<DbId>>) {
    merge_nullable(target, value.filter(|v| v.map_or(true, |id| id > 0)));
}

/// Deserialize a nullable patch field so that an explicit `null` is
/// distinguishable from an absent field.
///
/// Use together with `#[serde(default)]`: absent → `None`,
/// `null` → `Some(None)`, value → `Some(Some(value))`.
pub fn deserialize_nullable<'de, D, T>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

/// Deserialize an optional string, mapping `""` to `None`.
///
/// Lets field-format validation skip empty strings in update requests,
/// which are treated as "not provided".
pub fn deserialize_non_empty<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.is_empty()))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    struct Patch {
        #[serde(default, deserialize_with = "deserialize_nullable")]
        user_id: Option<Option<i64>>,
        #[serde(default, deserialize_with = "deserialize_non_empty")]
        name: Option<String>,
    }

    // -- merge_str -----------------------------------------------------------

    #[test]
    fn merge_str_overwrites_with_value() {
        let mut name = "Tower".to_string();
        merge_str(&mut name, &Some("Annex".into()));
        assert_eq!(name, "Annex");
    }

    #[test]
    fn merge_str_ignores_none_and_empty() {
        let mut name = "Tower".to_string();
        merge_str(&mut name, &None);
        merge_str(&mut name, &Some(String::new()));
        assert_eq!(name, "Tower");
    }

    // -- merge_num -----------------------------------------------------------

    #[test]
    fn merge_num_ignores_zero() {
        let mut year = 2019;
        merge_num(&mut year, Some(0));
        assert_eq!(year, 2019);
        merge_num(&mut year, None);
        assert_eq!(year, 2019);
    }

    #[test]
    fn merge_num_overwrites_non_zero_including_negative() {
        let mut floor = 3;
        merge_num(&mut floor, Some(-1));
        assert_eq!(floor, -1);
    }

    // -- merge_id ------------------------------------------------------------

    #[test]
    fn merge_id_ignores_zero_and_negative() {
        let mut building: DbId = 1;
        merge_id(&mut building, Some(0));
        merge_id(&mut building, Some(-5));
        merge_id(&mut building, None);
        assert_eq!(building, 1);
        merge_id(&mut building, Some(4));
        assert_eq!(building, 4);
    }

    // -- merge_nullable ------------------------------------------------------

    #[test]
    fn merge_nullable_tri_state() {
        let mut user: Option<i64> = Some(4);
        merge_nullable(&mut user, None);
        assert_eq!(user, Some(4));
        merge_nullable(&mut user, Some(Some(7)));
        assert_eq!(user, Some(7));
        merge_nullable(&mut user, Some(None));
        assert_eq!(user, None);
    }

    #[test]
    fn merge_nullable_id_ignores_non_positive_ids() {
        let mut room: Option<DbId> = Some(2);
        merge_nullable_id(&mut room, Some(Some(0)));
        assert_eq!(room, Some(2));
        merge_nullable_id(&mut room, Some(None));
        assert_eq!(room, None);
    }

    // -- deserializers -------------------------------------------------------

    #[test]
    fn absent_nullable_field_is_none() {
        let patch: Patch = serde_json::from_str("{}").unwrap();
        assert_eq!(patch.user_id, None);
        assert_eq!(patch.name, None);
    }

    #[test]
    fn explicit_null_is_some_none() {
        let patch: Patch = serde_json::from_str(r#"{"user_id": null}"#).unwrap();
        assert_eq!(patch.user_id, Some(None));
    }

    #[test]
    fn nullable_value_is_some_some() {
        let patch: Patch = serde_json::from_str(r#"{"user_id": 3}"#).unwrap();
        assert_eq!(patch.user_id, Some(Some(3)));
    }

    #[test]
    fn empty_string_deserializes_as_none() {
        let patch: Patch = serde_json::from_str(r#"{"name": ""}"#).unwrap();
        assert_eq!(patch.name, None);
        let patch: Patch = serde_json::from_str(r#"{"name": "L2"}"#).unwrap();
        assert_eq!(patch.name.as_deref(), Some("L2"));
    }
}
