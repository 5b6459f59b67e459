//! # Attribute Codec Helpers
//!
//! Free functions that read a typed value out of a [`PropertyBag`] and write
//! one back. They hold no state.
//!
//! ## Read policy
//!
//! The store is schema-flexible and may hold partial or stale data. A getter
//! returns the caller's default when the name is absent, when the value is the
//! wrong variant, or when a primitive's declared kind and payload disagree. It
//! never fails.
//!
//! ## Write policy
//!
//! A setter inserts only when the typed value is present. `None` and the empty
//! string leave the bag untouched, so "cleared" and "never set" encode the same
//! way.

use chrono::{DateTime, Utc};

use crate::enums::EnumDomain;
use crate::property::{EnumValue, PrimitiveValue, PropertyBag, PropertyValue};

fn primitive<'a>(bag: &'a PropertyBag, name: &str) -> Option<&'a PrimitiveValue> {
    bag.get(name).and_then(PropertyValue::as_primitive)
}

pub fn get_string(bag: &PropertyBag, name: &str, default: &str) -> String {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_str)
        .unwrap_or(default)
        .to_string()
}

pub fn get_date(
    bag: &PropertyBag,
    name: &str,
    default: Option<DateTime<Utc>>,
) -> Option<DateTime<Utc>> {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_date)
        .or(default)
}

pub fn get_int(bag: &PropertyBag, name: &str, default: Option<i32>) -> Option<i32> {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_int)
        .or(default)
}

pub fn get_long(bag: &PropertyBag, name: &str, default: Option<i64>) -> Option<i64> {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_long)
        .or(default)
}

pub fn get_bool(bag: &PropertyBag, name: &str, default: bool) -> bool {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_bool)
        .unwrap_or(default)
}

pub fn get_double(bag: &PropertyBag, name: &str, default: Option<f64>) -> Option<f64> {
    primitive(bag, name)
        .and_then(PrimitiveValue::as_double)
        .or(default)
}

/// The stored enum value, unresolved. Resolution against a domain is the
/// mapper's job because an unknown value there is an error, not a default.
pub fn get_enum<'a>(bag: &'a PropertyBag, name: &str) -> Option<&'a EnumValue> {
    bag.get(name).and_then(PropertyValue::as_enum)
}

/// String elements of an array attribute. Non-string elements are skipped.
pub fn get_string_array(bag: &PropertyBag, name: &str) -> Vec<String> {
    bag.get(name)
        .and_then(PropertyValue::as_array)
        .map(|elements| {
            elements
                .iter()
                .filter_map(PropertyValue::as_str)
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

/// String entries of a map attribute, in stored order. Non-string entries are
/// skipped.
pub fn get_string_map(bag: &PropertyBag, name: &str) -> Vec<(String, String)> {
    bag.get(name)
        .and_then(PropertyValue::as_map)
        .map(|entries| {
            entries
                .iter()
                .filter_map(|(key, value)| value.as_str().map(|v| (key.to_string(), v.to_string())))
                .collect()
        })
        .unwrap_or_default()
}

pub fn put_string(bag: &mut PropertyBag, name: &str, value: Option<&str>) {
    if let Some(value) = value.filter(|v| !v.is_empty()) {
        bag.insert(name, PropertyValue::string(value));
    }
}

/// Stored as epoch milliseconds; anything finer is dropped.
pub fn put_date(bag: &mut PropertyBag, name: &str, value: Option<DateTime<Utc>>) {
    if let Some(value) = value {
        bag.insert(name, PropertyValue::date(value));
    }
}

pub fn put_int(bag: &mut PropertyBag, name: &str, value: Option<i32>) {
    if let Some(value) = value {
        bag.insert(name, PropertyValue::int(value));
    }
}

pub fn put_long(bag: &mut PropertyBag, name: &str, value: Option<i64>) {
    if let Some(value) = value {
        bag.insert(name, PropertyValue::long(value));
    }
}

pub fn put_bool(bag: &mut PropertyBag, name: &str, value: Option<bool>) {
    if let Some(value) = value {
        bag.insert(name, PropertyValue::boolean(value));
    }
}

/// Write a domain value as ordinal plus symbolic name.
pub fn put_enum<E: EnumDomain>(bag: &mut PropertyBag, name: &str, value: Option<E>) {
    if let Some(value) = value {
        put_enum_value(bag, name, value.ordinal(), value.symbolic_name());
    }
}

pub fn put_enum_value(bag: &mut PropertyBag, name: &str, ordinal: i32, symbolic_name: &str) {
    bag.insert(name, PropertyValue::enumeration(ordinal, symbolic_name));
}

pub fn put_string_array(bag: &mut PropertyBag, name: &str, values: &[String]) {
    if values.is_empty() {
        return;
    }
    let elements = values.iter().map(PropertyValue::string).collect();
    bag.insert(name, PropertyValue::array(elements));
}

pub fn put_string_map(bag: &mut PropertyBag, name: &str, entries: &[(String, String)]) {
    if entries.is_empty() {
        return;
    }
    let map = entries
        .iter()
        .map(|(key, value)| (key.clone(), PropertyValue::string(value)))
        .collect();
    bag.insert(name, PropertyValue::map(map));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::RetentionBasis;
    use crate::property::{PrimitiveData, PrimitiveKind};
    use chrono::TimeZone;

    fn bag() -> PropertyBag {
        [
            ("name", PropertyValue::string("alice")),
            ("count", PropertyValue::int(80)),
            ("total", PropertyValue::long(1 << 40)),
            ("flag", PropertyValue::boolean(true)),
            ("ratio", PropertyValue::double(0.5)),
            (
                "when",
                PropertyValue::date(Utc.with_ymd_and_hms(2031, 6, 1, 0, 0, 0).unwrap()),
            ),
            ("basis", PropertyValue::enumeration(2, "FISCAL")),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn getters_read_matching_values() {
        let bag = bag();
        assert_eq!(get_string(&bag, "name", ""), "alice");
        assert_eq!(get_int(&bag, "count", None), Some(80));
        assert_eq!(get_long(&bag, "total", None), Some(1 << 40));
        assert_eq!(get_long(&bag, "count", None), Some(80));
        assert!(get_bool(&bag, "flag", false));
        assert_eq!(get_double(&bag, "ratio", None), Some(0.5));
        assert_eq!(
            get_date(&bag, "when", None),
            Some(Utc.with_ymd_and_hms(2031, 6, 1, 0, 0, 0).unwrap())
        );
        assert_eq!(get_enum(&bag, "basis"), Some(&EnumValue::new(2, "FISCAL")));
    }

    #[test]
    fn getters_default_when_absent() {
        let bag = PropertyBag::new();
        assert_eq!(get_string(&bag, "name", "fallback"), "fallback");
        assert_eq!(get_int(&bag, "count", Some(7)), Some(7));
        assert_eq!(get_date(&bag, "when", None), None);
        assert!(!get_bool(&bag, "flag", false));
        assert_eq!(get_enum(&bag, "basis"), None);
        assert!(get_string_array(&bag, "list").is_empty());
    }

    #[test]
    fn getters_default_on_variant_mismatch() {
        let bag = bag();
        // asking for the wrong type never errors
        assert_eq!(get_string(&bag, "count", ""), "");
        assert_eq!(get_int(&bag, "name", None), None);
        assert_eq!(get_int(&bag, "total", Some(-1)), Some(-1));
        assert_eq!(get_date(&bag, "count", None), None);
        assert_eq!(get_enum(&bag, "name"), None);
        assert_eq!(get_string(&bag, "basis", "x"), "x");
    }

    #[test]
    fn getters_default_on_kind_payload_disagreement() {
        let mut bag = PropertyBag::new();
        bag.insert(
            "name",
            PropertyValue::Primitive(PrimitiveValue::new(
                PrimitiveKind::String,
                PrimitiveData::Integer(5),
            )),
        );
        bag.insert(
            "count",
            PropertyValue::Primitive(PrimitiveValue::new(
                PrimitiveKind::Int,
                PrimitiveData::Text("80".into()),
            )),
        );
        bag.insert(
            "when",
            PropertyValue::Primitive(PrimitiveValue::new(
                PrimitiveKind::Date,
                PrimitiveData::Text("2031-06-01".into()),
            )),
        );
        assert_eq!(get_string(&bag, "name", "d"), "d");
        assert_eq!(get_int(&bag, "count", None), None);
        assert_eq!(get_date(&bag, "when", None), None);
    }

    #[test]
    fn setters_skip_absent_values() {
        let mut bag = PropertyBag::new();
        put_string(&mut bag, "a", None);
        put_string(&mut bag, "b", Some(""));
        put_int(&mut bag, "c", None);
        put_date(&mut bag, "d", None);
        put_enum::<RetentionBasis>(&mut bag, "e", None);
        put_string_array(&mut bag, "f", &[]);
        put_string_map(&mut bag, "g", &[]);
        assert!(bag.is_empty());
    }

    #[test]
    fn long_and_bool_setters() {
        let mut bag = PropertyBag::new();
        put_long(&mut bag, "total", None);
        put_bool(&mut bag, "flag", None);
        assert!(bag.is_empty());

        put_long(&mut bag, "total", Some(-(1 << 40)));
        put_bool(&mut bag, "flag", Some(false));
        assert_eq!(get_long(&bag, "total", None), Some(-(1 << 40)));
        // a stored false is not the default
        assert!(!get_bool(&bag, "flag", true));
        assert_eq!(bag.get("flag"), Some(&PropertyValue::boolean(false)));
        // longs never pass as ints
        assert_eq!(get_int(&bag, "total", None), None);
    }

    #[test]
    fn put_date_keeps_milliseconds() {
        let mut bag = PropertyBag::new();
        let when = Utc.timestamp_opt(1_900_000_000, 123_456_789).unwrap();
        put_date(&mut bag, "when", Some(when));
        assert_eq!(
            get_date(&bag, "when", None),
            Some(Utc.timestamp_millis_opt(1_900_000_000_123).unwrap())
        );
    }

    #[test]
    fn put_enum_writes_ordinal_and_name() {
        let mut bag = PropertyBag::new();
        put_enum(&mut bag, "basis", Some(RetentionBasis::Fiscal));
        assert_eq!(bag.get("basis"), Some(&PropertyValue::enumeration(2, "FISCAL")));
    }

    #[test]
    fn string_collections_round_trip() {
        let mut bag = PropertyBag::new();
        let items = vec!["x".to_string(), "y".to_string()];
        let pairs = vec![("k".to_string(), "v".to_string())];
        put_string_array(&mut bag, "list", &items);
        put_string_map(&mut bag, "props", &pairs);
        assert_eq!(get_string_array(&bag, "list"), items);
        assert_eq!(get_string_map(&bag, "props"), pairs);
    }

    #[test]
    fn string_array_skips_foreign_elements() {
        let mut bag = PropertyBag::new();
        bag.insert(
            "list",
            PropertyValue::array(vec![
                PropertyValue::string("x"),
                PropertyValue::int(3),
                PropertyValue::string("y"),
            ]),
        );
        assert_eq!(get_string_array(&bag, "list"), vec!["x", "y"]);
    }
}
