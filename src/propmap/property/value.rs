//! Tagged property values.
//!
//! [`PropertyValue`] is the closed set of shapes an attribute can take in the
//! backing store. Typed accessors return `None` whenever the value is not the
//! requested shape, or when a primitive's declared kind and its payload
//! disagree; they never panic.

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use super::bag::PropertyBag;
use super::kind::{PrimitiveData, PrimitiveKind};

/// A scalar with its declared category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PrimitiveValue {
    #[serde(rename = "primitiveDefCategory")]
    pub kind: PrimitiveKind,
    #[serde(rename = "primitiveValue")]
    pub value: PrimitiveData,
}

impl PrimitiveValue {
    pub fn new(kind: PrimitiveKind, value: PrimitiveData) -> Self {
        Self { kind, value }
    }

    pub fn string(value: impl Into<String>) -> Self {
        Self::new(PrimitiveKind::String, PrimitiveData::Text(value.into()))
    }

    pub fn int(value: i32) -> Self {
        Self::new(PrimitiveKind::Int, PrimitiveData::Integer(i64::from(value)))
    }

    pub fn long(value: i64) -> Self {
        Self::new(PrimitiveKind::Long, PrimitiveData::Integer(value))
    }

    pub fn boolean(value: bool) -> Self {
        Self::new(PrimitiveKind::Boolean, PrimitiveData::Boolean(value))
    }

    pub fn double(value: f64) -> Self {
        Self::new(PrimitiveKind::Double, PrimitiveData::Float(value))
    }

    /// Dates are stored as epoch milliseconds.
    pub fn date(value: DateTime<Utc>) -> Self {
        Self::new(
            PrimitiveKind::Date,
            PrimitiveData::Integer(value.timestamp_millis()),
        )
    }

    /// Whether the declared kind agrees with the payload.
    pub fn is_consistent(&self) -> bool {
        self.kind.accepts(&self.value)
    }

    pub fn as_str(&self) -> Option<&str> {
        match (&self.kind, &self.value) {
            (PrimitiveKind::String, PrimitiveData::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// Int-compatible kinds (`Byte`, `Short`, `Int`) whose payload fits an `i32`.
    pub fn as_int(&self) -> Option<i32> {
        match self.kind {
            PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int
                if self.is_consistent() =>
            {
                match self.value {
                    PrimitiveData::Integer(v) => i32::try_from(v).ok(),
                    _ => None,
                }
            }
            _ => None,
        }
    }

    pub fn as_long(&self) -> Option<i64> {
        match (&self.kind, &self.value) {
            (
                PrimitiveKind::Byte | PrimitiveKind::Short | PrimitiveKind::Int | PrimitiveKind::Long,
                PrimitiveData::Integer(v),
            ) if self.is_consistent() => Some(*v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match (&self.kind, &self.value) {
            (PrimitiveKind::Boolean, PrimitiveData::Boolean(v)) => Some(*v),
            _ => None,
        }
    }

    pub fn as_double(&self) -> Option<f64> {
        match (&self.kind, &self.value) {
            (PrimitiveKind::Float | PrimitiveKind::Double, PrimitiveData::Float(v)) => Some(*v),
            (PrimitiveKind::Float | PrimitiveKind::Double, PrimitiveData::Integer(v)) => {
                Some(*v as f64)
            }
            _ => None,
        }
    }

    /// A date, provided the stored millis are within chrono's range.
    pub fn as_date(&self) -> Option<DateTime<Utc>> {
        match (&self.kind, &self.value) {
            (PrimitiveKind::Date, PrimitiveData::Integer(millis)) => {
                Utc.timestamp_millis_opt(*millis).single()
            }
            _ => None,
        }
    }
}

/// One value of a closed enumeration as the store holds it.
///
/// Stores written by older clients may carry only the ordinal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumValue {
    pub ordinal: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub symbolic_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl EnumValue {
    pub fn new(ordinal: i32, symbolic_name: impl Into<String>) -> Self {
        Self {
            ordinal,
            symbolic_name: Some(symbolic_name.into()),
            description: None,
        }
    }

    pub fn ordinal_only(ordinal: i32) -> Self {
        Self {
            ordinal,
            symbolic_name: None,
            description: None,
        }
    }
}

/// Nested attribute set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StructValue {
    pub attributes: PropertyBag,
}

/// Ordered sequence of values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ArrayValue {
    #[serde(rename = "arrayValues")]
    pub elements: Vec<PropertyValue>,
}

/// String-keyed map of values.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MapValue {
    #[serde(rename = "mapValues")]
    pub entries: PropertyBag,
}

/// Runtime representation of an attribute value in the backing store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "class")]
pub enum PropertyValue {
    #[serde(rename = "PrimitivePropertyValue")]
    Primitive(PrimitiveValue),

    #[serde(rename = "EnumPropertyValue")]
    Enum(EnumValue),

    #[serde(rename = "StructPropertyValue")]
    Struct(StructValue),

    #[serde(rename = "ArrayPropertyValue")]
    Array(ArrayValue),

    #[serde(rename = "MapPropertyValue")]
    Map(MapValue),
}

impl PropertyValue {
    pub fn string(value: impl Into<String>) -> Self {
        PropertyValue::Primitive(PrimitiveValue::string(value))
    }

    pub fn int(value: i32) -> Self {
        PropertyValue::Primitive(PrimitiveValue::int(value))
    }

    pub fn long(value: i64) -> Self {
        PropertyValue::Primitive(PrimitiveValue::long(value))
    }

    pub fn boolean(value: bool) -> Self {
        PropertyValue::Primitive(PrimitiveValue::boolean(value))
    }

    pub fn double(value: f64) -> Self {
        PropertyValue::Primitive(PrimitiveValue::double(value))
    }

    pub fn date(value: DateTime<Utc>) -> Self {
        PropertyValue::Primitive(PrimitiveValue::date(value))
    }

    pub fn enumeration(ordinal: i32, symbolic_name: impl Into<String>) -> Self {
        PropertyValue::Enum(EnumValue::new(ordinal, symbolic_name))
    }

    pub fn array(elements: Vec<PropertyValue>) -> Self {
        PropertyValue::Array(ArrayValue { elements })
    }

    pub fn map(entries: PropertyBag) -> Self {
        PropertyValue::Map(MapValue { entries })
    }

    pub fn structure(attributes: PropertyBag) -> Self {
        PropertyValue::Struct(StructValue { attributes })
    }

    /// Short name of the variant, for diagnostics.
    pub fn category(&self) -> &'static str {
        match self {
            PropertyValue::Primitive(_) => "primitive",
            PropertyValue::Enum(_) => "enum",
            PropertyValue::Struct(_) => "struct",
            PropertyValue::Array(_) => "array",
            PropertyValue::Map(_) => "map",
        }
    }

    pub fn as_primitive(&self) -> Option<&PrimitiveValue> {
        match self {
            PropertyValue::Primitive(p) => Some(p),
            _ => None,
        }
    }

    pub fn as_enum(&self) -> Option<&EnumValue> {
        match self {
            PropertyValue::Enum(e) => Some(e),
            _ => None,
        }
    }

    pub fn as_struct(&self) -> Option<&PropertyBag> {
        match self {
            PropertyValue::Struct(s) => Some(&s.attributes),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PropertyValue]> {
        match self {
            PropertyValue::Array(a) => Some(&a.elements),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&PropertyBag> {
        match self {
            PropertyValue::Map(m) => Some(&m.entries),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_primitive().and_then(PrimitiveValue::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn struct_accessor() {
        let inner: PropertyBag = [("by", PropertyValue::string("robot"))].into_iter().collect();
        let value = PropertyValue::structure(inner.clone());
        assert_eq!(value.as_struct(), Some(&inner));
        assert_eq!(value.category(), PropertyValue::Struct(StructValue::default()).category());
        assert!(value.as_map().is_none());
        assert!(PropertyValue::map(inner).as_struct().is_none());
    }

    #[test]
    fn string_accessor_requires_string_kind() {
        assert_eq!(PropertyValue::string("alice").as_str(), Some("alice"));
        let mislabelled = PropertyValue::Primitive(PrimitiveValue::new(
            PrimitiveKind::Int,
            PrimitiveData::Text("alice".into()),
        ));
        assert_eq!(mislabelled.as_str(), None);
    }

    #[test]
    fn int_accessor_checks_width() {
        assert_eq!(PrimitiveValue::int(80).as_int(), Some(80));
        assert_eq!(PrimitiveValue::long(80).as_int(), None);
        let overflow = PrimitiveValue::new(PrimitiveKind::Int, PrimitiveData::Integer(1 << 40));
        assert_eq!(overflow.as_int(), None);
        assert_eq!(overflow.as_long(), None);
        let short = PrimitiveValue::new(PrimitiveKind::Short, PrimitiveData::Integer(-7));
        assert_eq!(short.as_int(), Some(-7));
    }

    #[test]
    fn date_is_stored_as_millis() {
        let when = Utc.with_ymd_and_hms(2030, 1, 31, 12, 0, 0).unwrap();
        let value = PrimitiveValue::date(when);
        assert_eq!(value.value, PrimitiveData::Integer(when.timestamp_millis()));
        assert_eq!(value.as_date(), Some(when));
    }

    #[test]
    fn date_out_of_range_is_none() {
        let value = PrimitiveValue::new(PrimitiveKind::Date, PrimitiveData::Integer(i64::MAX));
        assert_eq!(value.as_date(), None);
    }

    #[test]
    fn double_accepts_integral_payload() {
        let value = PrimitiveValue::new(PrimitiveKind::Double, PrimitiveData::Integer(3));
        assert_eq!(value.as_double(), Some(3.0));
        assert_eq!(PrimitiveValue::string("3").as_double(), None);
    }

    #[test]
    fn variant_accessors_do_not_cross() {
        let e = PropertyValue::enumeration(2, "FISCAL");
        assert!(e.as_enum().is_some());
        assert!(e.as_primitive().is_none());
        assert!(e.as_array().is_none());
        assert_eq!(e.category(), "enum");
        assert!(PropertyValue::string("x").as_enum().is_none());
    }

    #[test]
    fn primitive_json_shape() {
        let json = serde_json::to_value(PropertyValue::int(80)).unwrap();
        assert_eq!(
            json,
            serde_json::json!({
                "class": "PrimitivePropertyValue",
                "primitiveDefCategory": "OM_PRIMITIVE_TYPE_INT",
                "primitiveValue": 80
            })
        );
    }

    #[test]
    fn enum_json_shape_omits_missing_name() {
        let json = serde_json::to_value(PropertyValue::Enum(EnumValue::ordinal_only(3))).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "class": "EnumPropertyValue", "ordinal": 3 })
        );
    }

    #[test]
    fn nested_values_parse_from_json() {
        let json = r#"{
            "class": "ArrayPropertyValue",
            "arrayValues": [
                { "class": "PrimitivePropertyValue", "primitiveDefCategory": "OM_PRIMITIVE_TYPE_STRING", "primitiveValue": "a" },
                { "class": "EnumPropertyValue", "ordinal": 1, "symbolicName": "TEMPORARY" }
            ]
        }"#;
        let value: PropertyValue = serde_json::from_str(json).unwrap();
        let elements = value.as_array().unwrap();
        assert_eq!(elements.len(), 2);
        assert_eq!(elements[0].as_str(), Some("a"));
        assert_eq!(elements[1].as_enum().unwrap().ordinal, 1);
    }
}
