//! Primitive categories.
//!
//! A schema-flexible store keeps scalars in a handful of runtime shapes
//! ([`PrimitiveData`]) and declares separately what the scalar is supposed to
//! be ([`PrimitiveKind`]). The two are stored independently and can drift
//! apart, so every read checks that they still agree.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared scalar category of a primitive property value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PrimitiveKind {
    #[serde(rename = "OM_PRIMITIVE_TYPE_UNKNOWN")]
    Unknown,
    #[serde(rename = "OM_PRIMITIVE_TYPE_BOOLEAN")]
    Boolean,
    #[serde(rename = "OM_PRIMITIVE_TYPE_BYTE")]
    Byte,
    #[serde(rename = "OM_PRIMITIVE_TYPE_CHAR")]
    Char,
    #[serde(rename = "OM_PRIMITIVE_TYPE_SHORT")]
    Short,
    #[serde(rename = "OM_PRIMITIVE_TYPE_INT")]
    Int,
    #[serde(rename = "OM_PRIMITIVE_TYPE_LONG")]
    Long,
    #[serde(rename = "OM_PRIMITIVE_TYPE_FLOAT")]
    Float,
    #[serde(rename = "OM_PRIMITIVE_TYPE_DOUBLE")]
    Double,
    #[serde(rename = "OM_PRIMITIVE_TYPE_BIGINTEGER")]
    BigInteger,
    #[serde(rename = "OM_PRIMITIVE_TYPE_BIGDECIMAL")]
    BigDecimal,
    #[serde(rename = "OM_PRIMITIVE_TYPE_STRING")]
    String,
    #[serde(rename = "OM_PRIMITIVE_TYPE_DATE")]
    Date,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 13] = [
        PrimitiveKind::Unknown,
        PrimitiveKind::Boolean,
        PrimitiveKind::Byte,
        PrimitiveKind::Char,
        PrimitiveKind::Short,
        PrimitiveKind::Int,
        PrimitiveKind::Long,
        PrimitiveKind::Float,
        PrimitiveKind::Double,
        PrimitiveKind::BigInteger,
        PrimitiveKind::BigDecimal,
        PrimitiveKind::String,
        PrimitiveKind::Date,
    ];

    /// Fixed ordinal of the category in the store's type system.
    pub fn ordinal(self) -> i32 {
        match self {
            PrimitiveKind::Unknown => 0,
            PrimitiveKind::Boolean => 1,
            PrimitiveKind::Byte => 2,
            PrimitiveKind::Char => 3,
            PrimitiveKind::Short => 4,
            PrimitiveKind::Int => 5,
            PrimitiveKind::Long => 6,
            PrimitiveKind::Float => 7,
            PrimitiveKind::Double => 8,
            PrimitiveKind::BigInteger => 9,
            PrimitiveKind::BigDecimal => 10,
            PrimitiveKind::String => 11,
            PrimitiveKind::Date => 12,
        }
    }

    pub fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::ALL.into_iter().find(|k| k.ordinal() == ordinal)
    }

    pub fn name(self) -> &'static str {
        match self {
            PrimitiveKind::Unknown => "unknown",
            PrimitiveKind::Boolean => "boolean",
            PrimitiveKind::Byte => "byte",
            PrimitiveKind::Char => "char",
            PrimitiveKind::Short => "short",
            PrimitiveKind::Int => "int",
            PrimitiveKind::Long => "long",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Double => "double",
            PrimitiveKind::BigInteger => "biginteger",
            PrimitiveKind::BigDecimal => "bigdecimal",
            PrimitiveKind::String => "string",
            PrimitiveKind::Date => "date",
        }
    }

    /// Whether `data` is a valid runtime representation of this category.
    ///
    /// Integral kinds also check the payload fits the declared width. Dates
    /// are epoch milliseconds.
    pub fn accepts(self, data: &PrimitiveData) -> bool {
        match (self, data) {
            (PrimitiveKind::Boolean, PrimitiveData::Boolean(_)) => true,
            (PrimitiveKind::Byte, PrimitiveData::Integer(v)) => i8::try_from(*v).is_ok(),
            (PrimitiveKind::Short, PrimitiveData::Integer(v)) => i16::try_from(*v).is_ok(),
            (PrimitiveKind::Int, PrimitiveData::Integer(v)) => i32::try_from(*v).is_ok(),
            (PrimitiveKind::Long, PrimitiveData::Integer(_)) => true,
            (PrimitiveKind::Char, PrimitiveData::Text(s)) => s.chars().count() == 1,
            (PrimitiveKind::Float | PrimitiveKind::Double, PrimitiveData::Float(_)) => true,
            (PrimitiveKind::Float | PrimitiveKind::Double, PrimitiveData::Integer(_)) => true,
            (PrimitiveKind::BigInteger, PrimitiveData::Integer(_)) => true,
            (PrimitiveKind::BigInteger, PrimitiveData::Text(s)) => is_integer_literal(s),
            (PrimitiveKind::BigDecimal, PrimitiveData::Integer(_) | PrimitiveData::Float(_)) => {
                true
            }
            (PrimitiveKind::BigDecimal, PrimitiveData::Text(s)) => s.parse::<f64>().is_ok(),
            (PrimitiveKind::String, PrimitiveData::Text(_)) => true,
            (PrimitiveKind::Date, PrimitiveData::Integer(_)) => true,
            _ => false,
        }
    }
}

impl fmt::Display for PrimitiveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn is_integer_literal(s: &str) -> bool {
    let digits = s.strip_prefix('-').unwrap_or(s);
    !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
}

/// Runtime shape of a primitive payload as the store holds it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrimitiveData {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for PrimitiveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PrimitiveData::Boolean(v) => write!(f, "{}", v),
            PrimitiveData::Integer(v) => write!(f, "{}", v),
            PrimitiveData::Float(v) => write!(f, "{}", v),
            PrimitiveData::Text(v) => write!(f, "{:?}", v),
        }
    }
}
