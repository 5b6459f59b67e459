//! # Generic Property Model
//!
//! The backing metadata store knows nothing about classification types. It
//! holds each instance's attributes in a [`PropertyBag`]: an ordered map from
//! attribute name to a self-describing [`PropertyValue`].
//!
//! | Variant | Holds | Example |
//! |---------|-------|---------|
//! | `Primitive` | declared [`PrimitiveKind`] + untyped [`PrimitiveData`] | `steward = "alice"` |
//! | `Enum` | ordinal + symbolic name | `basis = 2 / FISCAL` |
//! | `Struct` | nested bag | |
//! | `Array` | ordered values | |
//! | `Map` | string-keyed values | |
//!
//! A bag is shared: classification mappers own some of its names, other
//! mappers and vendor extensions own the rest. Nothing in this module decides
//! ownership; see [`crate::mapper`].

mod bag;
mod kind;
mod value;

pub use bag::PropertyBag;
pub use kind::{PrimitiveData, PrimitiveKind};
pub use value::{ArrayValue, EnumValue, MapValue, PrimitiveValue, PropertyValue, StructValue};
