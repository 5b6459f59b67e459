//! # Mapper Contract
//!
//! Every classification mapper follows the same template; only the attribute
//! list, the defaults and the enum bindings differ per type. The shared part
//! lives in the provided methods of [`ClassificationMapper`]:
//!
//! ```text
//! decode(type_name, bag)
//!   1. type_name == TYPE_NAME, else TypeMismatch (bag untouched)
//!   2. start from Classification::default()
//!   3. map_known_attributes(owned slice of bag)
//!   4. return Decoded { classification, owned_attributes }
//!
//! encode(classification)
//!   1. fresh bag
//!   2. write_known_attributes (present fields only)
//!   3. return bag
//! ```
//!
//! ## Ownership
//!
//! A bag is shared with other mappers and with extension attributes this
//! process has never heard of. [`ClassificationMapper::ATTRIBUTE_NAMES`] is the
//! mapper's slice of it. Decode only ever sees that slice (the bag is filtered
//! before the per-type code runs), and encode output is checked against it in
//! debug builds. Callers put the result back with
//! [`PropertyBag::replace_owned`], which leaves every other name alone.
//!
//! ## Failure
//!
//! Decode fails on a type-name mismatch and on an enum value its domain cannot
//! resolve. A missing or mistyped optional attribute is never a failure.
//! Encode cannot fail.

use serde::{Deserialize, Serialize};

use crate::codec;
use crate::enums::{EnumDomain, EnumNamePolicy};
use crate::error::{MapperError, Result};
use crate::property::PropertyBag;

pub const DEFAULT_SERVICE_NAME: &str = "propmap";

/// Immutable settings shared by the mappers of one service.
///
/// The service name is only used to attribute errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapperContext {
    pub service_name: String,
    pub enum_names: EnumNamePolicy,
}

impl Default for MapperContext {
    fn default() -> Self {
        Self {
            service_name: DEFAULT_SERVICE_NAME.to_string(),
            enum_names: EnumNamePolicy::default(),
        }
    }
}

impl MapperContext {
    pub fn new(service_name: impl Into<String>) -> Self {
        Self {
            service_name: service_name.into(),
            ..Default::default()
        }
    }

    pub fn with_enum_names(mut self, policy: EnumNamePolicy) -> Self {
        self.enum_names = policy;
        self
    }
}

/// Result of a decode: the typed view plus the names it was built from.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
    pub classification: T,
    pub owned_attributes: &'static [&'static str],
}

impl<T> Decoded<T> {
    /// Attributes of `bag` this decode did not own, in bag order.
    pub fn unrecognized(&self, bag: &PropertyBag) -> PropertyBag {
        bag.excluding(self.owned_attributes)
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Decoded<U> {
        Decoded {
            classification: f(self.classification),
            owned_attributes: self.owned_attributes,
        }
    }
}

/// Maps one classification type between its typed and generic forms.
pub trait ClassificationMapper {
    type Classification: Default;

    /// Type name as declared in the store.
    const TYPE_NAME: &'static str;

    /// Names this mapper reads and writes.
    const ATTRIBUTE_NAMES: &'static [&'static str];

    fn context(&self) -> &MapperContext;

    /// Populate `target` from `bag`. `bag` holds only owned names.
    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut Self::Classification)
        -> Result<()>;

    /// Write every present field of `source` into `bag`.
    fn write_known_attributes(&self, source: &Self::Classification, bag: &mut PropertyBag);

    fn type_name(&self) -> &'static str {
        Self::TYPE_NAME
    }

    fn owned_attributes(&self) -> &'static [&'static str] {
        Self::ATTRIBUTE_NAMES
    }

    fn check_type(&self, declared_type_name: &str) -> Result<()> {
        if declared_type_name == Self::TYPE_NAME {
            Ok(())
        } else {
            Err(MapperError::TypeMismatch {
                service: self.context().service_name.clone(),
                expected: Self::TYPE_NAME.to_string(),
                actual: declared_type_name.to_string(),
            })
        }
    }

    fn decode(
        &self,
        declared_type_name: &str,
        bag: &PropertyBag,
    ) -> Result<Decoded<Self::Classification>> {
        self.check_type(declared_type_name)?;

        let owned = bag.only(Self::ATTRIBUTE_NAMES);
        let mut classification = Self::Classification::default();
        self.map_known_attributes(&owned, &mut classification)?;

        Ok(Decoded {
            classification,
            owned_attributes: Self::ATTRIBUTE_NAMES,
        })
    }

    fn encode(&self, classification: &Self::Classification) -> PropertyBag {
        let mut bag = PropertyBag::new();
        self.write_known_attributes(classification, &mut bag);
        debug_assert!(
            bag.names().all(|name| Self::ATTRIBUTE_NAMES.contains(&name)),
            "{} mapper wrote an attribute it does not own",
            Self::TYPE_NAME
        );
        bag
    }

    /// Resolve an enum attribute against its domain.
    ///
    /// Absent or non-enum values are `Ok(None)`. A value the domain cannot
    /// resolve is an error, since enum values drive downstream rules and a
    /// silent substitute would change their outcome.
    fn resolve_enum<E: EnumDomain>(&self, bag: &PropertyBag, name: &str) -> Result<Option<E>> {
        let Some(stored) = codec::get_enum(bag, name) else {
            return Ok(None);
        };
        match E::resolve(stored, self.context().enum_names) {
            Some(value) => Ok(Some(value)),
            None => Err(MapperError::UnknownEnumValue {
                service: self.context().service_name.clone(),
                attribute: name.to_string(),
                domain: E::DOMAIN_NAME.to_string(),
                ordinal: stored.ordinal,
                symbolic_name: stored.symbolic_name.clone(),
            }),
        }
    }
}
