//! # Mapper Registry
//!
//! Type name to mapper lookup. The registry holds factories, not mappers: a
//! resolve builds a fresh mapper bound to the registry's [`MapperContext`].
//!
//! Mappers are a closed set ([`AnyMapper`]), so the registry dispatches with a
//! plain `match` and never needs a trait object. An unregistered type name is
//! not an error; the caller decides whether to pass the classification through.
//!
//! The registry is built once at startup and only read afterwards.

use std::collections::BTreeMap;

use tracing::debug;

use crate::error::{MapperError, Result};
use crate::mapper::{ClassificationMapper, Decoded, MapperContext};
use crate::mappers::{
    ConfidenceMapper, ConfidentialityMapper, CriticalityMapper, RetentionMapper,
    SpineObjectMapper, SubjectAreaMapper,
};
use crate::model::Classification;
use crate::property::PropertyBag;

/// Any of the mappers this crate ships.
pub enum AnyMapper {
    Retention(RetentionMapper),
    Confidentiality(ConfidentialityMapper),
    Confidence(ConfidenceMapper),
    Criticality(CriticalityMapper),
    SubjectArea(SubjectAreaMapper),
    SpineObject(SpineObjectMapper),
}

macro_rules! each_mapper {
    ($self:expr, $m:ident => $body:expr) => {
        match $self {
            AnyMapper::Retention($m) => $body,
            AnyMapper::Confidentiality($m) => $body,
            AnyMapper::Confidence($m) => $body,
            AnyMapper::Criticality($m) => $body,
            AnyMapper::SubjectArea($m) => $body,
            AnyMapper::SpineObject($m) => $body,
        }
    };
}

impl AnyMapper {
    pub fn type_name(&self) -> &'static str {
        each_mapper!(self, m => m.type_name())
    }

    pub fn owned_attributes(&self) -> &'static [&'static str] {
        each_mapper!(self, m => m.owned_attributes())
    }

    fn context(&self) -> &MapperContext {
        each_mapper!(self, m => m.context())
    }

    pub fn decode(&self, declared_type_name: &str, bag: &PropertyBag) -> Result<Decoded<Classification>> {
        Ok(match self {
            AnyMapper::Retention(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::Retention),
            AnyMapper::Confidentiality(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::Confidentiality),
            AnyMapper::Confidence(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::Confidence),
            AnyMapper::Criticality(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::Criticality),
            AnyMapper::SubjectArea(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::SubjectArea),
            AnyMapper::SpineObject(m) => m
                .decode(declared_type_name, bag)?
                .map(Classification::SpineObject),
        })
    }

    /// Encode `classification`, which must be of this mapper's type.
    pub fn encode(&self, classification: &Classification) -> Result<PropertyBag> {
        match (self, classification) {
            (AnyMapper::Retention(m), Classification::Retention(c)) => Ok(m.encode(c)),
            (AnyMapper::Confidentiality(m), Classification::Confidentiality(c)) => Ok(m.encode(c)),
            (AnyMapper::Confidence(m), Classification::Confidence(c)) => Ok(m.encode(c)),
            (AnyMapper::Criticality(m), Classification::Criticality(c)) => Ok(m.encode(c)),
            (AnyMapper::SubjectArea(m), Classification::SubjectArea(c)) => Ok(m.encode(c)),
            (AnyMapper::SpineObject(m), Classification::SpineObject(c)) => Ok(m.encode(c)),
            (mapper, other) => Err(MapperError::TypeMismatch {
                service: mapper.context().service_name.clone(),
                expected: mapper.type_name().to_string(),
                actual: other.type_name().to_string(),
            }),
        }
    }
}

pub type MapperFactory = fn(&MapperContext) -> AnyMapper;

fn retention(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::Retention(RetentionMapper::new(ctx.clone()))
}

fn confidentiality(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::Confidentiality(ConfidentialityMapper::new(ctx.clone()))
}

fn confidence(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::Confidence(ConfidenceMapper::new(ctx.clone()))
}

fn criticality(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::Criticality(CriticalityMapper::new(ctx.clone()))
}

fn subject_area(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::SubjectArea(SubjectAreaMapper::new(ctx.clone()))
}

fn spine_object(ctx: &MapperContext) -> AnyMapper {
    AnyMapper::SpineObject(SpineObjectMapper::new(ctx.clone()))
}

/// Every mapper this crate ships, by type name.
pub const CATALOG: &[(&str, MapperFactory)] = &[
    (RetentionMapper::TYPE_NAME, retention),
    (ConfidentialityMapper::TYPE_NAME, confidentiality),
    (ConfidenceMapper::TYPE_NAME, confidence),
    (CriticalityMapper::TYPE_NAME, criticality),
    (SubjectAreaMapper::TYPE_NAME, subject_area),
    (SpineObjectMapper::TYPE_NAME, spine_object),
];

pub struct MapperRegistry {
    context: MapperContext,
    factories: BTreeMap<String, MapperFactory>,
}

impl MapperRegistry {
    /// An empty registry.
    pub fn new(context: MapperContext) -> Self {
        Self {
            context,
            factories: BTreeMap::new(),
        }
    }

    /// A registry holding every entry of [`CATALOG`].
    pub fn with_catalog(context: MapperContext) -> Self {
        let mut registry = Self::new(context);
        for (type_name, factory) in CATALOG {
            registry.register(*type_name, *factory);
        }
        registry
    }

    pub fn context(&self) -> &MapperContext {
        &self.context
    }

    /// Register `factory` for `type_name`, replacing any previous entry.
    ///
    /// The factory must build the mapper for `type_name`; checked in debug
    /// builds.
    pub fn register(&mut self, type_name: impl Into<String>, factory: MapperFactory) {
        let type_name = type_name.into();
        debug_assert_eq!(
            factory(&self.context).type_name(),
            type_name,
            "factory registered under the wrong type name"
        );
        debug!(service = %self.context.service_name, %type_name, "registering mapper");
        self.factories.insert(type_name, factory);
    }

    pub fn unregister(&mut self, type_name: &str) -> bool {
        self.factories.remove(type_name).is_some()
    }

    pub fn resolve(&self, type_name: &str) -> Option<AnyMapper> {
        match self.factories.get(type_name) {
            Some(factory) => Some(factory(&self.context)),
            None => {
                debug!(service = %self.context.service_name, %type_name, "no mapper registered");
                None
            }
        }
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.factories.contains_key(type_name)
    }

    /// Registered type names, sorted.
    pub fn type_names(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.factories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }
}
