//! # API Facade
//!
//! The single entry point for callers that hold generic classifications as the
//! store returns them and want typed views back (and the reverse).
//!
//! The facade:
//! - **Dispatches** each classification to the mapper registered for its type
//! - **Passes through** types nothing is registered for
//! - **Merges** typed updates into existing bags without touching foreign
//!   attributes
//!
//! It does no I/O and no formatting; the CLI owns presentation.

use tracing::debug;

use crate::error::{MapperError, Result};
use crate::mapper::{Decoded, MapperContext};
use crate::model::{Classification, GenericClassification};
use crate::property::PropertyBag;
use crate::registry::{AnyMapper, MapperRegistry};

/// What a decode produced for one generic classification.
#[derive(Debug, Clone, PartialEq)]
pub enum ClassificationOutcome {
    /// A mapper handled the type.
    Decoded {
        decoded: Decoded<Classification>,
        unrecognized: PropertyBag,
    },
    /// Nothing is registered for the type; the input is returned as is.
    Unrecognized(GenericClassification),
}

impl ClassificationOutcome {
    pub fn classification(&self) -> Option<&Classification> {
        match self {
            ClassificationOutcome::Decoded { decoded, .. } => Some(&decoded.classification),
            ClassificationOutcome::Unrecognized(_) => None,
        }
    }
}

pub struct ClassificationApi {
    registry: MapperRegistry,
}

impl ClassificationApi {
    pub fn new(registry: MapperRegistry) -> Self {
        Self { registry }
    }

    /// A facade over the full catalog.
    pub fn with_catalog(context: MapperContext) -> Self {
        Self::new(MapperRegistry::with_catalog(context))
    }

    pub fn registry(&self) -> &MapperRegistry {
        &self.registry
    }

    pub fn decode_classification(
        &self,
        generic: &GenericClassification,
    ) -> Result<ClassificationOutcome> {
        let Some(mapper) = self.registry.resolve(&generic.type_name) else {
            debug!(type_name = %generic.type_name, "passing classification through");
            return Ok(ClassificationOutcome::Unrecognized(generic.clone()));
        };

        let decoded = mapper.decode(&generic.type_name, &generic.properties)?;
        let unrecognized = decoded.unrecognized(&generic.properties);
        debug!(
            type_name = %generic.type_name,
            unrecognized = unrecognized.len(),
            "decoded classification"
        );
        Ok(ClassificationOutcome::Decoded {
            decoded,
            unrecognized,
        })
    }

    /// Decode every classification of one entity, in order.
    pub fn decode_all(
        &self,
        generics: &[GenericClassification],
    ) -> Result<Vec<ClassificationOutcome>> {
        generics
            .iter()
            .map(|generic| self.decode_classification(generic))
            .collect()
    }

    pub fn encode_classification(
        &self,
        classification: &Classification,
    ) -> Result<GenericClassification> {
        let type_name = classification.type_name();
        let mapper = self.mapper_for(type_name)?;
        let properties = mapper.encode(classification)?;
        Ok(GenericClassification::new(type_name, properties))
    }

    /// Write `classification` over the owned attributes of `existing`.
    ///
    /// Attributes the mapper does not own keep their value and position.
    /// Owned attributes the typed view leaves unset are removed.
    pub fn update_classification(
        &self,
        existing: &GenericClassification,
        classification: &Classification,
    ) -> Result<GenericClassification> {
        let type_name = classification.type_name();
        if existing.type_name != type_name {
            return Err(MapperError::TypeMismatch {
                service: self.registry.context().service_name.clone(),
                expected: existing.type_name.clone(),
                actual: type_name.to_string(),
            });
        }

        let mapper = self.mapper_for(type_name)?;
        let update = mapper.encode(classification)?;
        let mut properties = existing.properties.clone();
        properties.replace_owned(mapper.owned_attributes(), update);
        debug!(%type_name, attributes = properties.len(), "updated classification");
        Ok(GenericClassification::new(type_name, properties))
    }

    fn mapper_for(&self, type_name: &str) -> Result<AnyMapper> {
        self.registry
            .resolve(type_name)
            .ok_or_else(|| MapperError::Api(format!("no mapper registered for '{}'", type_name)))
    }
}
