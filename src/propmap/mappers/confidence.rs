use crate::codec;
use crate::enums::ConfidenceLevel;
use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::Confidence;
use crate::property::PropertyBag;

use super::governance::{self, CONFIDENCE, NOTES, SOURCE, STATUS, STEWARD};

pub const LEVEL: &str = "level";

pub struct ConfidenceMapper {
    context: MapperContext,
}

impl ConfidenceMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for ConfidenceMapper {
    type Classification = Confidence;

    const TYPE_NAME: &'static str = "Confidence";
    const ATTRIBUTE_NAMES: &'static [&'static str] =
        &[STEWARD, SOURCE, NOTES, CONFIDENCE, STATUS, LEVEL];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut Confidence) -> Result<()> {
        governance::read(self, bag, &mut target.governance)?;
        target.level = self.resolve_enum::<ConfidenceLevel>(bag, LEVEL)?;
        Ok(())
    }

    fn write_known_attributes(&self, source: &Confidence, bag: &mut PropertyBag) {
        governance::write(&source.governance, bag);
        codec::put_enum(bag, LEVEL, source.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapperError;
    use crate::property::PropertyValue;

    fn mapper() -> ConfidenceMapper {
        ConfidenceMapper::new(MapperContext::new("asset-catalog"))
    }

    #[test]
    fn level_only() {
        let original = Confidence {
            level: Some(ConfidenceLevel::AdHoc),
            ..Default::default()
        };
        let bag = mapper().encode(&original);
        assert_eq!(bag.names().collect::<Vec<_>>(), vec![LEVEL]);
        assert_eq!(bag.get(LEVEL), Some(&PropertyValue::enumeration(1, "AD_HOC")));
        assert_eq!(mapper().decode("Confidence", &bag).unwrap().classification, original);
    }

    #[test]
    fn confidence_attribute_is_not_the_level() {
        // the governance "confidence" percentage and the "level" enum are separate
        let bag: PropertyBag = [("confidence", PropertyValue::int(40))].into_iter().collect();
        let c = mapper().decode("Confidence", &bag).unwrap().classification;
        assert_eq!(c.governance.confidence, Some(40));
        assert_eq!(c.level, None);
    }

    #[test]
    fn retention_bag_is_rejected() {
        let err = mapper().decode("Retention", &PropertyBag::new()).unwrap_err();
        assert!(err.to_string().contains("asset-catalog"));
        assert!(matches!(err, MapperError::TypeMismatch { .. }));
    }
}
