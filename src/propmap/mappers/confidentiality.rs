use crate::codec;
use crate::enums::ConfidentialityLevel;
use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::Confidentiality;
use crate::property::PropertyBag;

use super::governance::{self, CONFIDENCE, NOTES, SOURCE, STATUS, STEWARD};

pub const LEVEL: &str = "level";

pub struct ConfidentialityMapper {
    context: MapperContext,
}

impl ConfidentialityMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for ConfidentialityMapper {
    type Classification = Confidentiality;

    const TYPE_NAME: &'static str = "Confidentiality";
    const ATTRIBUTE_NAMES: &'static [&'static str] =
        &[STEWARD, SOURCE, NOTES, CONFIDENCE, STATUS, LEVEL];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut Confidentiality) -> Result<()> {
        governance::read(self, bag, &mut target.governance)?;
        target.level = self.resolve_enum::<ConfidentialityLevel>(bag, LEVEL)?;
        Ok(())
    }

    fn write_known_attributes(&self, source: &Confidentiality, bag: &mut PropertyBag) {
        governance::write(&source.governance, bag);
        codec::put_enum(bag, LEVEL, source.level);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::GovernanceClassificationStatus;
    use crate::model::GovernanceBase;
    use crate::property::PropertyValue;

    fn mapper() -> ConfidentialityMapper {
        ConfidentialityMapper::new(MapperContext::default())
    }

    #[test]
    fn level_and_governance_round_trip() {
        let original = Confidentiality {
            governance: GovernanceBase {
                status: Some(GovernanceClassificationStatus::Approved),
                confidence: Some(60),
                steward: "privacy-office".into(),
                source: String::new(),
                notes: "contains postcodes".into(),
            },
            level: Some(ConfidentialityLevel::Sensitive),
        };
        let bag = mapper().encode(&original);
        assert_eq!(bag.get(LEVEL), Some(&PropertyValue::enumeration(3, "SENSITIVE")));
        assert!(!bag.contains(SOURCE));
        assert_eq!(
            mapper().decode("Confidentiality", &bag).unwrap().classification,
            original
        );
    }

    #[test]
    fn ordinal_only_level_from_older_writers() {
        let mut bag = PropertyBag::new();
        bag.insert(
            LEVEL,
            PropertyValue::Enum(crate::property::EnumValue::ordinal_only(4)),
        );
        let decoded = mapper().decode("Confidentiality", &bag).unwrap();
        assert_eq!(decoded.classification.level, Some(ConfidentialityLevel::Restricted));
    }
}
