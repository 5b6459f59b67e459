use crate::codec;
use crate::enums::CriticalityLevel;
use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::Criticality;
use crate::property::PropertyBag;

use super::governance::{self, CONFIDENCE, NOTES, SOURCE, STATUS, STEWARD};

pub const LEVEL: &str = "level";

pub struct CriticalityMapper {
    context: MapperContext,
}

impl CriticalityMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for CriticalityMapper {
    type Classification = Criticality;

    const TYPE_NAME: &'static str = "Criticality";
    const ATTRIBUTE_NAMES: &'static [&'static str] =
        &[STEWARD, SOURCE, NOTES, CONFIDENCE, STATUS, LEVEL];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut Criticality) -> Result<()> {
        governance::read(self, bag, &mut target.governance)?;
        target.level = self.resolve_enum::<CriticalityLevel>(bag, LEVEL)?;
        Ok(())
    }

    fn write_known_attributes(&self, source: &Criticality, bag: &mut PropertyBag) {
        governance::write(&source.governance, bag);
        codec::put_enum(bag, LEVEL, source.level);
    }
}
