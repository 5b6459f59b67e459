use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::SpineObject;
use crate::property::PropertyBag;

/// A marker classification: only the type name is checked.
pub struct SpineObjectMapper {
    context: MapperContext,
}

impl SpineObjectMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for SpineObjectMapper {
    type Classification = SpineObject;

    const TYPE_NAME: &'static str = "SpineObject";
    const ATTRIBUTE_NAMES: &'static [&'static str] = &[];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, _bag: &PropertyBag, _target: &mut SpineObject) -> Result<()> {
        Ok(())
    }

    fn write_known_attributes(&self, _source: &SpineObject, _bag: &mut PropertyBag) {}
}
