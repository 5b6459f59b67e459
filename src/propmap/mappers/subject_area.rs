use crate::codec;
use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::SubjectArea;
use crate::property::PropertyBag;

pub const NAME: &str = "name";

pub struct SubjectAreaMapper {
    context: MapperContext,
}

impl SubjectAreaMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for SubjectAreaMapper {
    type Classification = SubjectArea;

    const TYPE_NAME: &'static str = "SubjectArea";
    const ATTRIBUTE_NAMES: &'static [&'static str] = &[NAME];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut SubjectArea) -> Result<()> {
        target.name = codec::get_string(bag, NAME, "");
        Ok(())
    }

    fn write_known_attributes(&self, source: &SubjectArea, bag: &mut PropertyBag) {
        codec::put_string(bag, NAME, Some(&source.name));
    }
}
