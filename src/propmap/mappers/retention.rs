use crate::codec;
use crate::enums::RetentionBasis;
use crate::error::Result;
use crate::mapper::{ClassificationMapper, MapperContext};
use crate::model::Retention;
use crate::property::PropertyBag;

use super::governance::{self, CONFIDENCE, NOTES, SOURCE, STATUS, STEWARD};

pub const ASSOCIATED_GUID: &str = "associatedGUID";
pub const ARCHIVE_AFTER: &str = "archiveAfter";
pub const DELETE_AFTER: &str = "deleteAfter";
pub const BASIS: &str = "basis";

pub struct RetentionMapper {
    context: MapperContext,
}

impl RetentionMapper {
    pub fn new(context: MapperContext) -> Self {
        Self { context }
    }
}

impl ClassificationMapper for RetentionMapper {
    type Classification = Retention;

    const TYPE_NAME: &'static str = "Retention";
    const ATTRIBUTE_NAMES: &'static [&'static str] = &[
        STEWARD,
        SOURCE,
        NOTES,
        ASSOCIATED_GUID,
        ARCHIVE_AFTER,
        DELETE_AFTER,
        CONFIDENCE,
        BASIS,
        STATUS,
    ];

    fn context(&self) -> &MapperContext {
        &self.context
    }

    fn map_known_attributes(&self, bag: &PropertyBag, target: &mut Retention) -> Result<()> {
        governance::read(self, bag, &mut target.governance)?;
        target.associated_guid = codec::get_string(bag, ASSOCIATED_GUID, "");
        target.archive_after = codec::get_date(bag, ARCHIVE_AFTER, None);
        target.delete_after = codec::get_date(bag, DELETE_AFTER, None);
        target.basis = self.resolve_enum::<RetentionBasis>(bag, BASIS)?;
        Ok(())
    }

    // status is written on its own, whether or not basis is set
    fn write_known_attributes(&self, source: &Retention, bag: &mut PropertyBag) {
        governance::write(&source.governance, bag);
        codec::put_string(bag, ASSOCIATED_GUID, Some(&source.associated_guid));
        codec::put_date(bag, ARCHIVE_AFTER, source.archive_after);
        codec::put_date(bag, DELETE_AFTER, source.delete_after);
        codec::put_enum(bag, BASIS, source.basis);
    }
}
