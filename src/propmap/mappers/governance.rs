//! Governance base attributes, shared by every governance classification.

use crate::codec;
use crate::error::Result;
use crate::mapper::ClassificationMapper;
use crate::model::GovernanceBase;
use crate::property::PropertyBag;

pub const STATUS: &str = "status";
pub const CONFIDENCE: &str = "confidence";
pub const STEWARD: &str = "steward";
pub const SOURCE: &str = "source";
pub const NOTES: &str = "notes";

pub(crate) fn read<M: ClassificationMapper>(
    mapper: &M,
    bag: &PropertyBag,
    base: &mut GovernanceBase,
) -> Result<()> {
    base.steward = codec::get_string(bag, STEWARD, "");
    base.source = codec::get_string(bag, SOURCE, "");
    base.notes = codec::get_string(bag, NOTES, "");
    base.confidence = codec::get_int(bag, CONFIDENCE, None);
    base.status = mapper.resolve_enum(bag, STATUS)?;
    Ok(())
}

pub(crate) fn write(base: &GovernanceBase, bag: &mut PropertyBag) {
    codec::put_string(bag, STEWARD, Some(&base.steward));
    codec::put_string(bag, SOURCE, Some(&base.source));
    codec::put_string(bag, NOTES, Some(&base.notes));
    codec::put_int(bag, CONFIDENCE, base.confidence);
    codec::put_enum(bag, STATUS, base.status);
}
