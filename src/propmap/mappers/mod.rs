//! # Classification Mappers
//!
//! One mapper per classification type. Each owns a fixed list of attribute
//! names and ignores everything else in the bag.
//!
//! | Type | Owned attributes |
//! |------|------------------|
//! | `Retention` | governance base, `associatedGUID`, `archiveAfter`, `deleteAfter`, `basis` |
//! | `Confidentiality` | governance base, `level` |
//! | `Confidence` | governance base, `level` |
//! | `Criticality` | governance base, `level` |
//! | `SubjectArea` | `name` |
//! | `SpineObject` | none |
//!
//! The governance base is `status`, `confidence`, `steward`, `source` and
//! `notes`, read and written by the helpers in [`governance`].

pub mod governance;

mod confidence;
mod confidentiality;
mod criticality;
mod retention;
mod spine_object;
mod subject_area;

pub use confidence::ConfidenceMapper;
pub use confidentiality::ConfidentialityMapper;
pub use criticality::CriticalityMapper;
pub use retention::RetentionMapper;
pub use spine_object::SpineObjectMapper;
pub use subject_area::SubjectAreaMapper;
