//! # Typed Classifications
//!
//! Business-facing views over one instance's attributes. A typed
//! classification has no identity of its own: a mapper builds it from a
//! [`PropertyBag`] on decode and reads it back field by field on encode.
//!
//! Field conventions:
//! - strings are plain `String`, and `""` means "not set"
//! - dates, integers and enums are `Option`
//! - dates have millisecond precision, the precision the store keeps; typed
//!   JSON input is truncated to it on parse
//!
//! ## Governance classifications
//!
//! Retention, Confidentiality, Confidence and Criticality all extend the same
//! base ([`GovernanceBase`]): who assigned the classification, how sure they
//! are, and where it stands in its review lifecycle. The base is flattened in
//! the JSON view so each classification reads as a single flat record.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enums::{
    ConfidenceLevel, ConfidentialityLevel, CriticalityLevel, GovernanceClassificationStatus,
    RetentionBasis,
};
use crate::property::PropertyBag;

mod millis {
    use chrono::{DateTime, SubsecRound, Utc};
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Ok(Option::<DateTime<Utc>>::deserialize(deserializer)?.map(|t| t.trunc_subsecs(3)))
    }
}

/// A classification as the backing store holds it: a type name and a bag.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenericClassification {
    pub type_name: String,
    #[serde(default)]
    pub properties: PropertyBag,
}

impl GenericClassification {
    pub fn new(type_name: impl Into<String>, properties: PropertyBag) -> Self {
        Self {
            type_name: type_name.into(),
            properties,
        }
    }
}

/// Attributes shared by every governance classification.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GovernanceBase {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<GovernanceClassificationStatus>,
    /// Percentage confidence in the assignment (0-100).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub confidence: Option<i32>,
    #[serde(default)]
    pub steward: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub notes: String,
}

/// How long the data must be kept and on what basis.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Retention {
    #[serde(flatten)]
    pub governance: GovernanceBase,
    #[serde(rename = "associatedGUID", default)]
    pub associated_guid: String,
    #[serde(
        default,
        deserialize_with = "millis::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub archive_after: Option<DateTime<Utc>>,
    #[serde(
        default,
        deserialize_with = "millis::deserialize",
        skip_serializing_if = "Option::is_none"
    )]
    pub delete_after: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub basis: Option<RetentionBasis>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidentiality {
    #[serde(flatten)]
    pub governance: GovernanceBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ConfidentialityLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    #[serde(flatten)]
    pub governance: GovernanceBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<ConfidenceLevel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Criticality {
    #[serde(flatten)]
    pub governance: GovernanceBase,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub level: Option<CriticalityLevel>,
}

/// Marks a glossary term as the owner of a subject area.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SubjectArea {
    #[serde(default)]
    pub name: String,
}

/// Marks a glossary term as a spine object. Carries no attributes.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SpineObject {}

/// Every typed classification this crate can map.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "typeName")]
pub enum Classification {
    Retention(Retention),
    Confidentiality(Confidentiality),
    Confidence(Confidence),
    Criticality(Criticality),
    SubjectArea(SubjectArea),
    SpineObject(SpineObject),
}

impl Classification {
    pub fn type_name(&self) -> &'static str {
        match self {
            Classification::Retention(_) => "Retention",
            Classification::Confidentiality(_) => "Confidentiality",
            Classification::Confidence(_) => "Confidence",
            Classification::Criticality(_) => "Criticality",
            Classification::SubjectArea(_) => "SubjectArea",
            Classification::SpineObject(_) => "SpineObject",
        }
    }

    /// Shared governance attributes, for the classifications that have them.
    pub fn governance(&self) -> Option<&GovernanceBase> {
        match self {
            Classification::Retention(c) => Some(&c.governance),
            Classification::Confidentiality(c) => Some(&c.governance),
            Classification::Confidence(c) => Some(&c.governance),
            Classification::Criticality(c) => Some(&c.governance),
            Classification::SubjectArea(_) | Classification::SpineObject(_) => None,
        }
    }
}
