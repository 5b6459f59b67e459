//! Enumeration domains.
//!
//! Each domain is a closed set of `(ordinal, symbolic name)` pairs. The store
//! keeps both halves of the pair on every enum attribute, and the two can
//! disagree when data was written by an older or foreign client, so resolving
//! a stored value goes through [`EnumDomain::resolve`] with an explicit
//! [`EnumNamePolicy`].
//!
//! Ordinals are part of the stored data and must never be renumbered. `Other`
//! values sit at 99 so new values can be appended below them.

use serde::{de, Deserialize, Deserializer, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::MapperError;
use crate::property::EnumValue;

/// What to do when a stored symbolic name disagrees with the stored ordinal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EnumNamePolicy {
    /// The pair must agree; a mismatch is an unknown value.
    #[default]
    Strict,
    /// The ordinal decides; the stored name is ignored.
    Ordinal,
}

impl FromStr for EnumNamePolicy {
    type Err = MapperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "strict" => Ok(EnumNamePolicy::Strict),
            "ordinal" => Ok(EnumNamePolicy::Ordinal),
            other => Err(MapperError::InvalidSetting(format!(
                "enum name policy '{}' (expected 'strict' or 'ordinal')",
                other
            ))),
        }
    }
}

// Parsed from a plain string so config files, env vars and defaults all work.
impl<'de> Deserialize<'de> for EnumNamePolicy {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        String::deserialize(deserializer)?
            .parse()
            .map_err(de::Error::custom)
    }
}

/// A closed enumeration known to the mappers.
pub trait EnumDomain: Copy + Eq + fmt::Debug + 'static {
    /// Name of the domain as declared in the store's type system.
    const DOMAIN_NAME: &'static str;

    /// Every value, in declaration order.
    const VALUES: &'static [Self];

    fn ordinal(self) -> i32;

    fn symbolic_name(self) -> &'static str;

    fn description(self) -> &'static str;

    fn from_ordinal(ordinal: i32) -> Option<Self> {
        Self::VALUES.iter().copied().find(|v| v.ordinal() == ordinal)
    }

    fn from_symbolic_name(name: &str) -> Option<Self> {
        Self::VALUES
            .iter()
            .copied()
            .find(|v| v.symbolic_name() == name)
    }

    fn to_enum_value(self) -> EnumValue {
        EnumValue {
            ordinal: self.ordinal(),
            symbolic_name: Some(self.symbolic_name().to_string()),
            description: Some(self.description().to_string()),
        }
    }

    /// Resolve a stored value. `None` means the domain has no such value.
    fn resolve(stored: &EnumValue, policy: EnumNamePolicy) -> Option<Self> {
        let value = Self::from_ordinal(stored.ordinal)?;
        match (&stored.symbolic_name, policy) {
            (Some(name), EnumNamePolicy::Strict) if name != value.symbolic_name() => None,
            _ => Some(value),
        }
    }
}

/// Listing of one domain, for display.
#[derive(Debug, Clone, Serialize)]
pub struct DomainSummary {
    pub name: &'static str,
    pub values: Vec<DomainEntry>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DomainEntry {
    pub ordinal: i32,
    pub symbolic_name: &'static str,
    pub description: &'static str,
}

fn summarize<E: EnumDomain>() -> DomainSummary {
    DomainSummary {
        name: E::DOMAIN_NAME,
        values: E::VALUES
            .iter()
            .map(|v| DomainEntry {
                ordinal: v.ordinal(),
                symbolic_name: v.symbolic_name(),
                description: v.description(),
            })
            .collect(),
    }
}

/// All domains the mappers use.
pub fn domains() -> Vec<DomainSummary> {
    vec![
        summarize::<GovernanceClassificationStatus>(),
        summarize::<RetentionBasis>(),
        summarize::<ConfidentialityLevel>(),
        summarize::<ConfidenceLevel>(),
        summarize::<CriticalityLevel>(),
    ]
}

// --- GovernanceClassificationStatus ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GovernanceClassificationStatus {
    Unknown,
    Proposed,
    Approved,
    Validated,
    Deprecated,
    Obsolete,
    Other,
}

impl EnumDomain for GovernanceClassificationStatus {
    const DOMAIN_NAME: &'static str = "GovernanceClassificationStatus";
    const VALUES: &'static [Self] = &[
        Self::Unknown,
        Self::Proposed,
        Self::Approved,
        Self::Validated,
        Self::Deprecated,
        Self::Obsolete,
        Self::Other,
    ];

    fn ordinal(self) -> i32 {
        match self {
            Self::Unknown => 0,
            Self::Proposed => 1,
            Self::Approved => 2,
            Self::Validated => 3,
            Self::Deprecated => 4,
            Self::Obsolete => 5,
            Self::Other => 99,
        }
    }

    fn symbolic_name(self) -> &'static str {
        match self {
            Self::Unknown => "UNKNOWN",
            Self::Proposed => "PROPOSED",
            Self::Approved => "APPROVED",
            Self::Validated => "VALIDATED",
            Self::Deprecated => "DEPRECATED",
            Self::Obsolete => "OBSOLETE",
            Self::Other => "OTHER",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unknown => "The status of the classification assignment is not known.",
            Self::Proposed => "The classification assignment was proposed by a subject matter expert.",
            Self::Approved => "The classification assignment was approved by a subject matter expert.",
            Self::Validated => "The classification assignment has been validated and approved.",
            Self::Deprecated => "The classification assignment should no longer be used.",
            Self::Obsolete => "The classification assignment must no longer be used.",
            Self::Other => "Another classification assignment status.",
        }
    }
}

// --- RetentionBasis ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RetentionBasis {
    Unclassified,
    Temporary,
    Fiscal,
    ProjectLifetime,
    TeamLifetime,
    ContractLifetime,
    RegulatedLifetime,
    TimeBoxedLifetime,
    Other,
}

impl EnumDomain for RetentionBasis {
    const DOMAIN_NAME: &'static str = "RetentionBasis";
    const VALUES: &'static [Self] = &[
        Self::Unclassified,
        Self::Temporary,
        Self::Fiscal,
        Self::ProjectLifetime,
        Self::TeamLifetime,
        Self::ContractLifetime,
        Self::RegulatedLifetime,
        Self::TimeBoxedLifetime,
        Self::Other,
    ];

    fn ordinal(self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::Temporary => 1,
            Self::Fiscal => 2,
            Self::ProjectLifetime => 3,
            Self::TeamLifetime => 4,
            Self::ContractLifetime => 5,
            Self::RegulatedLifetime => 6,
            Self::TimeBoxedLifetime => 7,
            Self::Other => 99,
        }
    }

    fn symbolic_name(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Temporary => "TEMPORARY",
            Self::Fiscal => "FISCAL",
            Self::ProjectLifetime => "PROJECT_LIFETIME",
            Self::TeamLifetime => "TEAM_LIFETIME",
            Self::ContractLifetime => "CONTRACT_LIFETIME",
            Self::RegulatedLifetime => "REGULATED_LIFETIME",
            Self::TimeBoxedLifetime => "TIME_BOXED_LIFETIME",
            Self::Other => "OTHER",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unclassified => "There is no assessment of the retention requirements for this data.",
            Self::Temporary => "This data is temporary.",
            Self::Fiscal => "The data must be kept until the end of the fiscal period it belongs to.",
            Self::ProjectLifetime => "The data is needed for the lifetime of the referenced project.",
            Self::TeamLifetime => "The data is needed for the lifetime of the referenced team.",
            Self::ContractLifetime => "The data is needed for the lifetime of the referenced contract.",
            Self::RegulatedLifetime => "The retention period for the data is defined by the referenced regulation.",
            Self::TimeBoxedLifetime => "The data is needed for the specified time.",
            Self::Other => "Another basis for determining the retention requirement.",
        }
    }
}

// --- ConfidentialityLevel ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidentialityLevel {
    Unclassified,
    Internal,
    Confidential,
    Sensitive,
    Restricted,
    Other,
}

impl EnumDomain for ConfidentialityLevel {
    const DOMAIN_NAME: &'static str = "ConfidentialityLevel";
    const VALUES: &'static [Self] = &[
        Self::Unclassified,
        Self::Internal,
        Self::Confidential,
        Self::Sensitive,
        Self::Restricted,
        Self::Other,
    ];

    fn ordinal(self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::Internal => 1,
            Self::Confidential => 2,
            Self::Sensitive => 3,
            Self::Restricted => 4,
            Self::Other => 99,
        }
    }

    fn symbolic_name(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Internal => "INTERNAL",
            Self::Confidential => "CONFIDENTIAL",
            Self::Sensitive => "SENSITIVE",
            Self::Restricted => "RESTRICTED",
            Self::Other => "OTHER",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unclassified => "The data is public information.",
            Self::Internal => "The data should not be exposed outside of this organization.",
            Self::Confidential => "The data should be protected and only shared with people with a need to see it.",
            Self::Sensitive => "The data is sensitive and inappropriate use may adversely impact the data subject.",
            Self::Restricted => "The data is very valuable and must be restricted to a very small number of people.",
            Self::Other => "Another confidentiality level.",
        }
    }
}

// --- ConfidenceLevel ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ConfidenceLevel {
    Unclassified,
    AdHoc,
    Transactional,
    Authoritative,
    Derived,
    Obsolete,
    Other,
}

impl EnumDomain for ConfidenceLevel {
    const DOMAIN_NAME: &'static str = "ConfidenceLevel";
    const VALUES: &'static [Self] = &[
        Self::Unclassified,
        Self::AdHoc,
        Self::Transactional,
        Self::Authoritative,
        Self::Derived,
        Self::Obsolete,
        Self::Other,
    ];

    fn ordinal(self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::AdHoc => 1,
            Self::Transactional => 2,
            Self::Authoritative => 3,
            Self::Derived => 4,
            Self::Obsolete => 5,
            Self::Other => 99,
        }
    }

    fn symbolic_name(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::AdHoc => "AD_HOC",
            Self::Transactional => "TRANSACTIONAL",
            Self::Authoritative => "AUTHORITATIVE",
            Self::Derived => "DERIVED",
            Self::Obsolete => "OBSOLETE",
            Self::Other => "OTHER",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unclassified => "There is no assessment of the confidence level of this data.",
            Self::AdHoc => "The data comes from an ad hoc process.",
            Self::Transactional => "The data comes from a transactional system so it may have a narrow scope.",
            Self::Authoritative => "The data comes from an authoritative source.",
            Self::Derived => "The data is derived from other data through an analytical process.",
            Self::Obsolete => "The data comes from an obsolete source and must no longer be used.",
            Self::Other => "Another confidence level.",
        }
    }
}

// --- CriticalityLevel ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CriticalityLevel {
    Unclassified,
    Marginal,
    Important,
    Critical,
    Catastrophic,
    Other,
}

impl EnumDomain for CriticalityLevel {
    const DOMAIN_NAME: &'static str = "CriticalityLevel";
    const VALUES: &'static [Self] = &[
        Self::Unclassified,
        Self::Marginal,
        Self::Important,
        Self::Critical,
        Self::Catastrophic,
        Self::Other,
    ];

    fn ordinal(self) -> i32 {
        match self {
            Self::Unclassified => 0,
            Self::Marginal => 1,
            Self::Important => 2,
            Self::Critical => 3,
            Self::Catastrophic => 4,
            Self::Other => 99,
        }
    }

    fn symbolic_name(self) -> &'static str {
        match self {
            Self::Unclassified => "UNCLASSIFIED",
            Self::Marginal => "MARGINAL",
            Self::Important => "IMPORTANT",
            Self::Critical => "CRITICAL",
            Self::Catastrophic => "CATASTROPHIC",
            Self::Other => "OTHER",
        }
    }

    fn description(self) -> &'static str {
        match self {
            Self::Unclassified => "There is no assessment of the criticality of this data.",
            Self::Marginal => "The data is of minor importance to the organization.",
            Self::Important => "The data is important to the running of the organization.",
            Self::Critical => "The data is critical to the operation of the organization.",
            Self::Catastrophic => "The loss of this data would be catastrophic to the organization.",
            Self::Other => "Another criticality level.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn policy_parses_case_insensitively() {
        assert_eq!("Ordinal".parse::<EnumNamePolicy>().unwrap(), EnumNamePolicy::Ordinal);
        assert_eq!(" strict ".parse::<EnumNamePolicy>().unwrap(), EnumNamePolicy::Strict);
        assert!(matches!(
            "loose".parse::<EnumNamePolicy>(),
            Err(MapperError::InvalidSetting(_))
        ));
    }

    fn check_domain<E: EnumDomain + Serialize>() {
        let mut ordinals: Vec<i32> = E::VALUES.iter().map(|v| v.ordinal()).collect();
        ordinals.sort_unstable();
        ordinals.dedup();
        assert_eq!(ordinals.len(), E::VALUES.len(), "{} ordinals", E::DOMAIN_NAME);

        for value in E::VALUES {
            assert_eq!(E::from_ordinal(value.ordinal()), Some(*value));
            assert_eq!(E::from_symbolic_name(value.symbolic_name()), Some(*value));
            // serde names line up with the stored symbolic names
            let json = serde_json::to_string(value).unwrap();
            assert_eq!(json, format!("\"{}\"", value.symbolic_name()));
        }
    }

    #[test]
    fn all_domains_are_consistent() {
        check_domain::<GovernanceClassificationStatus>();
        check_domain::<RetentionBasis>();
        check_domain::<ConfidentialityLevel>();
        check_domain::<ConfidenceLevel>();
        check_domain::<CriticalityLevel>();
    }

    #[test]
    fn to_enum_value_carries_name_and_description() {
        let value = ConfidentialityLevel::Sensitive.to_enum_value();
        assert_eq!(value.ordinal, 3);
        assert_eq!(value.symbolic_name.as_deref(), Some("SENSITIVE"));
        assert_eq!(
            value.description.as_deref(),
            Some(ConfidentialityLevel::Sensitive.description())
        );
        assert_eq!(
            ConfidentialityLevel::resolve(&value, EnumNamePolicy::Strict),
            Some(ConfidentialityLevel::Sensitive)
        );
    }

    #[test]
    fn unknown_status_is_described_as_unknown() {
        let unknown = GovernanceClassificationStatus::Unknown;
        assert_eq!(unknown.symbolic_name(), "UNKNOWN");
        assert!(unknown.description().contains("not known"));
    }

    #[test]
    fn first_declared_value_is_ordinal_zero() {
        assert_eq!(RetentionBasis::from_ordinal(0), Some(RetentionBasis::VALUES[0]));
        assert_eq!(RetentionBasis::Fiscal.ordinal(), 2);
        assert_eq!(RetentionBasis::Fiscal.symbolic_name(), "FISCAL");
    }

    #[test]
    fn resolve_unknown_ordinal() {
        let stored = EnumValue::new(42, "FISCAL");
        assert_eq!(RetentionBasis::resolve(&stored, EnumNamePolicy::Strict), None);
        assert_eq!(RetentionBasis::resolve(&stored, EnumNamePolicy::Ordinal), None);
    }

    #[test]
    fn resolve_name_mismatch_depends_on_policy() {
        let stored = EnumValue::new(2, "TEMPORARY");
        assert_eq!(RetentionBasis::resolve(&stored, EnumNamePolicy::Strict), None);
        assert_eq!(
            RetentionBasis::resolve(&stored, EnumNamePolicy::Ordinal),
            Some(RetentionBasis::Fiscal)
        );
    }

    #[test]
    fn resolve_ordinal_only_value() {
        let stored = EnumValue::ordinal_only(99);
        assert_eq!(
            GovernanceClassificationStatus::resolve(&stored, EnumNamePolicy::Strict),
            Some(GovernanceClassificationStatus::Other)
        );
    }

    #[test]
    fn domains_lists_every_domain() {
        let names: Vec<_> = domains().iter().map(|d| d.name).collect();
        assert_eq!(
            names,
            vec![
                "GovernanceClassificationStatus",
                "RetentionBasis",
                "ConfidentialityLevel",
                "ConfidenceLevel",
                "CriticalityLevel"
            ]
        );
    }
}
