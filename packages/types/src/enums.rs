//! Domain enums shared by validation and view layers.
//!
//! Wire names (serde) and database names (sqlx, behind the `postgres`
//! feature) are identical, including the multi-word variants
//! `"Cold Call"` and `"Proposal Sent"`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Error returned when a string is not a member of one of the domain enums.
///
/// Carries no detail on purpose; the validation layer attaches the
/// field-level message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidEnumValue;

impl fmt::Display for InvalidEnumValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("value is not a member of the enumerated set")
    }
}

impl std::error::Error for InvalidEnumValue {}

/// Where a lead came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "postgres",
    derive(sqlx::Type),
    sqlx(type_name = "lead_source")
)]
pub enum LeadSource {
    Website,
    Referral,
    #[serde(rename = "Cold Call")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Cold Call"))]
    ColdCall,
    Advertisement,
    Email,
    Other,
}

impl LeadSource {
    pub const ALL: [LeadSource; 6] = [
        LeadSource::Website,
        LeadSource::Referral,
        LeadSource::ColdCall,
        LeadSource::Advertisement,
        LeadSource::Email,
        LeadSource::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadSource::Website => "Website",
            LeadSource::Referral => "Referral",
            LeadSource::ColdCall => "Cold Call",
            LeadSource::Advertisement => "Advertisement",
            LeadSource::Email => "Email",
            LeadSource::Other => "Other",
        }
    }
}

impl fmt::Display for LeadSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadSource {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or(InvalidEnumValue)
    }
}

/// Lifecycle stage of a lead. `Closed` is the terminal pipeline exit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(
    feature = "postgres",
    derive(sqlx::Type),
    sqlx(type_name = "lead_status")
)]
pub enum LeadStatus {
    New,
    Contacted,
    Qualified,
    #[serde(rename = "Proposal Sent")]
    #[cfg_attr(feature = "postgres", sqlx(rename = "Proposal Sent"))]
    ProposalSent,
    Closed,
}

impl LeadStatus {
    /// Pipeline order, used for dashboard grouping.
    pub const ALL: [LeadStatus; 5] = [
        LeadStatus::New,
        LeadStatus::Contacted,
        LeadStatus::Qualified,
        LeadStatus::ProposalSent,
        LeadStatus::Closed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LeadStatus::New => "New",
            LeadStatus::Contacted => "Contacted",
            LeadStatus::Qualified => "Qualified",
            LeadStatus::ProposalSent => "Proposal Sent",
            LeadStatus::Closed => "Closed",
        }
    }

    pub fn is_closed(&self) -> bool {
        matches!(self, LeadStatus::Closed)
    }
}

impl fmt::Display for LeadStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadStatus {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or(InvalidEnumValue)
    }
}

/// Lead priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(
    feature = "postgres",
    derive(sqlx::Type),
    sqlx(type_name = "lead_priority")
)]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "High",
            Priority::Medium => "Medium",
            Priority::Low => "Low",
        }
    }

    /// Sort weight: High > Medium > Low.
    pub fn weight(&self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = InvalidEnumValue;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.as_str() == s)
            .ok_or(InvalidEnumValue)
    }
}
