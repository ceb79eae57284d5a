//! Common domain type definitions
//!
//! This module contains the demographic axis and group enumerations used
//! across the estimator. Group labels are stable identifiers matching the
//! reference tables, not free text.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Demographic axis along which enrollment targets are tracked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemographicAxis {
    /// Gender axis (Female, Male)
    Gender,
    /// Race/ethnicity axis (Census categories, non-Hispanic marked NH)
    Race,
}

impl DemographicAxis {
    /// Both axes, in the order they are reported
    pub const ALL: [Self; 2] = [Self::Gender, Self::Race];

    /// The fixed, ordered group label set for this axis
    #[must_use]
    pub const fn groups(self) -> &'static [DemographicGroup] {
        match self {
            Self::Gender => &[DemographicGroup::Female, DemographicGroup::Male],
            Self::Race => &[
                DemographicGroup::Hispanic,
                DemographicGroup::WhiteNh,
                DemographicGroup::BlackNh,
                DemographicGroup::AsianNh,
                DemographicGroup::AianNh,
                DemographicGroup::NhpiNh,
                DemographicGroup::Other,
            ],
        }
    }
}

impl fmt::Display for DemographicAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gender => write!(f, "Gender"),
            Self::Race => write!(f, "Race"),
        }
    }
}

/// Demographic group within one axis
///
/// The Gender and Race label sets are disjoint, so a single flat enumeration
/// covers both axes; `axis()` recovers the owning axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DemographicGroup {
    /// Female
    Female,
    /// Male
    Male,
    /// Hispanic or Latino
    Hispanic,
    /// White, non-Hispanic
    WhiteNh,
    /// Black, non-Hispanic
    BlackNh,
    /// Asian, non-Hispanic
    AsianNh,
    /// American Indian / Alaska Native, non-Hispanic
    AianNh,
    /// Native Hawaiian / Pacific Islander, non-Hispanic
    NhpiNh,
    /// Other or multiracial
    Other,
}

impl DemographicGroup {
    /// All groups across both axes, in reporting order
    pub const ALL: [Self; 9] = [
        Self::Female,
        Self::Male,
        Self::Hispanic,
        Self::WhiteNh,
        Self::BlackNh,
        Self::AsianNh,
        Self::AianNh,
        Self::NhpiNh,
        Self::Other,
    ];

    /// The axis this group belongs to
    #[must_use]
    pub const fn axis(self) -> DemographicAxis {
        match self {
            Self::Female | Self::Male => DemographicAxis::Gender,
            _ => DemographicAxis::Race,
        }
    }

    /// The stable display label matching the reference tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Female => "Female",
            Self::Male => "Male",
            Self::Hispanic => "Hispanic",
            Self::WhiteNh => "White, NH",
            Self::BlackNh => "Black, NH",
            Self::AsianNh => "Asian, NH",
            Self::AianNh => "AIAN, NH",
            Self::NhpiNh => "NHPI, NH",
            Self::Other => "Other",
        }
    }

    /// Parse a group from its display label
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "female" | "f" => Some(Self::Female),
            "male" | "m" => Some(Self::Male),
            "hispanic" => Some(Self::Hispanic),
            "white, nh" | "white" => Some(Self::WhiteNh),
            "black, nh" | "black" => Some(Self::BlackNh),
            "asian, nh" | "asian" => Some(Self::AsianNh),
            "aian, nh" | "aian" => Some(Self::AianNh),
            "nhpi, nh" | "nhpi" => Some(Self::NhpiNh),
            "other" => Some(Self::Other),
            _ => None,
        }
    }
}

impl fmt::Display for DemographicGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}
