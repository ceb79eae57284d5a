//! Disease reference profiles
//!
//! A `DiseaseProfile` bundles everything the estimator needs to know about
//! one disease for one computation: the affected population under the
//! age-group inclusion criterion, default enrollment targets, prevalence,
//! and per-group screen-success rates. Profiles are read-only snapshots;
//! caller adjustments live in the `EnrollmentPlan`, never here.

use std::fmt;

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::error::{EstimatorError, Result};
use crate::models::types::DemographicGroup;

/// Disease covered by the recruitment planner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Disease {
    /// Alzheimer's disease
    Alzheimers,
    /// Schizophrenia
    Schizophrenia,
    /// Bipolar disorder
    BipolarDisorder,
}

impl Disease {
    /// All supported diseases
    pub const ALL: [Self; 3] = [Self::Alzheimers, Self::Schizophrenia, Self::BipolarDisorder];

    /// Display label for the disease
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Alzheimers => "Alzheimer's",
            Self::Schizophrenia => "Schizophrenia",
            Self::BipolarDisorder => "Bipolar Disorder",
        }
    }

    /// Parse a disease from its display label
    #[must_use]
    pub fn from_label(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "alzheimer's" | "alzheimers" => Some(Self::Alzheimers),
            "schizophrenia" => Some(Self::Schizophrenia),
            "bipolar disorder" | "bipolar" => Some(Self::BipolarDisorder),
            _ => None,
        }
    }
}

impl fmt::Display for Disease {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Age-group inclusion criterion for the trial population
///
/// Only the Alzheimer's population totals differ by age group; the other
/// diseases use the same total for both criteria.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AgeGroup {
    /// Adults 18 and older
    Adult18Plus,
    /// Seniors 65 and older
    Senior65Plus,
}

/// Read-only reference data for one disease under one inclusion criterion
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiseaseProfile {
    /// The disease this profile describes
    pub disease: Disease,
    /// Total affected population under the age-group inclusion criterion
    pub total_affected: u64,
    /// Default target allocation percentage (0-100) per demographic group
    pub target_allocation: FxHashMap<DemographicGroup, f64>,
    /// Prevalence of the disease in the general population
    pub overall_prevalence: f64,
    /// Prevalence of the disease within each demographic group
    pub prevalence: FxHashMap<DemographicGroup, f64>,
    /// Probability a screened eligible candidate successfully enrolls, per group
    pub screen_success: FxHashMap<DemographicGroup, f64>,
}

impl DiseaseProfile {
    /// Look up the default target allocation percentage for a group
    #[must_use]
    pub fn target_allocation_pct(&self, group: DemographicGroup) -> Option<f64> {
        self.target_allocation.get(&group).copied()
    }

    /// Look up the screen-success rate for a group
    #[must_use]
    pub fn screen_success_rate(&self, group: DemographicGroup) -> Option<f64> {
        self.screen_success.get(&group).copied()
    }

    /// Look up the prevalence within a group
    #[must_use]
    pub fn group_prevalence(&self, group: DemographicGroup) -> Option<f64> {
        self.prevalence.get(&group).copied()
    }

    /// Check that every percentage and rate in the profile is in range
    ///
    /// Allocation percentages must lie in [0, 100]; prevalence fractions and
    /// screen-success rates in [0, 1]. Out-of-range reference data is a
    /// validation error, not a degenerate computation.
    pub fn validate(&self) -> Result<()> {
        for (group, pct) in &self.target_allocation {
            if !pct.is_finite() || *pct < 0.0 || *pct > 100.0 {
                return Err(EstimatorError::validation(format!(
                    "target allocation for {group} must be in [0, 100], got {pct}"
                )));
            }
        }
        for (group, rate) in &self.screen_success {
            if !rate.is_finite() || *rate < 0.0 || *rate > 1.0 {
                return Err(EstimatorError::validation(format!(
                    "screen-success rate for {group} must be in [0, 1], got {rate}"
                )));
            }
        }
        for (group, prevalence) in &self.prevalence {
            if !prevalence.is_finite() || *prevalence < 0.0 || *prevalence > 1.0 {
                return Err(EstimatorError::validation(format!(
                    "prevalence for {group} must be in [0, 1], got {prevalence}"
                )));
            }
        }
        if !self.overall_prevalence.is_finite()
            || self.overall_prevalence < 0.0
            || self.overall_prevalence > 1.0
        {
            return Err(EstimatorError::validation(format!(
                "overall prevalence must be in [0, 1], got {}",
                self.overall_prevalence
            )));
        }
        Ok(())
    }
}
