//! Prioritized fallback lookups for per-group inputs
//!
//! The source data allows the same quantity to come from several places
//! (caller override, disease profile, built-in default). Each resolver here
//! fixes the fallback order explicitly so it can be tested in isolation
//! instead of being buried in the computation loop.

use crate::config::EstimatorConfig;
use crate::models::disease::DiseaseProfile;
use crate::models::plan::EnrollmentPlan;
use crate::models::types::DemographicGroup;

/// Allocation percentage for a group
///
/// Fallback order: plan override, then the profile's default target
/// distribution, then zero (the group gets no enrollment slice).
#[must_use]
pub fn resolve_allocation_pct(
    plan: &EnrollmentPlan,
    profile: &DiseaseProfile,
    group: DemographicGroup,
) -> f64 {
    plan.allocation_override(group)
        .or_else(|| profile.target_allocation_pct(group))
        .unwrap_or(0.0)
}

/// Screen-success rate for a group
///
/// Fallback order: plan override, then the profile's rate table, then the
/// configured default (0.5 out of the box).
#[must_use]
pub fn resolve_screen_success_rate(
    plan: &EnrollmentPlan,
    profile: &DiseaseProfile,
    group: DemographicGroup,
    config: &EstimatorConfig,
) -> f64 {
    plan.rate_override(group)
        .or_else(|| profile.screen_success_rate(group))
        .unwrap_or(config.default_screen_success_rate)
}

/// Prevalence fraction for a group
///
/// Fallback order: the profile's per-group table, then its overall
/// prevalence. Used only in the prevalence-scoped eligible-population mode.
#[must_use]
pub fn resolve_prevalence(profile: &DiseaseProfile, group: DemographicGroup) -> f64 {
    profile
        .group_prevalence(group)
        .unwrap_or(profile.overall_prevalence)
}
