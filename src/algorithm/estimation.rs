//! Screening estimation pipeline
//!
//! Pure functions converting an enrollment plan and a disease profile into
//! per-group screening requirements. No operation here fails: degenerate
//! numeric input (zero success rate, empty eligible pool) resolves to a
//! defined zero result that the caller flags, not to an error.

use log::{debug, warn};
use smallvec::SmallVec;

use crate::algorithm::lookup;
use crate::algorithm::ranking::rank_groups;
use crate::config::{EligiblePopulationMode, EstimatorConfig};
use crate::models::disease::DiseaseProfile;
use crate::models::estimate::ScreeningEstimate;
use crate::models::plan::EnrollmentPlan;
use crate::models::population::PopulationBaseline;
use crate::models::types::{DemographicAxis, DemographicGroup};

/// Unrounded enrollment target for one group
///
/// Degenerate inputs (zero enrollment, zero percent) yield zero.
#[must_use]
pub fn compute_group_target(total_enroll: u64, allocation_pct: f64) -> f64 {
    total_enroll as f64 * allocation_pct / 100.0
}

/// Whole-person screening requirement to reach a group target
///
/// Always rounded up: screening counts are whole people and rounding down
/// would under-resource recruitment. A zero success rate makes the target
/// unreachable, so the result is a defined zero rather than an error; the
/// estimate surfaces this through `ScreeningEstimate::is_degenerate`.
#[must_use]
pub fn compute_screened_needed(target_n: f64, screen_success_rate: f64) -> u64 {
    if screen_success_rate > 0.0 {
        (target_n / screen_success_rate).ceil() as u64
    } else {
        0
    }
}

/// Estimated number of people in the group who have the disease
///
/// The disease population scaled by the group's allocation percentage,
/// rounded down.
#[must_use]
pub fn compute_eligible_population(group_allocation_pct: f64, disease_population: u64) -> u64 {
    (group_allocation_pct / 100.0 * disease_population as f64).floor() as u64
}

/// Eligible population under the prevalence-scoped alternative mode
///
/// The disease population scaled by the group's prevalence fraction,
/// rounded to the nearest person.
#[must_use]
pub fn prevalence_scoped_population(prevalence: f64, disease_population: u64) -> u64 {
    (prevalence * disease_population as f64).round() as u64
}

/// Share of the group's eligible disease population that must be screened
///
/// The prioritization signal: a group with a small eligible pool and a large
/// screening requirement has high burden and surfaces first in the ranking.
/// An empty pool yields zero, not a division error.
#[must_use]
pub fn compute_screen_burden_percent(screened_needed: u64, eligible_population: u64) -> f64 {
    if eligible_population > 0 {
        screened_needed as f64 / eligible_population as f64 * 100.0
    } else {
        0.0
    }
}

/// Estimate the screening requirement for a single group
fn estimate_group(
    group: DemographicGroup,
    profile: &DiseaseProfile,
    plan: &EnrollmentPlan,
    config: &EstimatorConfig,
) -> ScreeningEstimate {
    let allocation_pct = lookup::resolve_allocation_pct(plan, profile, group);
    let rate = lookup::resolve_screen_success_rate(plan, profile, group, config);

    let target_enrollment = compute_group_target(plan.total_enrollment, allocation_pct);
    let screened_needed = compute_screened_needed(target_enrollment, rate);
    let eligible_population = match config.eligible_population_mode {
        EligiblePopulationMode::AllocationScoped => {
            compute_eligible_population(allocation_pct, profile.total_affected)
        }
        EligiblePopulationMode::PrevalenceScoped => {
            prevalence_scoped_population(lookup::resolve_prevalence(profile, group), profile.total_affected)
        }
    };
    let burden_percent = compute_screen_burden_percent(screened_needed, eligible_population);

    ScreeningEstimate {
        group,
        target_enrollment,
        screened_needed,
        eligible_population,
        burden_percent,
    }
}

/// Compute ranked screening estimates for every group in one axis
///
/// For each group in the axis's fixed order: resolve the allocation and
/// screen-success rate through the documented fallback chains, compute the
/// group target, screening requirement, eligible population, and burden,
/// then return the collection ranked by descending burden. Axes are always
/// computed independently; the baseline supplies census context for logging
/// only and never enters the arithmetic.
#[must_use]
pub fn compute_all(
    axis: DemographicAxis,
    profile: &DiseaseProfile,
    plan: &EnrollmentPlan,
    baseline: &PopulationBaseline,
    config: &EstimatorConfig,
) -> Vec<ScreeningEstimate> {
    let share_total = baseline.axis_share_total(axis);
    if (share_total - 100.0).abs() > 5.0 {
        warn!("{axis} census shares sum to {share_total:.1}%, expected ~100%");
    }

    let estimates: SmallVec<[ScreeningEstimate; 8]> = axis
        .groups()
        .iter()
        .map(|&group| {
            let estimate = estimate_group(group, profile, plan, config);
            if config.log_computations {
                debug!(
                    "{} ({}): target {:.1}, screen {} of {} eligible ({:.3}%), census share {:.1}%",
                    group,
                    profile.disease,
                    estimate.target_enrollment,
                    estimate.screened_needed,
                    estimate.eligible_population,
                    estimate.burden_percent,
                    baseline.share(group),
                );
            }
            estimate
        })
        .collect();

    rank_groups(estimates.into_vec())
}
