//! Configuration for the screening estimator.

use serde::{Deserialize, Serialize};

/// How the eligible population for a demographic group is derived
/// from the disease population.
///
/// The source data admits two readings of "eligible": either the disease
/// population is already scoped per group by the target allocation, or it
/// must additionally be scaled by the group's prevalence fraction. These
/// are distinct modes and are never merged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EligiblePopulationMode {
    /// Disease population scaled by the group's allocation percentage
    AllocationScoped,
    /// Disease population scaled by the group's prevalence fraction
    PrevalenceScoped,
}

/// Configuration for the screening estimator
#[derive(Debug, Clone)]
pub struct EstimatorConfig {
    /// Smallest accepted total enrollment target
    pub min_enrollment: u64,
    /// Largest accepted total enrollment target
    pub max_enrollment: u64,
    /// Screen-success rate assumed when neither the plan nor the profile carries one
    pub default_screen_success_rate: f64,
    /// How eligible populations are derived from the disease population
    pub eligible_population_mode: EligiblePopulationMode,
    /// Log each per-group computation for debugging
    pub log_computations: bool,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            min_enrollment: 100,
            max_enrollment: 1_000_000,
            default_screen_success_rate: crate::reference::DEFAULT_SCREEN_SUCCESS_RATE,
            eligible_population_mode: EligiblePopulationMode::AllocationScoped,
            log_computations: false,
        }
    }
}
