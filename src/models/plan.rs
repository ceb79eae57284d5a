//! Caller-adjustable enrollment plans
//!
//! The plan carries the total enrollment target plus any per-group
//! overrides the caller has made to allocation percentages or
//! screen-success rates. It is an immutable snapshot for the duration of
//! one computation; the presentation layer owns mutable state and
//! re-supplies a fresh plan on every call.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::config::EstimatorConfig;
use crate::error::{EstimatorError, Result};
use crate::models::types::DemographicGroup;

/// Enrollment targets and per-group overrides for one estimation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnrollmentPlan {
    /// Total enrollment target for the trial
    pub total_enrollment: u64,
    /// Allocation-percentage overrides (0-100) keyed by group
    pub allocation_overrides: FxHashMap<DemographicGroup, f64>,
    /// Screen-success-rate overrides (0-1) keyed by group
    pub rate_overrides: FxHashMap<DemographicGroup, f64>,
}

impl EnrollmentPlan {
    /// Create a plan with the given total and no overrides
    #[must_use]
    pub fn new(total_enrollment: u64) -> Self {
        Self {
            total_enrollment,
            allocation_overrides: FxHashMap::default(),
            rate_overrides: FxHashMap::default(),
        }
    }

    /// Override the allocation percentage for a group
    #[must_use]
    pub fn with_allocation(mut self, group: DemographicGroup, pct: f64) -> Self {
        self.allocation_overrides.insert(group, pct);
        self
    }

    /// Override the screen-success rate for a group
    #[must_use]
    pub fn with_screen_success_rate(mut self, group: DemographicGroup, rate: f64) -> Self {
        self.rate_overrides.insert(group, rate);
        self
    }

    /// The caller's allocation override for a group, if any
    #[must_use]
    pub fn allocation_override(&self, group: DemographicGroup) -> Option<f64> {
        self.allocation_overrides.get(&group).copied()
    }

    /// The caller's screen-success-rate override for a group, if any
    #[must_use]
    pub fn rate_override(&self, group: DemographicGroup) -> Option<f64> {
        self.rate_overrides.get(&group).copied()
    }

    /// Range-check the plan against the configured bounds
    ///
    /// The estimation pipeline assumes pre-validated input; callers run this
    /// at the boundary before computing. Allocation percentages need not sum
    /// to 100 across groups - that is the caller's responsibility.
    pub fn validate(&self, config: &EstimatorConfig) -> Result<()> {
        if self.total_enrollment < config.min_enrollment
            || self.total_enrollment > config.max_enrollment
        {
            return Err(EstimatorError::validation(format!(
                "total enrollment must be in [{}, {}], got {}",
                config.min_enrollment, config.max_enrollment, self.total_enrollment
            )));
        }
        for (group, pct) in &self.allocation_overrides {
            if !pct.is_finite() || *pct < 0.0 || *pct > 100.0 {
                return Err(EstimatorError::validation(format!(
                    "allocation override for {group} must be in [0, 100], got {pct}"
                )));
            }
        }
        for (group, rate) in &self.rate_overrides {
            if !rate.is_finite() || *rate < 0.0 || *rate > 1.0 {
                return Err(EstimatorError::validation(format!(
                    "rate override for {group} must be in [0, 1], got {rate}"
                )));
            }
        }
        Ok(())
    }
}
