//! Census population baselines
//!
//! A baseline maps demographic groups to their census share of a total
//! population. Baselines are informational context for the estimator:
//! shares within one axis are expected to sum to roughly 100 percent,
//! but this is not enforced.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::models::types::{DemographicAxis, DemographicGroup};

/// Census population baseline for one reference population
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PopulationBaseline {
    /// Total population count
    pub total_population: u64,
    /// Census percentage (0-100) per demographic group
    pub shares: FxHashMap<DemographicGroup, f64>,
}

impl PopulationBaseline {
    /// The census share (0-100) for a group, zero if untracked
    #[must_use]
    pub fn share(&self, group: DemographicGroup) -> f64 {
        self.shares.get(&group).copied().unwrap_or(0.0)
    }

    /// Estimated head count for a group, rounded down
    #[must_use]
    pub fn group_population(&self, group: DemographicGroup) -> u64 {
        (self.share(group) / 100.0 * self.total_population as f64).floor() as u64
    }

    /// Sum of shares across one axis, nominally ~100
    #[must_use]
    pub fn axis_share_total(&self, axis: DemographicAxis) -> f64 {
        axis.groups().iter().map(|&g| self.share(g)).sum()
    }
}
