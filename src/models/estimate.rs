//! Screening requirement estimates

use serde::{Deserialize, Serialize};

use crate::models::types::DemographicGroup;

/// Screening requirement estimate for one demographic group
///
/// Produced by the estimation pipeline; an ordered collection of these,
/// sorted by descending burden, is the recruitment-focus ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScreeningEstimate {
    /// The demographic group this estimate covers
    pub group: DemographicGroup,
    /// Unrounded enrollment target for the group
    pub target_enrollment: f64,
    /// Whole-person screening requirement, rounded up
    pub screened_needed: u64,
    /// Estimated number of people in the group who have the disease
    pub eligible_population: u64,
    /// Required screens as a percentage of the eligible population
    pub burden_percent: f64,
}

impl ScreeningEstimate {
    /// Whether this estimate is a defined-zero degenerate result
    ///
    /// True when the eligible pool is empty, or a zero success rate made a
    /// positive target unreachable. The presentation layer should flag these
    /// as "not computable" rather than treating the zeros as real counts.
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.eligible_population == 0
            || (self.target_enrollment > 0.0 && self.screened_needed == 0)
    }
}
