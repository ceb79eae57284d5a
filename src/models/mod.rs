//! Domain models for screening estimation
//!
//! This module contains the entity models the estimator computes over:
//! demographic axes and groups, disease profiles, enrollment plans,
//! census baselines, and the per-group estimates it produces.

// Re-export entity models
pub mod disease;
pub mod estimate;
pub mod plan;
pub mod population;
pub mod types;

// Re-export commonly used types
pub use disease::{AgeGroup, Disease, DiseaseProfile};
pub use estimate::ScreeningEstimate;
pub use plan::EnrollmentPlan;
pub use population::PopulationBaseline;
pub use types::{DemographicAxis, DemographicGroup};
