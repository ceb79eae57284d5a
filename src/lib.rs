//! A Rust library for estimating clinical-trial screening requirements
//! across demographic groups.
//!
//! Given a disease profile (affected population, default enrollment targets,
//! prevalence, screen-success rates) and a caller-adjustable enrollment plan,
//! the estimator computes how many individuals from each demographic group
//! must be screened to reach the trial's enrollment target, then ranks the
//! groups by screening burden to prioritize recruitment focus. Every
//! computation is pure and stateless: the caller supplies an immutable input
//! snapshot and receives a fresh, independent result.

pub mod algorithm;
pub mod config;
pub mod error;
pub mod models;
pub mod reference;

// Re-export the most common types for easier use
// Core types
pub use config::{EligiblePopulationMode, EstimatorConfig};
pub use error::{EstimatorError, Result};
pub use models::disease::{AgeGroup, Disease, DiseaseProfile};
pub use models::estimate::ScreeningEstimate;
pub use models::plan::EnrollmentPlan;
pub use models::population::PopulationBaseline;
pub use models::types::{DemographicAxis, DemographicGroup};

// Estimation pipeline
pub use algorithm::estimation::{
    compute_all, compute_eligible_population, compute_group_target,
    compute_screen_burden_percent, compute_screened_needed, prevalence_scoped_population,
};
pub use algorithm::ranking::{merge_focus_list, rank_groups};
pub use algorithm::summary::generate_summary;

// Reference tables
pub use reference::{
    baseline_for, disease_profile, profile_for, us_65_plus_baseline, us_census_baseline,
};
