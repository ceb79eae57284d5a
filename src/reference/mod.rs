//! Static reference tables
//!
//! Census baselines, disease population totals, default enrollment-target
//! distributions, prevalence tables, and default screen-success rates.
//! These are compiled-in configuration data, not computed values; the
//! estimator receives them as read-only snapshots.

use rustc_hash::FxHashMap;

use crate::error::{EstimatorError, Result};
use crate::models::disease::{AgeGroup, Disease, DiseaseProfile};
use crate::models::population::PopulationBaseline;
use crate::models::types::DemographicGroup;

use DemographicGroup::{AianNh, AsianNh, BlackNh, Female, Hispanic, Male, NhpiNh, Other, WhiteNh};

/// Total US population for the all-ages baseline
pub const US_TOTAL_POPULATION: u64 = 334_900_000;

/// Total US population aged 65 and older
pub const US_65PLUS_POPULATION: u64 = 55_800_000;

/// Screen-success rate assumed for a group absent from every table
pub const DEFAULT_SCREEN_SUCCESS_RATE: f64 = 0.5;

const US_CENSUS_SHARES: [(DemographicGroup, f64); 9] = [
    (Female, 50.5),
    (Male, 49.5),
    (Hispanic, 17.6),
    (WhiteNh, 61.1),
    (BlackNh, 12.3),
    (AsianNh, 6.3),
    (AianNh, 0.7),
    (NhpiNh, 0.2),
    (Other, 1.8),
];

const US_65PLUS_SHARES: [(DemographicGroup, f64); 9] = [
    (Female, 50.9),
    (Male, 49.1),
    (Hispanic, 8.8),
    (WhiteNh, 76.6),
    (BlackNh, 9.2),
    (AsianNh, 4.5),
    (AianNh, 0.7),
    (NhpiNh, 0.1),
    (Other, 3.4),
];

const ALZHEIMERS_TARGET: [(DemographicGroup, f64); 9] = [
    (Female, 64.0),
    (Male, 36.0),
    (Hispanic, 21.2),
    (WhiteNh, 51.7),
    (BlackNh, 19.2),
    (AsianNh, 5.9),
    (AianNh, 0.8),
    (NhpiNh, 0.3),
    (Other, 0.9),
];

const SCHIZOPHRENIA_TARGET: [(DemographicGroup, f64); 9] = [
    (Female, 40.0),
    (Male, 60.0),
    (Hispanic, 15.0),
    (WhiteNh, 30.0),
    (BlackNh, 25.0),
    (AsianNh, 10.0),
    (AianNh, 10.0),
    (NhpiNh, 5.0),
    (Other, 5.0),
];

const BIPOLAR_TARGET: [(DemographicGroup, f64); 9] = [
    (Female, 51.0),
    (Male, 49.0),
    (Hispanic, 18.5),
    (WhiteNh, 53.0),
    (BlackNh, 16.0),
    (AsianNh, 7.0),
    (AianNh, 1.0),
    (NhpiNh, 0.5),
    (Other, 4.0),
];

const ALZHEIMERS_PREVALENCE: [(DemographicGroup, f64); 9] = [
    (Female, 0.12),
    (Male, 0.086),
    (Hispanic, 0.11),
    (WhiteNh, 0.08),
    (BlackNh, 0.14),
    (AsianNh, 0.06),
    (AianNh, 0.07),
    (NhpiNh, 0.07),
    (Other, 0.07),
];

const SCHIZOPHRENIA_PREVALENCE: [(DemographicGroup, f64); 9] = [
    (Female, 0.008),
    (Male, 0.012),
    (Hispanic, 0.012),
    (WhiteNh, 0.007),
    (BlackNh, 0.015),
    (AsianNh, 0.008),
    (AianNh, 0.009),
    (NhpiNh, 0.009),
    (Other, 0.01),
];

const BIPOLAR_PREVALENCE: [(DemographicGroup, f64); 9] = [
    (Female, 0.032),
    (Male, 0.028),
    (Hispanic, 0.03),
    (WhiteNh, 0.028),
    (BlackNh, 0.032),
    (AsianNh, 0.025),
    (AianNh, 0.03),
    (NhpiNh, 0.03),
    (Other, 0.03),
];

fn table(entries: &[(DemographicGroup, f64)]) -> FxHashMap<DemographicGroup, f64> {
    entries.iter().copied().collect()
}

/// A screen-success table with the same rate for every group
fn uniform_rates(rate: f64) -> FxHashMap<DemographicGroup, f64> {
    DemographicGroup::ALL.iter().map(|&g| (g, rate)).collect()
}

/// All-ages US census baseline
#[must_use]
pub fn us_census_baseline() -> PopulationBaseline {
    PopulationBaseline {
        total_population: US_TOTAL_POPULATION,
        shares: table(&US_CENSUS_SHARES),
    }
}

/// US census baseline for ages 65 and older
#[must_use]
pub fn us_65_plus_baseline() -> PopulationBaseline {
    PopulationBaseline {
        total_population: US_65PLUS_POPULATION,
        shares: table(&US_65PLUS_SHARES),
    }
}

/// Census baseline matching an age-group inclusion criterion
#[must_use]
pub fn baseline_for(age_group: AgeGroup) -> PopulationBaseline {
    match age_group {
        AgeGroup::Adult18Plus => us_census_baseline(),
        AgeGroup::Senior65Plus => us_65_plus_baseline(),
    }
}

/// Total affected population for a disease under an inclusion criterion
///
/// Only the Alzheimer's totals differ by age group.
#[must_use]
pub const fn disease_total(disease: Disease, age_group: AgeGroup) -> u64 {
    match (disease, age_group) {
        (Disease::Alzheimers, AgeGroup::Adult18Plus) => 7_100_000,
        (Disease::Alzheimers, AgeGroup::Senior65Plus) => 6_900_000,
        (Disease::Schizophrenia, _) => 3_200_000,
        (Disease::BipolarDisorder, _) => 3_100_000,
    }
}

/// Overall prevalence of a disease in the general population
#[must_use]
pub const fn overall_prevalence(disease: Disease) -> f64 {
    match disease {
        Disease::Alzheimers => 0.103,
        Disease::Schizophrenia => 0.01,
        Disease::BipolarDisorder => 0.03,
    }
}

/// Assemble the full reference profile for a disease and inclusion criterion
#[must_use]
pub fn disease_profile(disease: Disease, age_group: AgeGroup) -> DiseaseProfile {
    let (targets, prevalence, success_rate): (&[_], &[_], f64) = match disease {
        Disease::Alzheimers => (&ALZHEIMERS_TARGET, &ALZHEIMERS_PREVALENCE, 0.4),
        Disease::Schizophrenia => (&SCHIZOPHRENIA_TARGET, &SCHIZOPHRENIA_PREVALENCE, 0.5),
        Disease::BipolarDisorder => (&BIPOLAR_TARGET, &BIPOLAR_PREVALENCE, 0.5),
    };
    DiseaseProfile {
        disease,
        total_affected: disease_total(disease, age_group),
        target_allocation: table(targets),
        overall_prevalence: overall_prevalence(disease),
        prevalence: table(prevalence),
        screen_success: uniform_rates(success_rate),
    }
}

/// Resolve a caller-supplied disease identifier into its reference profile
pub fn profile_for(identifier: &str, age_group: AgeGroup) -> Result<DiseaseProfile> {
    Disease::from_label(identifier)
        .map(|disease| disease_profile(disease, age_group))
        .ok_or_else(|| EstimatorError::reference_data(format!("unknown disease: {identifier}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::DemographicAxis;

    #[test]
    fn test_profile_for_resolves_known_labels() {
        let profile = profile_for("Alzheimer's", AgeGroup::Senior65Plus).unwrap();
        assert_eq!(profile.disease, Disease::Alzheimers);
        assert_eq!(profile.total_affected, 6_900_000);

        assert!(profile_for("dementia", AgeGroup::Adult18Plus).is_err());
    }

    #[test]
    fn test_baseline_shares_sum_to_roughly_100() {
        for baseline in [us_census_baseline(), us_65_plus_baseline()] {
            for axis in DemographicAxis::ALL {
                // the 65+ race shares sum to 103.3 in the source census data
                let total = baseline.axis_share_total(axis);
                assert!((total - 100.0).abs() < 5.0, "{axis} shares sum to {total}");
            }
        }
    }

    #[test]
    fn test_every_profile_validates() {
        for disease in Disease::ALL {
            for age_group in [AgeGroup::Adult18Plus, AgeGroup::Senior65Plus] {
                let profile = disease_profile(disease, age_group);
                profile.validate().unwrap();
                assert!(profile.total_affected > 0);
            }
        }
    }

    #[test]
    fn test_alzheimers_totals_differ_by_age_group() {
        assert_eq!(disease_total(Disease::Alzheimers, AgeGroup::Adult18Plus), 7_100_000);
        assert_eq!(disease_total(Disease::Alzheimers, AgeGroup::Senior65Plus), 6_900_000);
        assert_eq!(
            disease_total(Disease::Schizophrenia, AgeGroup::Adult18Plus),
            disease_total(Disease::Schizophrenia, AgeGroup::Senior65Plus),
        );
    }
}
