#[cfg(test)]
mod tests {
    use screen_estimator::{
        AgeGroup, DemographicAxis, DemographicGroup, Disease, baseline_for, disease_profile,
        us_65_plus_baseline, us_census_baseline,
    };

    #[test]
    fn test_profiles_cover_every_group() {
        for disease in Disease::ALL {
            let profile = disease_profile(disease, AgeGroup::Adult18Plus);
            for group in DemographicGroup::ALL {
                assert!(
                    profile.target_allocation_pct(group).is_some(),
                    "{disease} has no target for {group}"
                );
                assert!(profile.group_prevalence(group).is_some());
                assert!(profile.screen_success_rate(group).is_some());
            }
        }
    }

    #[test]
    fn test_target_allocations_sum_to_100_per_axis() {
        for disease in Disease::ALL {
            let profile = disease_profile(disease, AgeGroup::Adult18Plus);
            for axis in DemographicAxis::ALL {
                let total: f64 = axis
                    .groups()
                    .iter()
                    .filter_map(|&g| profile.target_allocation_pct(g))
                    .sum();
                assert!((total - 100.0).abs() < 0.5, "{disease}/{axis}: {total}");
            }
        }
    }

    #[test]
    fn test_baseline_for_matches_age_group() {
        assert_eq!(
            baseline_for(AgeGroup::Adult18Plus).total_population,
            us_census_baseline().total_population
        );
        assert_eq!(
            baseline_for(AgeGroup::Senior65Plus).total_population,
            us_65_plus_baseline().total_population
        );
    }

    #[test]
    fn test_65_plus_baseline_skews_older_whiter() {
        let all_ages = us_census_baseline();
        let seniors = us_65_plus_baseline();

        assert!(seniors.total_population < all_ages.total_population);
        assert!(seniors.share(DemographicGroup::WhiteNh) > all_ages.share(DemographicGroup::WhiteNh));
        assert!(seniors.share(DemographicGroup::Hispanic) < all_ages.share(DemographicGroup::Hispanic));
    }

    #[test]
    fn test_group_population_is_floored_share() {
        let baseline = us_census_baseline();
        let female = baseline.group_population(DemographicGroup::Female);
        assert_eq!(female, 169_124_500); // 50.5% of 334,900,000
    }
}
