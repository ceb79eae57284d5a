#[cfg(test)]
mod tests {
    use screen_estimator::{
        AgeGroup, DemographicAxis, DemographicGroup, Disease, EnrollmentPlan, EstimatorConfig,
        compute_all, disease_profile, us_census_baseline,
    };

    /// Alzheimer's 18+ profile with the default config and census baseline
    fn alzheimers_setup() -> (
        screen_estimator::DiseaseProfile,
        screen_estimator::PopulationBaseline,
        EstimatorConfig,
    ) {
        let _ = env_logger::builder().is_test(true).try_init();
        (
            disease_profile(Disease::Alzheimers, AgeGroup::Adult18Plus),
            us_census_baseline(),
            EstimatorConfig::default(),
        )
    }

    #[test]
    fn test_alzheimers_female_scenario() {
        // total 1000, Female allocation 64%, success rate 0.7 (30% fail)
        let (profile, baseline, config) = alzheimers_setup();
        let plan = EnrollmentPlan::new(1000)
            .with_screen_success_rate(DemographicGroup::Female, 0.7);
        plan.validate(&config).unwrap();

        let estimates = compute_all(DemographicAxis::Gender, &profile, &plan, &baseline, &config);
        let female = estimates
            .iter()
            .find(|e| e.group == DemographicGroup::Female)
            .unwrap();

        assert_eq!(female.target_enrollment, 640.0);
        assert_eq!(female.screened_needed, 915);
        assert_eq!(female.eligible_population, 4_544_000);
        assert!((female.burden_percent - 0.0201).abs() < 0.001);
        assert!(!female.is_degenerate());
    }

    #[test]
    fn test_zero_success_rate_is_flagged_degenerate() {
        let (profile, baseline, config) = alzheimers_setup();
        let plan = EnrollmentPlan::new(1000)
            .with_screen_success_rate(DemographicGroup::Female, 0.0);

        let estimates = compute_all(DemographicAxis::Gender, &profile, &plan, &baseline, &config);
        let female = estimates
            .iter()
            .find(|e| e.group == DemographicGroup::Female)
            .unwrap();

        assert_eq!(female.screened_needed, 0);
        assert_eq!(female.burden_percent, 0.0);
        assert!(female.is_degenerate());
    }

    #[test]
    fn test_zero_allocation_yields_empty_pool_without_error() {
        let (profile, baseline, config) = alzheimers_setup();
        let plan = EnrollmentPlan::new(1000).with_allocation(DemographicGroup::Male, 0.0);

        let estimates = compute_all(DemographicAxis::Gender, &profile, &plan, &baseline, &config);
        let male = estimates
            .iter()
            .find(|e| e.group == DemographicGroup::Male)
            .unwrap();

        assert_eq!(male.eligible_population, 0);
        assert_eq!(male.burden_percent, 0.0);
        assert!(male.is_degenerate());
    }

    #[test]
    fn test_higher_burden_ranks_first() {
        let (profile, baseline, config) = alzheimers_setup();
        // Squeeze Male's eligible pool so its burden dwarfs Female's
        let plan = EnrollmentPlan::new(1000)
            .with_allocation(DemographicGroup::Male, 0.01)
            .with_allocation(DemographicGroup::Female, 64.0);

        let estimates = compute_all(DemographicAxis::Gender, &profile, &plan, &baseline, &config);
        assert_eq!(estimates[0].group, DemographicGroup::Male);
        assert!(estimates[0].burden_percent > estimates[1].burden_percent);
    }

    #[test]
    fn test_every_axis_group_appears_exactly_once() {
        let (profile, baseline, config) = alzheimers_setup();
        let plan = EnrollmentPlan::new(1000);

        for axis in DemographicAxis::ALL {
            let estimates = compute_all(axis, &profile, &plan, &baseline, &config);
            assert_eq!(estimates.len(), axis.groups().len());
            for group in axis.groups() {
                assert_eq!(estimates.iter().filter(|e| e.group == *group).count(), 1);
            }
        }
    }

    #[test]
    fn test_repeated_runs_are_identical() {
        let (profile, baseline, config) = alzheimers_setup();
        let plan = EnrollmentPlan::new(5000)
            .with_allocation(DemographicGroup::Hispanic, 30.0)
            .with_screen_success_rate(DemographicGroup::BlackNh, 0.25);

        let first = compute_all(DemographicAxis::Race, &profile, &plan, &baseline, &config);
        let second = compute_all(DemographicAxis::Race, &profile, &plan, &baseline, &config);
        assert_eq!(first, second);
    }
}
