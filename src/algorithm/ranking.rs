//! Burden ranking and cross-axis focus lists

use std::cmp::Ordering;

use itertools::Itertools;

use crate::models::estimate::ScreeningEstimate;

/// Sort estimates by descending screen-burden percentage
///
/// The sort is stable: estimates with equal burden keep their input order,
/// so the ranking is deterministic for tied percentages. Burden values from
/// the pipeline are always finite; a non-comparable pair is treated as tied.
#[must_use]
pub fn rank_groups(mut estimates: Vec<ScreeningEstimate>) -> Vec<ScreeningEstimate> {
    estimates.sort_by(|a, b| {
        b.burden_percent
            .partial_cmp(&a.burden_percent)
            .unwrap_or(Ordering::Equal)
    });
    estimates
}

/// Merge two per-axis rankings into a single recruitment-focus list
///
/// Concatenates the lists, drops all but the first occurrence of any group
/// that appears in both (the Gender and Race label sets are disjoint in
/// practice, so this is a safeguard), and re-ranks by burden.
#[must_use]
pub fn merge_focus_list(
    first: Vec<ScreeningEstimate>,
    second: Vec<ScreeningEstimate>,
) -> Vec<ScreeningEstimate> {
    let merged = first
        .into_iter()
        .chain(second)
        .unique_by(|estimate| estimate.group)
        .collect();
    rank_groups(merged)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::types::DemographicGroup;

    fn create_test_estimate(group: DemographicGroup, burden_percent: f64) -> ScreeningEstimate {
        ScreeningEstimate {
            group,
            target_enrollment: 100.0,
            screened_needed: 200,
            eligible_population: 10_000,
            burden_percent,
        }
    }

    #[test]
    fn test_rank_is_descending_permutation() {
        let input = vec![
            create_test_estimate(DemographicGroup::Hispanic, 0.02),
            create_test_estimate(DemographicGroup::WhiteNh, 5.0),
            create_test_estimate(DemographicGroup::BlackNh, 1.3),
        ];
        let ranked = rank_groups(input.clone());

        assert_eq!(ranked.len(), input.len());
        for estimate in &input {
            assert!(ranked.contains(estimate));
        }
        for pair in ranked.windows(2) {
            assert!(pair[0].burden_percent >= pair[1].burden_percent);
        }
        assert_eq!(ranked[0].group, DemographicGroup::WhiteNh);
    }

    #[test]
    fn test_rank_is_stable_on_ties() {
        let input = vec![
            create_test_estimate(DemographicGroup::Female, 2.5),
            create_test_estimate(DemographicGroup::Male, 2.5),
            create_test_estimate(DemographicGroup::Other, 2.5),
        ];
        let ranked = rank_groups(input);
        assert_eq!(ranked[0].group, DemographicGroup::Female);
        assert_eq!(ranked[1].group, DemographicGroup::Male);
        assert_eq!(ranked[2].group, DemographicGroup::Other);
    }

    #[test]
    fn test_merge_dedups_and_reranks() {
        let gender = vec![
            create_test_estimate(DemographicGroup::Male, 1.0),
            create_test_estimate(DemographicGroup::Female, 0.5),
        ];
        let race = vec![
            create_test_estimate(DemographicGroup::BlackNh, 4.0),
            create_test_estimate(DemographicGroup::Male, 9.9),
        ];
        let focus = merge_focus_list(gender, race);

        assert_eq!(focus.len(), 3);
        assert_eq!(focus[0].group, DemographicGroup::BlackNh);
        // first occurrence of Male (burden 1.0) wins over the duplicate
        let male = focus.iter().find(|e| e.group == DemographicGroup::Male).unwrap();
        assert_eq!(male.burden_percent, 1.0);
    }
}
