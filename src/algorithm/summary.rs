//! Recruitment-focus summaries
//!
//! Plain-text report generation over ranked estimates, for callers that
//! want a ready-made textual view instead of consuming the estimates
//! directly.

use crate::models::disease::Disease;
use crate::models::estimate::ScreeningEstimate;
use crate::models::plan::EnrollmentPlan;
use crate::models::types::DemographicAxis;

/// Generate a recruitment-focus summary for one ranked axis
#[must_use]
pub fn generate_summary(
    disease: Disease,
    axis: DemographicAxis,
    plan: &EnrollmentPlan,
    estimates: &[ScreeningEstimate],
) -> String {
    let mut summary = String::new();
    summary.push_str("Recruitment Focus Summary:\n");
    summary.push_str(&format!("  Disease: {disease}\n"));
    summary.push_str(&format!("  Axis: {axis}\n"));
    summary.push_str(&format!(
        "  Total Enrollment Target: {}\n",
        plan.total_enrollment
    ));

    summary.push_str("  Screening Requirements (highest burden first):\n");
    for estimate in estimates {
        if estimate.is_degenerate() {
            summary.push_str(&format!(
                "    {}: not computable with the supplied rates\n",
                estimate.group
            ));
        } else {
            summary.push_str(&format!(
                "    {}: {} to screen ({:.3}% of {} eligible)\n",
                estimate.group,
                estimate.screened_needed,
                estimate.burden_percent,
                estimate.eligible_population,
            ));
        }
    }
    summary
}
