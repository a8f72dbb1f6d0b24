//! Expected-outcome derivation.
//!
//! Pure projection from the weighted subjects and the plan totals; no
//! scheduling decisions are made here.

use crate::api::{ConfidenceImprovement, EfficiencyGains, OutcomesData, PlanTimeline};
use crate::scheduler::weights::WeightedSubject;

/// Confidence scale ceiling.
const MAX_CONFIDENCE: u8 = 5;

/// Exam preparation window never exceeds two weeks.
const EXAM_PREP_CAP_WEEKS: u32 = 2;

/// Derive the expected-outcomes bundle for one plan.
pub fn compute_outcomes(
    subjects: &[WeightedSubject],
    total_hours: u32,
    total_weeks: u32,
) -> OutcomesData {
    let confidence_improvements = subjects
        .iter()
        .map(|subject| {
            let current = subject.subject.confidence;
            let projected = (current as u32 + total_weeks / 4 + 1).min(MAX_CONFIDENCE as u32) as u8;
            ConfidenceImprovement {
                subject: subject.subject.name.clone(),
                current,
                target: projected,
                improvement: projected.saturating_sub(current),
            }
        })
        .collect();

    let efficiency_gains = EfficiencyGains {
        reduction_in_cramming: "70% reduction in last-minute workload".to_string(),
        better_retention: "Estimated 45% improvement in long-term retention".to_string(),
        stress_reduction: "Balanced schedule reduces burnout risk".to_string(),
        time_saved: format!(
            "{} hours saved per week",
            (total_hours as f64 * 0.2).round() as u32
        ),
    };

    let weak_areas_complete = (total_weeks as f64 * 0.6).floor() as u32;
    let full_revision_start = (total_weeks as f64 * 0.8).floor() as u32;
    let exam_prep_weeks = ((total_weeks as f64 * 0.15).floor() as u32).min(EXAM_PREP_CAP_WEEKS);

    let timeline = PlanTimeline {
        weak_areas_completion: format!("Week {}", weak_areas_complete),
        full_revision_start: format!("Week {}", full_revision_start),
        exam_preparation: format!("Last {} weeks", exam_prep_weeks),
        completion: format!("By Week {}", total_weeks),
    };

    OutcomesData {
        total_hours,
        total_weeks,
        confidence_improvements,
        efficiency_gains,
        timeline,
    }
}
