use serde::{Deserialize, Serialize};

use crate::api::WeekSchedule;
use crate::routes::insights::InsightsData;
use crate::routes::outcomes::OutcomesData;
use crate::scheduler::weights::WeightedSubject;

/// Top-level plan returned by one planning call.
///
/// Immutable once returned; week navigation and input edits produce a new
/// plan instead of mutating this one.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudyPlan {
    pub weekly_schedule: WeekSchedule,
    pub insights: InsightsData,
    pub outcomes: OutcomesData,
    pub weighted_subjects: Vec<WeightedSubject>,
    pub total_weeks: u32,
    pub total_hours: u32,
}

/// Route function name constant for plan generation
pub const GENERATE_PLAN: &str = "generate_plan";
