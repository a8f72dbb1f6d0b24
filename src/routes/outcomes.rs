use serde::{Deserialize, Serialize};

// =========================================================
// Expected-outcome types
// =========================================================

/// Projected confidence change for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConfidenceImprovement {
    pub subject: String,
    /// Confidence now, 1-5
    pub current: u8,
    /// Projected confidence at plan completion, capped at 5
    pub target: u8,
    pub improvement: u8,
}

/// Fixed-text efficiency claims attached to every plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EfficiencyGains {
    pub reduction_in_cramming: String,
    pub better_retention: String,
    pub stress_reduction: String,
    /// The one computed entry: "N hours saved per week"
    pub time_saved: String,
}

/// Milestone weeks across the planning horizon.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanTimeline {
    pub weak_areas_completion: String,
    pub full_revision_start: String,
    pub exam_preparation: String,
    pub completion: String,
}

/// Complete outcomes bundle for one generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OutcomesData {
    pub total_hours: u32,
    pub total_weeks: u32,
    pub confidence_improvements: Vec<ConfidenceImprovement>,
    pub efficiency_gains: EfficiencyGains,
    pub timeline: PlanTimeline,
}

/// Route function name constant for outcomes
pub const GET_OUTCOMES: &str = "get_outcomes";
