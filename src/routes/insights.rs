use serde::{Deserialize, Serialize};

use crate::api::SlotPriority;

// =========================================================
// Insights types
// =========================================================

/// Urgency of a priority-focus entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Urgency {
    High,
    Medium,
}

/// Impact label on an adaptation suggestion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Impact {
    High,
    Medium,
}

/// Completion state of a prerequisite check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckStatus {
    Complete,
    Pending,
}

/// Progress state of a weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GoalStatus {
    #[serde(rename = "In Progress")]
    InProgress,
    #[serde(rename = "On Track")]
    OnTrack,
}

/// A subject/topic pair the learner should concentrate on first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriorityFocus {
    pub subject: String,
    pub topic: String,
    /// Why this entry was raised, e.g. "Low confidence (2/5)"
    pub reason: String,
    pub urgency: Urgency,
}

/// One prerequisite heuristic result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PrerequisiteCheck {
    pub check: String,
    pub status: CheckStatus,
    /// Display icon name: "check", "exclamation", "warning", "clock"
    pub icon: String,
}

/// A schedule-adjustment suggestion with the condition that fired it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptationSuggestion {
    pub suggestion: String,
    pub condition: String,
    pub impact: Impact,
}

/// One entry of today's to-do list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TodoItem {
    /// e.g. "Study Trees in Data Structures"
    pub task: String,
    /// Human-readable duration, e.g. "2 hours"
    pub duration: String,
    pub priority: SlotPriority,
    /// Clock range of the session
    pub time: String,
}

/// One per-subject goal for the current week.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeeklyGoal {
    pub subject: String,
    pub goal: String,
    /// e.g. "Week 3"
    pub target: String,
    pub status: GoalStatus,
}

/// Complete insights bundle for one generated plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InsightsData {
    pub priority_focus: Vec<PriorityFocus>,
    pub prerequisites: Vec<PrerequisiteCheck>,
    pub adaptations: Vec<AdaptationSuggestion>,
    pub todays_todo: Vec<TodoItem>,
    pub weekly_goals: Vec<WeeklyGoal>,
}

/// Route function name constant for insights
pub const GET_INSIGHTS: &str = "get_insights";
