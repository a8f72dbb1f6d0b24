//! Public API surface for the study-plan backend.
//!
//! This file consolidates the core DTO types shared by the scheduler,
//! service, and HTTP layers. All types derive Serialize/Deserialize so
//! plans and profiles can be snapshotted as plain JSON.

pub use crate::routes::insights::{
    AdaptationSuggestion, CheckStatus, GoalStatus, Impact, InsightsData, PrerequisiteCheck,
    PriorityFocus, TodoItem, Urgency, WeeklyGoal,
};
pub use crate::routes::outcomes::{
    ConfidenceImprovement, EfficiencyGains, OutcomesData, PlanTimeline,
};
pub use crate::routes::plan::StudyPlan;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Subject name used for buffer entries in a day's schedule.
pub const BUFFER_SUBJECT: &str = "Buffer Time";

/// Coarse difficulty/effort tier assigned per subject and per session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLoad {
    Low,
    Medium,
    High,
}

impl CognitiveLoad {
    /// Weight multiplier applied by the weight model.
    pub fn multiplier(&self) -> f64 {
        match self {
            CognitiveLoad::High => 1.5,
            CognitiveLoad::Medium => 1.2,
            CognitiveLoad::Low => 1.0,
        }
    }
}

/// Preferred study time band. Unknown values fall back to `Evening`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum TimeBand {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl From<String> for TimeBand {
    fn from(value: String) -> Self {
        match value.as_str() {
            "morning" => TimeBand::Morning,
            "afternoon" => TimeBand::Afternoon,
            "night" => TimeBand::Night,
            _ => TimeBand::Evening,
        }
    }
}

impl TimeBand {
    /// Wire/display name, e.g. "evening".
    pub fn label(&self) -> &'static str {
        match self {
            TimeBand::Morning => "morning",
            TimeBand::Afternoon => "afternoon",
            TimeBand::Evening => "evening",
            TimeBand::Night => "night",
        }
    }
}

/// Classification of a single study session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SessionType {
    ConceptLearning,
    Revision,
    Practice,
    Buffer,
}

/// Priority label attached to focus topics and study slots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SlotPriority {
    High,
    Medium,
    Low,
}

/// Day of week in schedule order (Monday first).
///
/// The derived `Ord` follows declaration order, so a `BTreeMap` keyed by
/// `Weekday` iterates and serializes Monday through Sunday.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in schedule order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// True for Saturday and Sunday only.
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    pub fn from_chrono(day: chrono::Weekday) -> Self {
        match day {
            chrono::Weekday::Mon => Weekday::Monday,
            chrono::Weekday::Tue => Weekday::Tuesday,
            chrono::Weekday::Wed => Weekday::Wednesday,
            chrono::Weekday::Thu => Weekday::Thursday,
            chrono::Weekday::Fri => Weekday::Friday,
            chrono::Weekday::Sat => Weekday::Saturday,
            chrono::Weekday::Sun => Weekday::Sunday,
        }
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// A subject as entered by the learner.
///
/// `weak_areas` and `strong_areas` keep the raw comma-separated entry
/// format; [`crate::scheduler::topics::parse_topic_list`] is the single
/// parser that trims entries and drops empties.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Subject name (also the subject's identifier within a plan)
    pub name: String,
    /// Course credits, positive
    pub credits: u32,
    /// Self-rated confidence, 1 (lowest) to 5
    pub confidence: u8,
    /// Comma-separated topics the learner is comfortable with
    #[serde(default)]
    pub strong_areas: String,
    /// Comma-separated topics needing focus
    #[serde(default)]
    pub weak_areas: String,
    /// Difficulty tier for the subject as a whole
    pub cognitive_load: CognitiveLoad,
    /// Optional explicit priority, 1 = neutral
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

/// Complete student input for one planning session.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentProfile {
    /// SHA256 checksum of the submitted profile JSON (filled on parse)
    #[serde(default)]
    pub checksum: String,
    pub subjects: Vec<Subject>,
    /// Study hours available Monday through Friday
    pub weekday_hours: u32,
    /// Study hours available Saturday and Sunday
    pub weekend_hours: u32,
    pub preferred_time: TimeBand,
    /// Date the plan should finish by
    pub target_date: NaiveDate,
    /// Optional exam date; empty string and null both mean "not set"
    #[serde(default, deserialize_with = "de_optional_date")]
    pub exam_date: Option<NaiveDate>,
}

/// Accept `null`, a missing field, or an empty string as "no date".
fn de_optional_date<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        None => Ok(None),
        Some(s) if s.trim().is_empty() => Ok(None),
        Some(s) => s
            .parse::<NaiveDate>()
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

/// One scheduled study session. Created fresh per day per subject and
/// never mutated afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudySlot {
    /// Subject name, or [`BUFFER_SUBJECT`] for buffer entries
    pub subject: String,
    pub topic: String,
    /// Whole hours, always >= 1
    pub duration_hours: u32,
    /// Clock range such as "6:00-7:30 PM"
    pub time: String,
    pub cognitive_load: CognitiveLoad,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub priority: SlotPriority,
}

impl StudySlot {
    /// Human-readable duration, e.g. "1 hour" / "3 hours".
    pub fn duration_label(&self) -> String {
        if self.duration_hours == 1 {
            "1 hour".to_string()
        } else {
            format!("{} hours", self.duration_hours)
        }
    }

    pub fn is_buffer(&self) -> bool {
        self.session_type == SessionType::Buffer
    }
}

/// One week of study sessions keyed by day, Monday through Sunday.
/// Regenerated wholesale on every planning call.
pub type WeekSchedule = BTreeMap<Weekday, Vec<StudySlot>>;
