//! Subject weight model.
//!
//! Derives a numeric priority weight per subject from credits, confidence,
//! cognitive load, weak-area count, exam proximity, and explicit priority.
//! Weights are computed once per planning session; only the adaptation
//! path rescales them afterwards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::api::{SessionType, SlotPriority, Subject};
use crate::models::time;
use crate::scheduler::topics::parse_topic_list;

/// Exam closer than this fraction of the horizon boosts the weight.
const EXAM_PROXIMITY_THRESHOLD: f64 = 0.2;

/// One prioritized focus topic derived from a subject's areas.
///
/// Weak areas come first as high-priority concept learning, then strong
/// areas as low-priority revision, both in their original order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FocusTopic {
    pub topic: String,
    pub priority: SlotPriority,
    #[serde(rename = "type")]
    pub session_type: SessionType,
    pub order: usize,
}

/// A subject augmented with its computed weight and derived hour
/// allocations for one planning run.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WeightedSubject {
    #[serde(flatten)]
    pub subject: Subject,
    /// Computed priority weight, rounded, never negative
    pub weight: f64,
    /// Hours granted for the current week (set by the week planner)
    pub weekly_hours: u32,
    /// Per-day hour target, ceil(weekly / 7), at least 1
    pub daily_hours: u32,
    /// Hours actually placed into the current week's schedule
    pub hours_allocated: u32,
    pub focus_topics: Vec<FocusTopic>,
    // Provenance fields kept for display/debugging only
    pub weak_area_count: usize,
    pub confidence_factor: f64,
    pub cognitive_multiplier: f64,
}

impl WeightedSubject {
    pub fn name(&self) -> &str {
        &self.subject.name
    }
}

/// Compute weighted subjects for one planning session.
///
/// `today` anchors the exam-proximity term so the result is a pure
/// function of its arguments.
pub fn compute_weights(
    subjects: &[Subject],
    total_weeks: u32,
    exam_date: Option<NaiveDate>,
    today: NaiveDate,
) -> Vec<WeightedSubject> {
    subjects
        .iter()
        .map(|subject| weigh_subject(subject, total_weeks, exam_date, today))
        .collect()
}

fn weigh_subject(
    subject: &Subject,
    total_weeks: u32,
    exam_date: Option<NaiveDate>,
    today: NaiveDate,
) -> WeightedSubject {
    // Base weight from credits
    let mut weight = subject.credits as f64 * 8.0;

    // Lower confidence pushes the weight up
    let confidence_factor = (5.0 - subject.confidence as f64) * 7.0;
    weight += confidence_factor;

    let cognitive_multiplier = subject.cognitive_load.multiplier();
    weight *= cognitive_multiplier;

    let weak_area_count = parse_topic_list(&subject.weak_areas).len();
    weight += weak_area_count as f64 * 3.0;

    // Exam within the last fifth of the horizon
    if let Some(exam) = exam_date {
        if time::exam_proximity(exam, today, total_weeks) < EXAM_PROXIMITY_THRESHOLD {
            weight *= 1.2;
        }
    }

    if let Some(priority) = subject.priority {
        weight *= 1.0 + (priority as f64 - 1.0) * 0.1;
    }

    WeightedSubject {
        subject: subject.clone(),
        weight: weight.round().max(0.0),
        weekly_hours: 0,
        daily_hours: 0,
        hours_allocated: 0,
        focus_topics: extract_focus_topics(subject),
        weak_area_count,
        confidence_factor,
        cognitive_multiplier,
    }
}

fn extract_focus_topics(subject: &Subject) -> Vec<FocusTopic> {
    let weak_areas = parse_topic_list(&subject.weak_areas);
    let strong_areas = parse_topic_list(&subject.strong_areas);
    let weak_count = weak_areas.len();

    weak_areas
        .into_iter()
        .enumerate()
        .map(|(index, topic)| FocusTopic {
            topic,
            priority: SlotPriority::High,
            session_type: SessionType::ConceptLearning,
            order: index,
        })
        .chain(
            strong_areas
                .into_iter()
                .enumerate()
                .map(|(index, topic)| FocusTopic {
                    topic,
                    priority: SlotPriority::Low,
                    session_type: SessionType::Revision,
                    order: index + weak_count,
                }),
        )
        .collect()
}
