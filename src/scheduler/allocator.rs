//! Day allocation.
//!
//! Given weighted subjects and one day's hour budget, decides which
//! subjects study that day, for how long, in which time slot, and at what
//! cognitive load, filling unused time with a buffer activity. Allocation
//! is a fold: the returned [`DayAllocation`] carries the per-subject hour
//! grants instead of mutating shared state.

use chrono::NaiveDate;
use rand::Rng;

use crate::api::{
    CognitiveLoad, SessionType, SlotPriority, StudySlot, TimeBand, BUFFER_SUBJECT,
};
use crate::scheduler::topics;
use crate::scheduler::weights::WeightedSubject;

/// Rotating low-effort activities for buffer slots, keyed by week.
const BUFFER_ACTIVITIES: [&str; 8] = [
    "Quick Review & Notes",
    "Practice Previous Topics",
    "Solve Sample Papers",
    "Watch Tutorial Videos",
    "Group Discussion Prep",
    "Self-Assessment Quiz",
    "Relaxation & Rest",
    "Weekend Catch-up",
];

/// Days with more configured hours than this still get a closing buffer
/// slot even when fully consumed.
const BUFFER_THRESHOLD_HOURS: u32 = 3;

/// Inputs for allocating a single day.
#[derive(Debug, Clone)]
pub struct DayContext {
    /// This day's configured hour budget
    pub available_hours: u32,
    pub preferred_time: TimeBand,
    /// Shared exam pressure for the week, in [0, 1]
    pub exam_pressure: f64,
    pub exam_date: Option<NaiveDate>,
    pub current_week: u32,
    pub total_weeks: u32,
}

/// Hours granted to one subject on one day.
#[derive(Debug, Clone)]
pub struct SubjectHours {
    pub subject: String,
    pub hours: u32,
}

/// Result of allocating one day.
#[derive(Debug, Clone)]
pub struct DayAllocation {
    pub slots: Vec<StudySlot>,
    /// Per-subject grants, for the caller to fold into weekly totals
    pub allocated: Vec<SubjectHours>,
}

/// Exam relevance of a subject.
///
/// Currently a flat constant whenever any exam date is set; the subject
/// parameter is kept so a per-subject exam date can refine this without
/// touching the sort.
pub fn exam_relevance(_subject: &WeightedSubject, exam_date: Option<NaiveDate>) -> f64 {
    if exam_date.is_some() {
        0.5
    } else {
        0.0
    }
}

/// Allocate study slots for one day.
///
/// Subjects are visited in descending (exam relevance, weight) order, each
/// at most once. Under high exam pressure, exam-relevant subjects get one
/// extra hour if the budget allows.
pub fn allocate_day<R: Rng + ?Sized>(
    subjects: &[WeightedSubject],
    ctx: &DayContext,
    rng: &mut R,
) -> DayAllocation {
    let mut order: Vec<&WeightedSubject> = subjects.iter().collect();
    order.sort_by(|a, b| {
        if ctx.exam_pressure > 0.0 {
            let a_relevance = exam_relevance(a, ctx.exam_date);
            let b_relevance = exam_relevance(b, ctx.exam_date);
            if a_relevance != b_relevance {
                return b_relevance
                    .partial_cmp(&a_relevance)
                    .unwrap_or(std::cmp::Ordering::Equal);
            }
        }
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut slots: Vec<StudySlot> = Vec::new();
    let mut allocated: Vec<SubjectHours> = Vec::new();
    let mut remaining_hours = ctx.available_hours;

    for subject in order {
        if remaining_hours == 0 {
            break;
        }

        let mut hours = subject.daily_hours.min(remaining_hours);
        if ctx.exam_pressure > 0.5 && exam_relevance(subject, ctx.exam_date) > 0.0 {
            hours = (hours + 1).min(remaining_hours);
        }
        if hours == 0 {
            continue;
        }

        let topic = topics::topic_for_week(&subject.subject, ctx.current_week, ctx.total_weeks);
        let session_type = topics::session_type(&subject.subject, &topic, rng);
        let cognitive_load = topics::session_cognitive_load(session_type);
        let time = time_slot(ctx.preferred_time, slots.len(), cognitive_load);

        slots.push(StudySlot {
            subject: subject.subject.name.clone(),
            topic,
            duration_hours: hours,
            time: time.to_string(),
            cognitive_load,
            session_type,
            priority: slot_priority(subject, ctx.exam_pressure),
        });
        allocated.push(SubjectHours {
            subject: subject.subject.name.clone(),
            hours,
        });
        remaining_hours -= hours;
    }

    if remaining_hours > 0
        || (remaining_hours == 0 && ctx.available_hours > BUFFER_THRESHOLD_HOURS)
    {
        let duration = remaining_hours.max(1);
        slots.push(StudySlot {
            subject: BUFFER_SUBJECT.to_string(),
            topic: buffer_activity(ctx.current_week).to_string(),
            duration_hours: duration,
            time: time_slot(ctx.preferred_time, slots.len(), CognitiveLoad::Low).to_string(),
            cognitive_load: CognitiveLoad::Low,
            session_type: SessionType::Buffer,
            priority: SlotPriority::Low,
        });
    }

    DayAllocation { slots, allocated }
}

/// Priority label for a subject's slot under the given exam pressure.
fn slot_priority(subject: &WeightedSubject, exam_pressure: f64) -> SlotPriority {
    if subject.subject.confidence <= 2 && exam_pressure > 0.3 {
        return SlotPriority::High;
    }
    if subject.subject.cognitive_load == CognitiveLoad::High {
        return SlotPriority::High;
    }
    SlotPriority::Medium
}

/// Pick a clock range for a session from the fixed band/load table,
/// cycling by slot index.
pub fn time_slot(band: TimeBand, slot_index: usize, load: CognitiveLoad) -> &'static str {
    let slots: &[&'static str] = match (band, load) {
        (TimeBand::Morning, CognitiveLoad::High) => &["6:00-7:30 AM", "7:30-9:00 AM"],
        (TimeBand::Morning, CognitiveLoad::Medium) => &["9:00-10:30 AM", "10:30 AM-12:00 PM"],
        (TimeBand::Morning, CognitiveLoad::Low) => &["12:00-1:00 PM"],
        (TimeBand::Afternoon, CognitiveLoad::High) => &["12:00-1:30 PM", "1:30-3:00 PM"],
        (TimeBand::Afternoon, CognitiveLoad::Medium) => &["3:00-4:30 PM", "4:30-6:00 PM"],
        (TimeBand::Afternoon, CognitiveLoad::Low) => &["6:00-7:00 PM"],
        (TimeBand::Evening, CognitiveLoad::High) => &["6:00-7:30 PM", "7:30-9:00 PM"],
        (TimeBand::Evening, CognitiveLoad::Medium) => &["9:00-10:30 PM", "10:30 PM-12:00 AM"],
        (TimeBand::Evening, CognitiveLoad::Low) => &["12:00-1:00 AM"],
        (TimeBand::Night, CognitiveLoad::High) => &["10:00 PM-11:30 PM", "11:30 PM-1:00 AM"],
        (TimeBand::Night, CognitiveLoad::Medium) => &["1:00-2:30 AM", "2:30-4:00 AM"],
        (TimeBand::Night, CognitiveLoad::Low) => &["4:00-5:00 AM"],
    };
    slots[slot_index % slots.len()]
}

/// Buffer activity for the given week, rotating through the catalogue.
pub fn buffer_activity(week_number: u32) -> &'static str {
    BUFFER_ACTIVITIES[week_number.saturating_sub(1) as usize % BUFFER_ACTIVITIES.len()]
}
