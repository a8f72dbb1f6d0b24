//! Topic selection and session typing.
//!
//! Maps a subject and a week number to the topic studied that week: weak
//! areas are exhausted first so foundational gaps close before revision of
//! strong areas starts, with generic practice as the filler once the topic
//! budget runs out.

use rand::Rng;

use crate::api::{CognitiveLoad, SessionType, Subject};

/// Topic returned when a subject has no weak or strong areas at all.
pub const GENERAL_PRACTICE: &str = "General Practice";

/// Filler topic once all weak and revision topics are exhausted.
pub const PRACTICE_PROBLEMS: &str = "Practice Problems";

const REVISION_PREFIX: &str = "Revision: ";

/// Split a comma-separated topic string, trimming entries and dropping
/// empties. The single parser for weak/strong-area strings.
pub fn parse_topic_list(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|topic| !topic.is_empty())
        .map(str::to_string)
        .collect()
}

/// Pick the topic a subject should study in the given week.
pub fn topic_for_week(subject: &Subject, week_number: u32, total_weeks: u32) -> String {
    let weak_areas = parse_topic_list(&subject.weak_areas);
    let strong_areas = parse_topic_list(&subject.strong_areas);

    if weak_areas.is_empty() && strong_areas.is_empty() {
        return GENERAL_PRACTICE.to_string();
    }

    // Strong areas only need half a slot each: they are revisited, not learned
    let total_topics = weak_areas.len() + strong_areas.len().div_ceil(2);
    let topics_per_week = (total_topics / total_weeks.max(1) as usize).max(1);
    let topic_index = week_number.saturating_sub(1) as usize * topics_per_week;

    if topic_index < weak_areas.len() {
        return weak_areas[topic_index].clone();
    }

    let revision_index = (topic_index - weak_areas.len()) / 2;
    if revision_index < strong_areas.len() {
        return format!("{}{}", REVISION_PREFIX, strong_areas[revision_index]);
    }

    PRACTICE_PROBLEMS.to_string()
}

/// Classify a session from its topic.
///
/// Revision topics are recognized by prefix, weak areas by substring
/// match. A strong-area match is a 50/50 coin flip between revision and
/// practice, drawn from the injected random source so callers can pin it.
pub fn session_type<R: Rng + ?Sized>(subject: &Subject, topic: &str, rng: &mut R) -> SessionType {
    let topic_lower = topic.to_lowercase();

    if topic_lower.starts_with("revision:") {
        return SessionType::Revision;
    }

    let weak_areas = parse_topic_list(&subject.weak_areas);
    if weak_areas
        .iter()
        .any(|area| topic_lower.contains(&area.to_lowercase()))
    {
        return SessionType::ConceptLearning;
    }

    let strong_areas = parse_topic_list(&subject.strong_areas);
    if strong_areas
        .iter()
        .any(|area| topic_lower.contains(&area.to_lowercase()))
    {
        return if rng.gen_bool(0.5) {
            SessionType::Revision
        } else {
            SessionType::Practice
        };
    }

    SessionType::Practice
}

/// Cognitive load is a pure function of the session type.
pub fn session_cognitive_load(session_type: SessionType) -> CognitiveLoad {
    match session_type {
        SessionType::ConceptLearning => CognitiveLoad::High,
        SessionType::Revision => CognitiveLoad::Low,
        _ => CognitiveLoad::Medium,
    }
}
