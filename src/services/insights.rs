//! Insight derivation.
//!
//! Pure derivation from the weighted subjects, the generated week, and the
//! raw student input. Nothing here makes scheduling decisions; it only
//! summarizes them.

use chrono::{Datelike, NaiveDate};

use crate::api::{
    AdaptationSuggestion, CheckStatus, CognitiveLoad, Impact, InsightsData, PrerequisiteCheck,
    PriorityFocus, StudentProfile, TodoItem, Urgency, WeekSchedule, Weekday, WeeklyGoal,
};
use crate::routes::insights::GoalStatus;
use crate::scheduler::topics::parse_topic_list;
use crate::scheduler::weights::WeightedSubject;

/// Derive the full insights bundle for one generated plan.
pub fn compute_insights(
    subjects: &[WeightedSubject],
    schedule: &WeekSchedule,
    profile: &StudentProfile,
    today: NaiveDate,
    current_week: u32,
) -> InsightsData {
    InsightsData {
        priority_focus: compute_priority_focus(subjects),
        prerequisites: compute_prerequisite_checks(subjects),
        adaptations: compute_adaptation_suggestions(subjects, profile),
        todays_todo: compute_todays_todo(schedule, today),
        weekly_goals: compute_weekly_goals(subjects, current_week),
    }
}

/// Low-confidence subjects, heaviest first, each pointing at its first
/// weak area.
pub(crate) fn compute_priority_focus(subjects: &[WeightedSubject]) -> Vec<PriorityFocus> {
    let mut sorted: Vec<&WeightedSubject> = subjects.iter().collect();
    sorted.sort_by(|a, b| {
        b.weight
            .partial_cmp(&a.weight)
            .unwrap_or(std::cmp::Ordering::Equal)
    });

    let mut focus = Vec::new();
    for subject in sorted {
        if subject.subject.confidence > 3 {
            continue;
        }
        if let Some(weak_area) = parse_topic_list(&subject.subject.weak_areas).into_iter().next() {
            focus.push(PriorityFocus {
                subject: subject.subject.name.clone(),
                topic: weak_area,
                reason: format!("Low confidence ({}/5)", subject.subject.confidence),
                urgency: if subject.subject.confidence <= 2 {
                    Urgency::High
                } else {
                    Urgency::Medium
                },
            });
        }
    }
    focus
}

/// Fixed prerequisite heuristics keyed on subject-name matches, plus one
/// always-present generic check.
pub(crate) fn compute_prerequisite_checks(subjects: &[WeightedSubject]) -> Vec<PrerequisiteCheck> {
    let mut checks = Vec::new();
    let find = |needle: &str| {
        subjects
            .iter()
            .find(|s| s.subject.name.to_lowercase().contains(needle))
    };

    if let Some(ds) = find("data structure") {
        let complete = ds.subject.confidence >= 3;
        checks.push(PrerequisiteCheck {
            check: "Arrays/Linked Lists → Essential for Trees/Graphs".to_string(),
            status: if complete {
                CheckStatus::Complete
            } else {
                CheckStatus::Pending
            },
            icon: if complete { "check" } else { "exclamation" }.to_string(),
        });
    }

    if let Some(os) = find("operating system") {
        let pending = os.subject.weak_areas.to_lowercase().contains("deadlock");
        checks.push(PrerequisiteCheck {
            check: "Processes/Threads → Foundation for Deadlocks".to_string(),
            status: if pending {
                CheckStatus::Pending
            } else {
                CheckStatus::Complete
            },
            icon: if pending { "warning" } else { "check" }.to_string(),
        });
    }

    if find("math").is_some() {
        checks.push(PrerequisiteCheck {
            check: "Differential Equations → Required for Laplace Transform".to_string(),
            status: CheckStatus::Complete,
            icon: "check".to_string(),
        });
    }

    checks.push(PrerequisiteCheck {
        check: "Basic concepts clear before advanced topics".to_string(),
        status: CheckStatus::Pending,
        icon: "clock".to_string(),
    });

    checks
}

/// Per-subject and cross-subject schedule-adjustment suggestions.
pub(crate) fn compute_adaptation_suggestions(
    subjects: &[WeightedSubject],
    profile: &StudentProfile,
) -> Vec<AdaptationSuggestion> {
    let mut suggestions = Vec::new();

    for subject in subjects {
        let name = &subject.subject.name;
        let confidence = subject.subject.confidence;

        if confidence <= 2 {
            suggestions.push(AdaptationSuggestion {
                suggestion: format!("Increase {} time allocation by 30 minutes daily", name),
                condition: format!("Confidence in {} is {}/5", name, confidence),
                impact: Impact::High,
            });
        }
        if confidence >= 4 {
            suggestions.push(AdaptationSuggestion {
                suggestion: format!("Reduce {} focus to focus on weaker subjects", name),
                condition: format!("Strong confidence ({}/5) in {}", confidence, name),
                impact: Impact::Medium,
            });
        }
    }

    let high_load_count = subjects
        .iter()
        .filter(|s| s.subject.cognitive_load == CognitiveLoad::High)
        .count();
    if high_load_count > 1 {
        suggestions.push(AdaptationSuggestion {
            suggestion: "Schedule high-cognitive subjects on different days".to_string(),
            condition: "Multiple high-load subjects".to_string(),
            impact: Impact::High,
        });
    }

    suggestions.push(AdaptationSuggestion {
        suggestion: format!(
            "Schedule {} as primary study time for complex topics",
            profile.preferred_time.label()
        ),
        condition: format!("Preferred time: {}", profile.preferred_time.label()),
        impact: Impact::Medium,
    });

    suggestions
}

/// Today's sessions, buffer entries excluded.
pub(crate) fn compute_todays_todo(schedule: &WeekSchedule, today: NaiveDate) -> Vec<TodoItem> {
    let day = Weekday::from_chrono(today.weekday());
    schedule
        .get(&day)
        .map(|slots| {
            slots
                .iter()
                .filter(|slot| !slot.is_buffer())
                .map(|slot| TodoItem {
                    task: format!("Study {} in {}", slot.topic, slot.subject),
                    duration: slot.duration_label(),
                    priority: slot.priority,
                    time: slot.time.clone(),
                })
                .collect()
        })
        .unwrap_or_default()
}

/// One goal per subject that has at least one weak area.
pub(crate) fn compute_weekly_goals(
    subjects: &[WeightedSubject],
    current_week: u32,
) -> Vec<WeeklyGoal> {
    subjects
        .iter()
        .filter_map(|subject| {
            parse_topic_list(&subject.subject.weak_areas)
                .into_iter()
                .next()
                .map(|first_weak| WeeklyGoal {
                    subject: subject.subject.name.clone(),
                    goal: format!("Complete {} this week", first_weak),
                    target: format!("Week {}", current_week),
                    status: if subject.subject.confidence <= 2 {
                        GoalStatus::InProgress
                    } else {
                        GoalStatus::OnTrack
                    },
                })
        })
        .collect()
}
