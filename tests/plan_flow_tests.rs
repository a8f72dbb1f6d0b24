//! Data-driven end-to-end test: parse a realistic submitted profile and
//! walk the full plan/navigate/adapt flow.

use chrono::NaiveDate;

use studyplan_rust::api::{CheckStatus, Urgency};
use studyplan_rust::models::parse_student_profile_json_str;
use studyplan_rust::services::{ConfidenceUpdate, PlanSession};

const SAMPLE_PROFILE: &str = r#"{
    "subjects": [
        {
            "name": "Data Structures",
            "credits": 4,
            "confidence": 3,
            "strongAreas": "Arrays, Linked Lists",
            "weakAreas": "Trees, Graphs",
            "cognitiveLoad": "high",
            "priority": 1
        },
        {
            "name": "Operating Systems",
            "credits": 3,
            "confidence": 2,
            "strongAreas": "Processes, Threads",
            "weakAreas": "Deadlocks, Memory Management",
            "cognitiveLoad": "medium",
            "priority": 2
        },
        {
            "name": "Engineering Mathematics",
            "credits": 4,
            "confidence": 3,
            "strongAreas": "Differential Equations",
            "weakAreas": "Laplace Transform",
            "cognitiveLoad": "high",
            "priority": 3
        }
    ],
    "weekdayHours": 4,
    "weekendHours": 6,
    "preferredTime": "evening",
    "targetDate": "2026-05-25",
    "examDate": "2026-05-20"
}"#;

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
}

fn session() -> PlanSession {
    let profile = parse_student_profile_json_str(SAMPLE_PROFILE).unwrap();
    PlanSession::with_today(profile, today()).with_seed(17)
}

#[test]
fn sample_profile_parses() {
    let profile = parse_student_profile_json_str(SAMPLE_PROFILE).unwrap();
    assert_eq!(profile.subjects.len(), 3);
    assert_eq!(profile.subjects[1].priority, Some(2));
    assert!(!profile.checksum.is_empty());
    assert_eq!(
        profile.exam_date,
        Some(NaiveDate::from_ymd_opt(2026, 5, 20).unwrap())
    );
}

#[test]
fn full_plan_has_all_bundles() {
    let mut session = session();
    let plan = session.generate_plan();

    // 84 days to the target: 12 weeks at 32 hours each
    assert_eq!(plan.total_weeks, 12);
    assert_eq!(plan.total_hours, 384);
    assert_eq!(plan.weekly_schedule.len(), 7);
    assert_eq!(plan.weighted_subjects.len(), 3);

    // All three subjects sit at confidence <= 3 with weak areas
    assert_eq!(plan.insights.priority_focus.len(), 3);
    assert_eq!(plan.insights.weekly_goals.len(), 3);
    // Sample carries data-structures, OS, and math subjects plus the
    // generic check
    assert_eq!(plan.insights.prerequisites.len(), 4);
    assert_eq!(plan.outcomes.confidence_improvements.len(), 3);
}

#[test]
fn prerequisite_heuristics_fire_on_sample() {
    let mut session = session();
    let plan = session.generate_plan();
    let prerequisites = &plan.insights.prerequisites;

    // DS at confidence 3 passes its check
    assert_eq!(prerequisites[0].status, CheckStatus::Complete);
    // OS lists deadlocks as a weak area
    assert_eq!(prerequisites[1].status, CheckStatus::Pending);
    assert_eq!(prerequisites[1].icon, "warning");
    // Math check is always complete
    assert_eq!(prerequisites[2].status, CheckStatus::Complete);
    // Generic check closes the list
    assert_eq!(prerequisites[3].icon, "clock");
}

#[test]
fn os_low_confidence_leads_priority_focus_urgency() {
    let mut session = session();
    let plan = session.generate_plan();
    let os_focus = plan
        .insights
        .priority_focus
        .iter()
        .find(|f| f.subject == "Operating Systems")
        .unwrap();
    assert_eq!(os_focus.topic, "Deadlocks");
    assert_eq!(os_focus.urgency, Urgency::High);
}

#[test]
fn navigation_and_adaptation_flow() {
    let mut session = session();
    let week1 = session.generate_plan();

    let week2 = session.next_week();
    assert_eq!(session.current_week(), 2);
    // Week totals are unchanged by navigation
    assert_eq!(week1.total_hours, week2.total_hours);

    let ds_weight_before = session
        .weighted_subjects()
        .iter()
        .find(|s| s.subject.name == "Data Structures")
        .unwrap()
        .weight;

    session.adapt(&[ConfidenceUpdate {
        subject: "Data Structures".to_string(),
        new_confidence: 4,
    }]);

    let (ds_confidence, ds_weight) = {
        let ds = session
            .weighted_subjects()
            .iter()
            .find(|s| s.subject.name == "Data Structures")
            .unwrap();
        (ds.subject.confidence, ds.weight)
    };
    assert_eq!(ds_confidence, 4);
    assert!((ds_weight - ds_weight_before * 0.9).abs() < 1e-9);

    // The decayed weight feeds the next plan without recomputing others
    let adapted_plan = session.generate_plan();
    let ds_in_plan = adapted_plan
        .weighted_subjects
        .iter()
        .find(|s| s.subject.name == "Data Structures")
        .unwrap();
    assert_eq!(ds_in_plan.weight, ds_weight);
}

#[test]
fn exam_week_keeps_schedule_valid() {
    // Exam 3 days out: pressure 0.9 and an extra exam hour per subject,
    // still bounded by each day's budget
    let profile = parse_student_profile_json_str(SAMPLE_PROFILE).unwrap();
    let near_exam_today = NaiveDate::from_ymd_opt(2026, 5, 17).unwrap();
    let mut session = PlanSession::with_today(profile, near_exam_today).with_seed(17);
    let plan = session.generate_plan();

    for (day, slots) in &plan.weekly_schedule {
        let budget = if day.is_weekend() { 6 } else { 4 };
        let study: u32 = slots
            .iter()
            .filter(|s| !s.is_buffer())
            .map(|s| s.duration_hours)
            .sum();
        assert!(study <= budget);
    }
}
