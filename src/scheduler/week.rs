//! Week planning.
//!
//! Orchestrates the weight model output across the seven weekdays:
//! converts weights into weekly/daily hour targets, computes the shared
//! exam pressure, and runs the day allocator per day, folding the per-day
//! grants into each subject's weekly total.

use std::collections::HashMap;

use chrono::NaiveDate;
use rand::Rng;

use crate::api::{TimeBand, WeekSchedule, Weekday};
use crate::models::time;
use crate::scheduler::allocator::{allocate_day, DayContext};
use crate::scheduler::weights::WeightedSubject;

/// Fraction of the weekly budget handed to subjects; the rest is slack
/// for buffer activity.
const ALLOCATABLE_SHARE: f64 = 0.9;

/// Configuration for planning one week.
#[derive(Debug, Clone)]
pub struct WeekConfig {
    pub weekday_hours: u32,
    pub weekend_hours: u32,
    pub preferred_time: TimeBand,
    pub current_week: u32,
    pub total_weeks: u32,
    pub exam_date: Option<NaiveDate>,
    pub today: NaiveDate,
}

impl WeekConfig {
    /// Total study hours available in one week.
    pub fn weekly_budget(&self) -> u32 {
        self.weekday_hours * 5 + self.weekend_hours * 2
    }
}

/// Plan one week of study sessions.
///
/// Sets `weekly_hours`/`daily_hours` on each subject in a single pass,
/// then allocates Monday through Sunday. `hours_allocated` is written
/// once at the end from the folded day grants.
pub fn plan_week<R: Rng + ?Sized>(
    subjects: &mut [WeightedSubject],
    config: &WeekConfig,
    rng: &mut R,
) -> WeekSchedule {
    let total_weight: f64 = subjects.iter().map(|s| s.weight).sum();
    let weekly_budget = config.weekly_budget() as f64;
    let subject_count = subjects.len().max(1) as f64;

    for subject in subjects.iter_mut() {
        // Zero total weight only happens on degenerate input; fall back
        // to equal shares instead of dividing by zero
        let share = if total_weight > 0.0 {
            subject.weight / total_weight
        } else {
            1.0 / subject_count
        };
        subject.weekly_hours = ((share * weekly_budget * ALLOCATABLE_SHARE).round() as u32).max(1);
        subject.daily_hours = ((subject.weekly_hours + 6) / 7).max(1);
        subject.hours_allocated = 0;
    }

    let exam_pressure = config
        .exam_date
        .map(|exam| time::exam_pressure(exam, config.today))
        .unwrap_or(0.0);

    log::debug!(
        "planning week {}/{} (budget {}h, exam pressure {:.2})",
        config.current_week,
        config.total_weeks,
        config.weekly_budget(),
        exam_pressure
    );

    let mut schedule = WeekSchedule::new();
    let mut weekly_totals: HashMap<String, u32> = HashMap::new();

    for day in Weekday::ALL {
        let available_hours = if day.is_weekend() {
            config.weekend_hours
        } else {
            config.weekday_hours
        };
        let ctx = DayContext {
            available_hours,
            preferred_time: config.preferred_time,
            exam_pressure,
            exam_date: config.exam_date,
            current_week: config.current_week,
            total_weeks: config.total_weeks,
        };
        let allocation = allocate_day(subjects, &ctx, rng);
        for grant in &allocation.allocated {
            *weekly_totals.entry(grant.subject.clone()).or_insert(0) += grant.hours;
        }
        schedule.insert(day, allocation.slots);
    }

    for subject in subjects.iter_mut() {
        subject.hours_allocated = weekly_totals
            .get(&subject.subject.name)
            .copied()
            .unwrap_or(0);
    }

    schedule
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{CognitiveLoad, Subject};
    use crate::scheduler::weights::compute_weights;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn subject(name: &str, credits: u32, confidence: u8) -> Subject {
        Subject {
            name: name.to_string(),
            credits,
            confidence,
            strong_areas: "Arrays".to_string(),
            weak_areas: "Trees,Graphs".to_string(),
            cognitive_load: CognitiveLoad::Medium,
            priority: None,
        }
    }

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).unwrap()
    }

    fn config() -> WeekConfig {
        WeekConfig {
            weekday_hours: 4,
            weekend_hours: 2,
            preferred_time: TimeBand::Evening,
            current_week: 1,
            total_weeks: 12,
            exam_date: None,
            today: today(),
        }
    }

    #[test]
    fn test_single_subject_hour_allocation() {
        // Weekly budget 4*5 + 2*2 = 24; a lone subject takes the whole
        // 90% share: round(24 * 0.9) = 22 weekly, ceil(22/7) = 4 daily
        let mut subjects = compute_weights(&[subject("A", 4, 2)], 12, None, today());
        let mut rng = StdRng::seed_from_u64(3);
        plan_week(&mut subjects, &config(), &mut rng);
        assert_eq!(subjects[0].weekly_hours, 22);
        assert_eq!(subjects[0].daily_hours, 4);
    }

    #[test]
    fn test_weekly_hours_at_least_one() {
        let mut subjects = compute_weights(
            &[
                subject("A", 5, 1),
                subject("B", 1, 5),
                subject("C", 1, 5),
                subject("D", 1, 5),
            ],
            12,
            None,
            today(),
        );
        let mut cfg = config();
        cfg.weekday_hours = 1;
        cfg.weekend_hours = 1;
        let mut rng = StdRng::seed_from_u64(3);
        plan_week(&mut subjects, &cfg, &mut rng);
        for s in &subjects {
            assert!(s.weekly_hours >= 1);
            assert!(s.daily_hours >= 1);
            assert_eq!(s.daily_hours, ((s.weekly_hours + 6) / 7).max(1));
        }
    }

    #[test]
    fn test_all_seven_days_present() {
        let mut subjects = compute_weights(&[subject("A", 4, 2)], 12, None, today());
        let mut rng = StdRng::seed_from_u64(3);
        let schedule = plan_week(&mut subjects, &config(), &mut rng);
        assert_eq!(schedule.len(), 7);
        let days: Vec<Weekday> = schedule.keys().copied().collect();
        assert_eq!(days, Weekday::ALL.to_vec());
    }

    #[test]
    fn test_weekend_budget_applies_only_to_saturday_and_sunday() {
        // Asymmetric budgets make a misfired weekend predicate visible:
        // two equal subjects at 2 daily hours each fill a 4-hour weekday
        // exactly, but only one fits into a 2-hour weekend day
        let mut subjects = compute_weights(
            &[subject("A", 4, 2), subject("B", 4, 2)],
            12,
            None,
            today(),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let schedule = plan_week(&mut subjects, &config(), &mut rng);

        for day in Weekday::ALL {
            let budget = if day.is_weekend() { 2 } else { 4 };
            let study_hours: u32 = schedule[&day]
                .iter()
                .filter(|s| !s.is_buffer())
                .map(|s| s.duration_hours)
                .sum();
            assert!(
                study_hours <= budget,
                "{} exceeded its {}h budget with {}h",
                day,
                budget,
                study_hours
            );
        }
        // Weekdays actually use the larger budget
        let monday_hours: u32 = schedule[&Weekday::Monday]
            .iter()
            .filter(|s| !s.is_buffer())
            .map(|s| s.duration_hours)
            .sum();
        let saturday_hours: u32 = schedule[&Weekday::Saturday]
            .iter()
            .filter(|s| !s.is_buffer())
            .map(|s| s.duration_hours)
            .sum();
        assert_eq!(monday_hours, 4);
        assert_eq!(saturday_hours, 2);
    }

    #[test]
    fn test_hours_allocated_totals_match_schedule() {
        let mut subjects = compute_weights(
            &[subject("A", 4, 2), subject("B", 2, 4)],
            12,
            None,
            today(),
        );
        let mut rng = StdRng::seed_from_u64(3);
        let schedule = plan_week(&mut subjects, &config(), &mut rng);

        for s in &subjects {
            let scheduled: u32 = schedule
                .values()
                .flatten()
                .filter(|slot| slot.subject == s.subject.name)
                .map(|slot| slot.duration_hours)
                .sum();
            assert_eq!(s.hours_allocated, scheduled);
        }
    }

    #[test]
    fn test_zero_weight_subjects_share_equally() {
        let mut degenerate = compute_weights(
            &[subject("A", 4, 2), subject("B", 4, 2)],
            12,
            None,
            today(),
        );
        for s in &mut degenerate {
            s.weight = 0.0;
        }
        let mut rng = StdRng::seed_from_u64(3);
        plan_week(&mut degenerate, &config(), &mut rng);
        assert_eq!(degenerate[0].weekly_hours, degenerate[1].weekly_hours);
        assert!(degenerate[0].weekly_hours >= 1);
    }

    #[test]
    fn test_empty_subject_list_gives_buffer_only_week() {
        let mut subjects: Vec<WeightedSubject> = Vec::new();
        let mut rng = StdRng::seed_from_u64(3);
        let schedule = plan_week(&mut subjects, &config(), &mut rng);
        assert_eq!(schedule.len(), 7);
        for slots in schedule.values() {
            assert_eq!(slots.len(), 1);
            assert!(slots[0].is_buffer());
        }
    }

    #[test]
    fn test_exam_pressure_zero_without_exam_date() {
        let mut subjects = compute_weights(&[subject("A", 4, 2)], 12, None, today());
        let mut rng = StdRng::seed_from_u64(3);
        // No exam date: planning succeeds and no extra exam hour is granted
        let schedule = plan_week(&mut subjects, &config(), &mut rng);
        let monday_first = &schedule[&Weekday::Monday][0];
        assert_eq!(monday_first.duration_hours, subjects[0].daily_hours);
    }
}
