//! Calendar math for the planning horizon.
//!
//! All functions take an explicit `today` so planning stays a pure
//! function of its inputs.

use chrono::NaiveDate;

/// Hard cap on the planning horizon.
pub const MAX_PLAN_WEEKS: u32 = 52;

/// Whole weeks from `from` to `to`, rounded away from `from`.
///
/// Matches ceiling division by 7 days: a span of 1 to 7 days is one week,
/// 8 to 14 days is two. Negative spans round toward zero, so a date one
/// day in the past is still week 0.
pub fn weeks_until(from: NaiveDate, to: NaiveDate) -> i64 {
    let days = (to - from).num_days();
    if days >= 0 {
        (days + 6) / 7
    } else {
        days / 7
    }
}

/// Total planning weeks until a target date, clamped to [1, 52].
///
/// Uses the absolute span, so a target accidentally in the past still
/// yields a usable one-week horizon.
pub fn total_weeks_until(target: NaiveDate, today: NaiveDate) -> u32 {
    let days = (target - today).num_days().abs();
    let weeks = (days + 6) / 7;
    weeks.clamp(1, MAX_PLAN_WEEKS as i64) as u32
}

/// How close the exam sits relative to the whole horizon, in [0, 1].
///
/// 0 means the exam is now (or past), 1 means it is at or beyond the end
/// of the plan.
pub fn exam_proximity(exam_date: NaiveDate, today: NaiveDate, total_weeks: u32) -> f64 {
    let weeks = weeks_until(today, exam_date) as f64;
    (weeks / total_weeks.max(1) as f64).clamp(0.0, 1.0)
}

/// Exam pressure on a [0, 1] scale, stepping up as the exam approaches.
pub fn exam_pressure(exam_date: NaiveDate, today: NaiveDate) -> f64 {
    let weeks = weeks_until(today, exam_date);
    if weeks <= 0 {
        // Exam is today or already passed
        1.0
    } else if weeks <= 1 {
        0.9
    } else if weeks <= 2 {
        0.7
    } else if weeks <= 3 {
        0.5
    } else {
        (1.0 - weeks as f64 / 12.0).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_weeks_until_same_day() {
        assert_eq!(weeks_until(d(2026, 3, 1), d(2026, 3, 1)), 0);
    }

    #[test]
    fn test_weeks_until_rounds_up() {
        assert_eq!(weeks_until(d(2026, 3, 1), d(2026, 3, 2)), 1);
        assert_eq!(weeks_until(d(2026, 3, 1), d(2026, 3, 8)), 1);
        assert_eq!(weeks_until(d(2026, 3, 1), d(2026, 3, 9)), 2);
    }

    #[test]
    fn test_weeks_until_past_date() {
        assert_eq!(weeks_until(d(2026, 3, 8), d(2026, 3, 5)), 0);
        assert_eq!(weeks_until(d(2026, 3, 15), d(2026, 3, 1)), -2);
    }

    #[test]
    fn test_total_weeks_clamped_to_52() {
        // 400 days out is 58 raw weeks, capped at 52
        let today = d(2026, 1, 1);
        let target = today + chrono::Duration::days(400);
        assert_eq!(total_weeks_until(target, today), 52);
    }

    #[test]
    fn test_total_weeks_minimum_one() {
        let today = d(2026, 1, 1);
        assert_eq!(total_weeks_until(today, today), 1);
        // Past targets use the absolute span
        assert_eq!(total_weeks_until(d(2025, 12, 25), today), 1);
    }

    #[test]
    fn test_exam_proximity_clamped() {
        let today = d(2026, 1, 1);
        assert_eq!(exam_proximity(today, today, 10), 0.0);
        // Exam far beyond the horizon clamps to 1
        let far = today + chrono::Duration::days(365);
        assert_eq!(exam_proximity(far, today, 4), 1.0);
    }

    #[test]
    fn test_exam_proximity_fraction() {
        let today = d(2026, 1, 1);
        let exam = today + chrono::Duration::days(14);
        assert!((exam_proximity(exam, today, 10) - 0.2).abs() < 1e-9);
    }

    #[test]
    fn test_exam_pressure_steps() {
        let today = d(2026, 1, 1);
        assert_eq!(exam_pressure(today, today), 1.0);
        assert_eq!(exam_pressure(today - chrono::Duration::days(3), today), 1.0);
        assert_eq!(exam_pressure(today + chrono::Duration::days(5), today), 0.9);
        assert_eq!(exam_pressure(today + chrono::Duration::days(14), today), 0.7);
        assert_eq!(exam_pressure(today + chrono::Duration::days(21), today), 0.5);
        // 6 weeks out: 1 - 6/12 = 0.5 tail
        assert_eq!(exam_pressure(today + chrono::Duration::days(42), today), 0.5);
        // Beyond 12 weeks the tail floors at 0
        assert_eq!(exam_pressure(today + chrono::Duration::days(120), today), 0.0);
    }
}
