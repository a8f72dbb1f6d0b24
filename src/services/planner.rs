//! Plan orchestration.
//!
//! [`PlanSession`] is the top-level entry point: one session owns the
//! student profile, the planning horizon, the computed weight set, and the
//! current-week cursor. Week navigation re-plans with the same weights;
//! only the adaptation path rescales them.

use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::{Deserialize, Serialize};

use crate::api::{StudentProfile, StudyPlan};
use crate::models::time;
use crate::scheduler::week::{plan_week, WeekConfig};
use crate::scheduler::weights::{compute_weights, WeightedSubject};
use crate::services::{insights, outcomes};

/// Fraction by which an adapted subject's weight decays.
const ADAPTATION_FACTOR: f64 = 0.1;

/// A reported confidence change for one subject.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfidenceUpdate {
    /// Subject name as it appears in the profile
    pub subject: String,
    pub new_confidence: u8,
}

/// One planning session for one student profile.
///
/// Subject weights are computed once at construction; `generate_plan` and
/// the navigation methods reuse them, so a session stays cheap to re-plan.
#[derive(Debug, Clone)]
pub struct PlanSession {
    profile: StudentProfile,
    today: NaiveDate,
    seed: Option<u64>,
    current_week: u32,
    total_weeks: u32,
    weighted: Vec<WeightedSubject>,
}

impl PlanSession {
    /// Create a session anchored at the local calendar date.
    pub fn new(profile: StudentProfile) -> Self {
        Self::with_today(profile, Local::now().date_naive())
    }

    /// Create a session anchored at an explicit date.
    pub fn with_today(profile: StudentProfile, today: NaiveDate) -> Self {
        let total_weeks = time::total_weeks_until(profile.target_date, today);
        let weighted =
            compute_weights(&profile.subjects, total_weeks, profile.exam_date, today);
        log::info!(
            "planning session: {} subjects over {} weeks",
            profile.subjects.len(),
            total_weeks
        );
        Self {
            profile,
            today,
            seed: None,
            current_week: 1,
            total_weeks,
            weighted,
        }
    }

    /// Pin the random source so repeated planning calls are identical.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn profile(&self) -> &StudentProfile {
        &self.profile
    }

    pub fn current_week(&self) -> u32 {
        self.current_week
    }

    pub fn total_weeks(&self) -> u32 {
        self.total_weeks
    }

    /// Total study hours across the whole horizon.
    pub fn total_hours(&self) -> u32 {
        (self.profile.weekday_hours * 5 + self.profile.weekend_hours * 2) * self.total_weeks
    }

    pub fn weighted_subjects(&self) -> &[WeightedSubject] {
        &self.weighted
    }

    /// Generate the plan for the session's current week.
    pub fn generate_plan(&mut self) -> StudyPlan {
        let config = WeekConfig {
            weekday_hours: self.profile.weekday_hours,
            weekend_hours: self.profile.weekend_hours,
            preferred_time: self.profile.preferred_time,
            current_week: self.current_week,
            total_weeks: self.total_weeks,
            exam_date: self.profile.exam_date,
            today: self.today,
        };

        let mut rng = self.rng();
        let weekly_schedule = plan_week(&mut self.weighted, &config, &mut rng);
        let insights = insights::compute_insights(
            &self.weighted,
            &weekly_schedule,
            &self.profile,
            self.today,
            self.current_week,
        );
        let outcomes =
            outcomes::compute_outcomes(&self.weighted, self.total_hours(), self.total_weeks);

        StudyPlan {
            weekly_schedule,
            insights,
            outcomes,
            weighted_subjects: self.weighted.clone(),
            total_weeks: self.total_weeks,
            total_hours: self.total_hours(),
        }
    }

    /// Jump to a week (clamped to the horizon) and re-plan.
    pub fn set_week(&mut self, week: u32) -> StudyPlan {
        self.current_week = week.clamp(1, self.total_weeks);
        self.generate_plan()
    }

    /// Advance one week and re-plan.
    pub fn next_week(&mut self) -> StudyPlan {
        self.set_week(self.current_week.saturating_add(1))
    }

    /// Go back one week and re-plan.
    pub fn previous_week(&mut self) -> StudyPlan {
        self.set_week(self.current_week.saturating_sub(1))
    }

    /// Apply reported confidence changes.
    ///
    /// Each matched subject's confidence is updated and its weight decays
    /// by 10%. Other subjects are not re-normalized and no re-plan is
    /// triggered; callers re-plan when they want the decay reflected in a
    /// schedule.
    pub fn adapt(&mut self, updates: &[ConfidenceUpdate]) {
        for update in updates {
            if let Some(subject) = self
                .weighted
                .iter_mut()
                .find(|s| s.subject.name == update.subject)
            {
                subject.subject.confidence = update.new_confidence;
                subject.weight *= 1.0 - ADAPTATION_FACTOR;
                log::debug!(
                    "adapted {}: confidence {}, weight {:.1}",
                    update.subject,
                    update.new_confidence,
                    subject.weight
                );
            }
        }
    }

    fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }
}
