//! # Study-Plan Backend
//!
//! Personal study-plan generation engine.
//!
//! Given a learner's subjects, confidence levels, available hours, and
//! target/exam dates, this crate produces a week-by-week schedule of
//! study sessions plus derived insights: priority topics, prerequisite
//! checks, adaptation suggestions, and projected outcomes. An optional
//! Axum REST API exposes the engine to clients.
//!
//! ## Features
//!
//! - **Weighting**: per-subject priority weights from credits,
//!   confidence, cognitive load, weak areas, exam proximity, and explicit
//!   priority
//! - **Scheduling**: day-by-day slot placement under daily hour budgets
//!   with cognitive-load-aware time slots and buffer activities
//! - **Insights**: priority focus, prerequisite checks, adaptation
//!   suggestions, today's to-do, weekly goals, expected outcomes
//! - **Snapshotting**: plans and profiles persist as plain JSON through a
//!   pluggable repository
//! - **Explainer**: typed client for the hosted topic-explanation model
//!
//! ## Architecture
//!
//! The crate is organized into several logical modules:
//!
//! - [`api`]: core DTO types shared across all layers
//! - [`models`]: input parsing and calendar math
//! - [`scheduler`]: weight model, topic selector, day allocator, week planner
//! - [`services`]: plan orchestration, insight/outcome derivation, explainer
//! - [`db`]: snapshot persistence boundary
//! - [`http`]: Axum-based HTTP server and request handlers
//!
//! ## Example
//!
//! ```
//! use studyplan_rust::api::{CognitiveLoad, StudentProfile, Subject, TimeBand};
//! use studyplan_rust::services::PlanSession;
//!
//! let profile = StudentProfile {
//!     checksum: String::new(),
//!     subjects: vec![Subject {
//!         name: "Data Structures".to_string(),
//!         credits: 4,
//!         confidence: 2,
//!         strong_areas: "Arrays".to_string(),
//!         weak_areas: "Trees, Graphs".to_string(),
//!         cognitive_load: CognitiveLoad::High,
//!         priority: None,
//!     }],
//!     weekday_hours: 4,
//!     weekend_hours: 6,
//!     preferred_time: TimeBand::Evening,
//!     target_date: chrono::NaiveDate::from_ymd_opt(2027, 1, 15).unwrap(),
//!     exam_date: None,
//! };
//!
//! let mut session = PlanSession::new(profile).with_seed(42);
//! let plan = session.generate_plan();
//! assert_eq!(plan.weekly_schedule.len(), 7);
//! ```

pub mod api;

pub mod db;
pub mod models;

pub mod routes;

pub mod scheduler;

pub mod services;

#[cfg(feature = "http-server")]
pub mod http;
