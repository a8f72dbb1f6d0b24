//! Service layer for plan orchestration and derived views.
//!
//! Services compose the scheduling core into caller-facing operations:
//! session-scoped plan generation, insight/outcome derivation, and the
//! external topic-explainer collaborator.

pub mod explainer;
pub mod insights;
pub mod outcomes;
pub mod planner;

pub use explainer::{ExplainerClient, ExplainerConfig, ExplainerError};
pub use insights::compute_insights;
pub use outcomes::compute_outcomes;
pub use planner::{ConfidenceUpdate, PlanSession};
