//! Data Transfer Objects for the HTTP API.
//!
//! The plan/insights/outcomes payloads are the library DTOs re-exported
//! as-is; this module only adds the request/response envelopes.

use serde::{Deserialize, Serialize};

// Re-export existing DTOs that are already serializable
pub use crate::api::{InsightsData, OutcomesData, StudentProfile, StudyPlan};
pub use crate::services::planner::ConfidenceUpdate;

/// Request body for generating a plan.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GeneratePlanRequest {
    /// Student profile JSON (camelCase, as submitted by clients)
    pub profile: serde_json::Value,
    /// Week to plan, defaulting to 1; clamped to the plan horizon
    #[serde(default)]
    pub week: Option<u32>,
    /// Optional RNG seed for reproducible plans
    #[serde(default)]
    pub seed: Option<u64>,
}

/// Request body for the adaptation stub.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdaptPlanRequest {
    pub profile: serde_json::Value,
    pub updates: Vec<ConfidenceUpdate>,
}

/// Response for the adaptation stub: the decayed weight set.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdaptPlanResponse {
    pub weighted_subjects: Vec<crate::scheduler::weights::WeightedSubject>,
}

/// Request body for a topic explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainRequest {
    pub topic: String,
    pub subject: String,
}

/// Response for a topic explanation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExplainResponse {
    pub explanation: String,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub repository: String,
}
