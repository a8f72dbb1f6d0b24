//! HTTP handlers for the REST API.
//!
//! Each handler corresponds to an API endpoint and delegates to the
//! service layer for business logic.

use axum::{extract::State, Json};

use super::dto::{
    AdaptPlanRequest, AdaptPlanResponse, ExplainRequest, ExplainResponse, GeneratePlanRequest,
    HealthResponse, StudyPlan,
};
use super::error::AppError;
use super::state::AppState;
use crate::models::profile::parse_student_profile_json_str;
use crate::services::explainer::ExplainerClient;
use crate::services::planner::PlanSession;

/// Result type for handlers.
pub type HandlerResult<T> = Result<Json<T>, AppError>;

// =============================================================================
// Health Check
// =============================================================================

/// GET /health
///
/// Verify the service is running and the snapshot store is reachable.
pub async fn health_check(State(state): State<AppState>) -> HandlerResult<HealthResponse> {
    let repository = match state.repository.health_check().await {
        Ok(true) => "connected".to_string(),
        Ok(false) => "disconnected".to_string(),
        Err(e) => format!("error: {}", e),
    };

    Ok(Json(HealthResponse {
        status: "ok".to_string(),
        version: "v1".to_string(),
        repository,
    }))
}

// =============================================================================
// Planning
// =============================================================================

fn build_session(profile_json: &serde_json::Value, seed: Option<u64>) -> Result<PlanSession, AppError> {
    let profile_str = serde_json::to_string(profile_json)
        .map_err(|e| AppError::BadRequest(format!("Invalid profile JSON: {}", e)))?;
    let profile = parse_student_profile_json_str(&profile_str)
        .map_err(|e| AppError::BadRequest(format!("Invalid student profile: {}", e)))?;

    let session = PlanSession::new(profile);
    Ok(match seed {
        Some(seed) => session.with_seed(seed),
        None => session,
    })
}

/// POST /v1/plan
///
/// Generate a plan for the submitted profile, snapshot both, and return it.
pub async fn generate_plan(
    State(state): State<AppState>,
    Json(request): Json<GeneratePlanRequest>,
) -> HandlerResult<StudyPlan> {
    let mut session = build_session(&request.profile, request.seed)?;
    let plan = match request.week {
        Some(week) => session.set_week(week),
        None => session.generate_plan(),
    };

    // Best-effort snapshotting: storage failures do not invalidate the
    // already-computed plan
    if let Err(e) = state
        .repository
        .store_subjects(&session.profile().subjects)
        .await
    {
        tracing::warn!("failed to snapshot subjects: {}", e);
    }
    if let Err(e) = state.repository.store_plan(&plan).await {
        tracing::warn!("failed to snapshot plan: {}", e);
    }

    Ok(Json(plan))
}

/// GET /v1/plan
///
/// Return the most recently snapshotted plan.
pub async fn get_plan(State(state): State<AppState>) -> HandlerResult<StudyPlan> {
    let plan = state.repository.fetch_plan().await?;
    Ok(Json(plan))
}

/// POST /v1/plan/adapt
///
/// Apply confidence updates to a fresh session over the submitted profile
/// and return the decayed weight set. No re-plan is triggered.
pub async fn adapt_plan(
    State(_state): State<AppState>,
    Json(request): Json<AdaptPlanRequest>,
) -> HandlerResult<AdaptPlanResponse> {
    let mut session = build_session(&request.profile, None)?;
    session.adapt(&request.updates);
    Ok(Json(AdaptPlanResponse {
        weighted_subjects: session.weighted_subjects().to_vec(),
    }))
}

// =============================================================================
// Explainer
// =============================================================================

/// POST /v1/explain
///
/// Proxy a topic-explanation request to the hosted model.
pub async fn explain_topic(
    State(state): State<AppState>,
    Json(request): Json<ExplainRequest>,
) -> HandlerResult<ExplainResponse> {
    let config = state.explainer.clone().ok_or_else(|| {
        AppError::BadRequest(
            "API key not configured. Set OPENROUTER_API_KEY to enable explanations.".to_string(),
        )
    })?;

    let mut client = ExplainerClient::new(config);
    let explanation = client
        .explain_topic(&request.topic, &request.subject)
        .await?;
    Ok(Json(ExplainResponse { explanation }))
}
