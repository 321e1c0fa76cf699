//! Axum route handlers for the Recommendation API.

use std::collections::HashSet;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::candidate::Candidate;
use crate::models::profile::UserProfile;
use crate::recommendation::completeness::{
    calculate_completion, compute_completion_report, CompletionPercentage, CompletionReport,
};
use crate::recommendation::fit_scoring::{compute_breakdown, FactorBreakdown};
use crate::recommendation::ranker::{rank_candidates, RankedResult};
use crate::recommendation::reasons::{explain_match, highlights};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationRequest {
    pub profile: UserProfile,
    /// Candidates to rank. Omitted → the configured catalog.
    #[serde(default)]
    pub candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationCard {
    #[serde(flatten)]
    pub result: RankedResult,
    pub highlights: Vec<String>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecommendationResponse {
    pub completion: CompletionPercentage,
    /// True when the profile is below the completion gate and nothing was scored.
    pub gated: bool,
    pub recommendations: Vec<RecommendationCard>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExplainResponse {
    pub candidate_id: String,
    pub score: u32,
    pub display_score: u32,
    pub breakdown: FactorBreakdown,
    pub reasons: Vec<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/profile/completion
///
/// Completion percentage and the fields still missing before recommendations unlock.
pub async fn handle_profile_completion(
    State(state): State<AppState>,
    Json(profile): Json<UserProfile>,
) -> Json<CompletionReport> {
    Json(compute_completion_report(
        &profile,
        state.config.engine.completion_gate,
    ))
}

/// GET /api/v1/candidates
pub async fn handle_list_candidates(
    State(state): State<AppState>,
) -> Result<Json<Vec<Candidate>>, AppError> {
    Ok(Json(state.catalog.list().await?))
}

/// GET /api/v1/candidates/:id
pub async fn handle_get_candidate(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Candidate>, AppError> {
    let candidate = state
        .catalog
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;
    Ok(Json(candidate))
}

/// POST /api/v1/recommendations
///
/// Full pipeline: completion → gate → score → filter → sort → reasons.
pub async fn handle_recommendations(
    State(state): State<AppState>,
    Json(request): Json<RecommendationRequest>,
) -> Result<Json<RecommendationResponse>, AppError> {
    let candidates = match request.candidates {
        Some(candidates) => {
            ensure_unique_ids(&candidates)?;
            candidates
        }
        None => state.catalog.list().await?,
    };

    let engine = &state.config.engine;
    let completion = calculate_completion(&request.profile);
    let gated = completion.value() < engine.completion_gate;
    let ranked = rank_candidates(&candidates, &request.profile, completion, engine);

    info!(
        completion = completion.value(),
        candidates = candidates.len(),
        recommended = ranked.len(),
        gated,
        "Recommendations computed"
    );

    let recommendations = ranked
        .into_iter()
        .map(|result| RecommendationCard {
            highlights: highlights(&result.reasons),
            result,
        })
        .collect();

    Ok(Json(RecommendationResponse {
        completion,
        gated,
        recommendations,
    }))
}

fn ensure_unique_ids(candidates: &[Candidate]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for candidate in candidates {
        if !seen.insert(candidate.id.as_str()) {
            return Err(AppError::Validation(format!(
                "Duplicate candidate id '{}'",
                candidate.id
            )));
        }
    }
    Ok(())
}

/// POST /api/v1/candidates/:id/explain
///
/// Per-factor breakdown and reasons for one catalog candidate. Not gated:
/// the client uses it on detail screens regardless of profile completion.
pub async fn handle_explain(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(profile): Json<UserProfile>,
) -> Result<Json<ExplainResponse>, AppError> {
    let candidate = state
        .catalog
        .get(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("Candidate {id} not found")))?;

    let engine = &state.config.engine;
    let breakdown = compute_breakdown(&profile, &candidate, &engine.weights);

    Ok(Json(ExplainResponse {
        candidate_id: candidate.id.clone(),
        score: breakdown.total,
        display_score: breakdown.total.max(engine.display_floor),
        reasons: explain_match(&candidate, &profile),
        breakdown,
    }))
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
