use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::Deserialize;

use cm_common::api::dashboard::{CompletenessDto, DashboardResponse, MatchedJobDto};
use cm_common::db::{fetch_document_tags, fetch_open_jobs, resolve_candidate};
use cm_common::matching::rank_jobs;
use cm_common::{completeness, CandidateProfile};

use crate::auth::AuthUser;
use crate::error::ApiError;
use crate::SharedState;

#[derive(Debug, Deserialize, Default)]
pub struct MatchQuery {
    /// Overrides the configured match limit for this request.
    pub limit: Option<usize>,
    /// Fallback lookup when the candidate row is not linked to the user id.
    pub email: Option<String>,
}

const MAX_LIMIT: usize = 20;

pub async fn get_completeness(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
    Query(query): Query<MatchQuery>,
    _auth: AuthUser,
) -> Result<Json<CompletenessDto>, ApiError> {
    let candidate = load_candidate(&state, user_id, query.email.as_deref()).await?;

    let result = completeness::compute(&candidate);
    Ok(Json(CompletenessDto::from(&result)))
}

pub async fn get_matches(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
    Query(query): Query<MatchQuery>,
    _auth: AuthUser,
) -> Result<Json<Vec<MatchedJobDto>>, ApiError> {
    let candidate = load_candidate(&state, user_id, query.email.as_deref()).await?;
    let jobs = fetch_open_jobs(&state.pool, state.match_settings.job_pool_size).await?;

    let limit = effective_limit(&state, query.limit);
    let matches = rank_jobs(&candidate, &jobs, Utc::now(), limit);

    Ok(Json(matches.iter().map(MatchedJobDto::from).collect()))
}

pub async fn get_dashboard(
    State(state): State<SharedState>,
    Path(user_id): Path<i64>,
    Query(query): Query<MatchQuery>,
    _auth: AuthUser,
) -> Result<Json<DashboardResponse>, ApiError> {
    let mut candidate = load_bare_candidate(&state, user_id, query.email.as_deref()).await?;
    let candidate_id = candidate.id.unwrap_or(user_id);

    // Jobs and documents are independent fetches; the scoring itself is pure.
    let (jobs, documents) = tokio::join!(
        fetch_open_jobs(&state.pool, state.match_settings.job_pool_size),
        fetch_document_tags(&state.pool, candidate_id),
    );
    let jobs = jobs?;
    candidate.documents = documents?;

    let limit = effective_limit(&state, query.limit);
    let matches = rank_jobs(&candidate, &jobs, Utc::now(), limit);
    let result = completeness::compute(&candidate);

    Ok(Json(DashboardResponse {
        completeness: CompletenessDto::from(&result),
        matches: matches.iter().map(MatchedJobDto::from).collect(),
    }))
}

fn effective_limit(state: &SharedState, requested: Option<usize>) -> usize {
    requested
        .unwrap_or(state.match_settings.match_limit)
        .clamp(1, MAX_LIMIT)
}

async fn load_bare_candidate(
    state: &SharedState,
    user_id: i64,
    email: Option<&str>,
) -> Result<CandidateProfile, ApiError> {
    resolve_candidate(&state.pool, user_id, email)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("candidate not found for user {user_id}")))
}

async fn load_candidate(
    state: &SharedState,
    user_id: i64,
    email: Option<&str>,
) -> Result<CandidateProfile, ApiError> {
    let mut candidate = load_bare_candidate(state, user_id, email).await?;
    let candidate_id = candidate.id.unwrap_or(user_id);
    candidate.documents = fetch_document_tags(&state.pool, candidate_id).await?;
    Ok(candidate)
}
