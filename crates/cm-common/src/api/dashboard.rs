use serde::{Deserialize, Serialize};

use crate::completeness::{CompletenessAction, CompletenessResult};
use crate::matching::{MatchScore, MatchType, MatchedJob};

/// Dashboard-facing completeness payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessDto {
    pub score: u8,
    pub actions: Vec<CompletenessActionDto>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletenessActionDto {
    pub id: String,
    pub label: String,
    pub percentage_boost: u8,
    pub completed: bool,
    pub href: String,
}

impl From<&CompletenessResult> for CompletenessDto {
    fn from(value: &CompletenessResult) -> Self {
        Self {
            score: value.score,
            actions: value.actions.iter().map(CompletenessActionDto::from).collect(),
        }
    }
}

impl From<&CompletenessAction> for CompletenessActionDto {
    fn from(value: &CompletenessAction) -> Self {
        Self {
            id: value.id.to_string(),
            label: value.label.to_string(),
            percentage_boost: value.percentage_boost,
            completed: value.completed,
            href: value.href.to_string(),
        }
    }
}

/// Ranked job as the dashboard renders it. `match_percentage` is omitted
/// entirely for non-matches rather than serialized as zero.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchedJobDto {
    pub id: Option<i64>,
    pub title: String,
    pub vessel_name: Option<String>,
    pub vessel_size: Option<String>,
    pub primary_region: Option<String>,
    pub salary_min: Option<u32>,
    pub salary_max: Option<u32>,
    pub salary_currency: Option<String>,
    pub contract_type: Option<String>,
    pub is_urgent: bool,
    pub posted_days: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub match_percentage: Option<u8>,
    pub match_type: String,
    pub score_breakdown: ScoreBreakdownDto,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ScoreBreakdownDto {
    pub position: u8,
    pub region: u8,
    pub contract: u8,
    pub salary: u8,
}

impl From<&MatchScore> for ScoreBreakdownDto {
    fn from(value: &MatchScore) -> Self {
        Self {
            position: value.position.points,
            region: value.region.points,
            contract: value.contract.points,
            salary: value.salary.points,
        }
    }
}

impl From<&MatchedJob> for MatchedJobDto {
    fn from(value: &MatchedJob) -> Self {
        let match_percentage = match value.score.match_type {
            MatchType::Match => Some(value.score.total),
            MatchType::None => None,
        };

        Self {
            id: value.job.id,
            title: value.job.title.clone(),
            vessel_name: value.job.vessel_name.clone(),
            vessel_size: value.job.vessel_size.clone(),
            primary_region: value.job.primary_region.clone(),
            salary_min: value.job.salary_min,
            salary_max: value.job.salary_max,
            salary_currency: value.job.salary_currency.clone(),
            contract_type: value.job.contract_type.clone(),
            is_urgent: value.job.is_urgent,
            posted_days: value.posted_days,
            match_percentage,
            match_type: value.score.match_type.as_str().to_string(),
            score_breakdown: ScoreBreakdownDto::from(&value.score),
        }
    }
}

/// Combined dashboard payload: both pure computations over one snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardResponse {
    pub completeness: CompletenessDto,
    pub matches: Vec<MatchedJobDto>,
}

/// Ranking knobs read from the environment.
#[derive(Debug, Clone)]
pub struct MatchSettings {
    /// Matches returned to the dashboard.
    pub match_limit: usize,
    /// Recent open postings fetched for ranking before truncation.
    pub job_pool_size: i64,
}

impl Default for MatchSettings {
    fn default() -> Self {
        Self {
            match_limit: 4,
            job_pool_size: 30,
        }
    }
}

impl MatchSettings {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            match_limit: std::env::var("CM_MATCH_LIMIT")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.match_limit),
            job_pool_size: std::env::var("CM_JOB_POOL_SIZE")
                .ok()
                .and_then(|s| s.parse().ok())
                .filter(|v| *v > 0)
                .unwrap_or(defaults.job_pool_size),
        }
    }
}
