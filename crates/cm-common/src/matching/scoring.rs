use std::collections::HashSet;

use super::weights::MATCH_WEIGHTS;
use crate::normalize::normalize_position;
use crate::{CandidateProfile, JobPosting};

/// Classification of a job against a candidate. `None` means the job failed
/// the position-relevance gate and must not appear in results.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchType {
    Match,
    None,
}

impl MatchType {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Match => "match",
            Self::None => "none",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct FactorScore {
    pub points: u8,
    pub status: &'static str,
    pub details: String,
}

impl FactorScore {
    fn hit(points: u8, details: String) -> Self {
        Self {
            points,
            status: "MATCH",
            details,
        }
    }

    fn miss(details: String) -> Self {
        Self {
            points: 0,
            status: "MISS",
            details,
        }
    }

    /// Data needed for the factor is absent on one side or the other; the
    /// factor contributes nothing rather than erroring.
    fn skip(details: String) -> Self {
        Self {
            points: 0,
            status: "SKIP",
            details,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct MatchScore {
    /// 0..=100, additive over the factor weights.
    pub total: u8,
    pub match_type: MatchType,
    pub position: FactorScore,
    pub region: FactorScore,
    pub contract: FactorScore,
    pub salary: FactorScore,
}

/// Score a single job against a candidate's sought positions and preferences.
///
/// `sought` must already be normalized (see `sought_positions`); callers score
/// many jobs against one candidate, so derivation happens once upstream.
pub fn score_job(
    candidate: &CandidateProfile,
    sought: &HashSet<String>,
    job: &JobPosting,
) -> MatchScore {
    let position = score_position(sought, &job.title);
    let region = score_region(&candidate.preferred_regions, job.primary_region.as_deref());
    let contract = score_contract(
        &candidate.preferred_contract_types,
        job.contract_type.as_deref(),
    );
    let salary = score_salary(candidate.desired_salary_min, job.salary_max);

    let match_type = if position.points == 0 {
        MatchType::None
    } else {
        MatchType::Match
    };

    let total = (position.points as u32
        + region.points as u32
        + contract.points as u32
        + salary.points as u32)
        .min(100) as u8;

    MatchScore {
        total,
        match_type,
        position,
        region,
        contract,
        salary,
    }
}

/// Strict containment after normalization; no fuzzy or related-role matching.
fn score_position(sought: &HashSet<String>, title: &str) -> FactorScore {
    if sought.is_empty() {
        return FactorScore::skip("candidate has no sought positions".into());
    }

    let normalized_title = normalize_position(title);
    if normalized_title.is_empty() {
        return FactorScore::miss("job has no title to match against".into());
    }

    match sought.iter().find(|p| normalized_title.contains(p.as_str())) {
        Some(hit) => FactorScore::hit(
            MATCH_WEIGHTS.position,
            format!("title contains sought position: {hit}"),
        ),
        None => FactorScore::miss(format!(
            "no sought position found in title: {normalized_title}"
        )),
    }
}

/// Case-insensitive substring match in either direction, so "Mediterranean"
/// pairs with "West Mediterranean" whichever side is more specific.
fn score_region(preferred_regions: &[String], job_region: Option<&str>) -> FactorScore {
    let job_region = match job_region.map(str::trim).filter(|r| !r.is_empty()) {
        Some(region) => region.to_lowercase(),
        None => return FactorScore::skip("job has no primary region".into()),
    };

    let preferred: Vec<String> = preferred_regions
        .iter()
        .map(|r| r.trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect();

    if preferred.is_empty() {
        return FactorScore::skip("candidate has no preferred regions".into());
    }

    match preferred
        .iter()
        .find(|r| job_region.contains(r.as_str()) || r.contains(&job_region))
    {
        Some(hit) => FactorScore::hit(MATCH_WEIGHTS.region, format!("region overlap: {hit}")),
        None => FactorScore::miss(format!("no preferred region overlaps {job_region}")),
    }
}

fn score_contract(preferred_types: &[String], job_contract: Option<&str>) -> FactorScore {
    let job_contract = match job_contract.map(str::trim).filter(|c| !c.is_empty()) {
        Some(contract) => contract,
        None => return FactorScore::skip("job has no contract type".into()),
    };

    if preferred_types.is_empty() {
        return FactorScore::skip("candidate has no preferred contract types".into());
    }

    if preferred_types.iter().any(|c| c.trim() == job_contract) {
        FactorScore::hit(
            MATCH_WEIGHTS.contract,
            format!("contract type preferred: {job_contract}"),
        )
    } else {
        FactorScore::miss(format!("contract type not preferred: {job_contract}"))
    }
}

/// Only evaluated when both figures are present.
fn score_salary(desired_min: Option<u32>, job_max: Option<u32>) -> FactorScore {
    match (desired_min, job_max) {
        (Some(desired), Some(max)) if max >= desired => FactorScore::hit(
            MATCH_WEIGHTS.salary,
            format!("job max {max} covers desired minimum {desired}"),
        ),
        (Some(desired), Some(max)) => {
            FactorScore::miss(format!("job max {max} below desired minimum {desired}"))
        }
        _ => FactorScore::skip("salary figures incomplete".into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::positions::sought_positions;

    fn base_candidate() -> CandidateProfile {
        CandidateProfile {
            primary_position: Some("Chief Stewardess".into()),
            candidate_type: Some("yacht_crew".into()),
            preferred_regions: vec!["Mediterranean".into()],
            preferred_contract_types: vec!["permanent".into()],
            desired_salary_min: Some(4000),
            ..CandidateProfile::default()
        }
    }

    fn base_job() -> JobPosting {
        JobPosting {
            title: "Chief Stewardess - M/Y Example".into(),
            primary_region: Some("Mediterranean".into()),
            contract_type: Some("permanent".into()),
            salary_min: Some(4500),
            salary_max: Some(5500),
            ..JobPosting::default()
        }
    }

    fn score(candidate: &CandidateProfile, job: &JobPosting) -> MatchScore {
        let sought = sought_positions(candidate);
        score_job(candidate, &sought, job)
    }

    #[test]
    fn all_four_factors_sum_to_one_hundred() {
        let result = score(&base_candidate(), &base_job());

        assert_eq!(result.total, 100);
        assert_eq!(result.match_type, MatchType::Match);
        assert_eq!(result.position.status, "MATCH");
        assert_eq!(result.region.status, "MATCH");
        assert_eq!(result.contract.status, "MATCH");
        assert_eq!(result.salary.status, "MATCH");
    }

    #[test]
    fn worked_example_scores_seventy_five() {
        // Position + region only: contract and salary data absent on the job.
        let candidate = base_candidate();
        let job = JobPosting {
            title: "Chief Stewardess - M/Y Example".into(),
            primary_region: Some("Mediterranean".into()),
            ..JobPosting::default()
        };

        let result = score(&candidate, &job);

        assert_eq!(result.total, 75);
        assert_eq!(result.match_type, MatchType::Match);
        assert_eq!(result.contract.status, "SKIP");
        assert_eq!(result.salary.status, "SKIP");
    }

    #[test]
    fn stewardess_normalization_bridges_title_spellings() {
        let mut candidate = base_candidate();
        candidate.primary_position = Some("Stewardess".into());
        let mut job = base_job();
        job.title = "Junior Stew".into();

        let result = score(&candidate, &job);

        assert_eq!(result.match_type, MatchType::Match);
        assert!(result.position.points >= 50);
    }

    #[test]
    fn unrelated_title_is_classified_none() {
        let mut job = base_job();
        job.title = "Deckhand".into();

        let result = score(&base_candidate(), &job);

        assert_eq!(result.match_type, MatchType::None);
        assert_eq!(result.position.points, 0);
        // Other factors still evaluated; the gate, not the total, excludes it.
        assert_eq!(result.region.points, 25);
    }

    #[test]
    fn region_matches_in_either_direction() {
        // Candidate broader than the job.
        let mut job = base_job();
        job.primary_region = Some("West Mediterranean".into());
        let result = score(&base_candidate(), &job);
        assert_eq!(result.region.status, "MATCH");

        // Candidate more specific than the job.
        let mut candidate = base_candidate();
        candidate.preferred_regions = vec!["West Mediterranean".into()];
        job.primary_region = Some("mediterranean".into());
        assert_eq!(score(&candidate, &job).region.status, "MATCH");

        // Disjoint regions miss.
        candidate.preferred_regions = vec!["Caribbean".into()];
        assert_eq!(score(&candidate, &job).region.status, "MISS");
    }

    #[test]
    fn salary_below_desired_minimum_earns_nothing_but_job_still_matches() {
        let mut job = base_job();
        job.salary_max = Some(3000);

        let result = score(&base_candidate(), &job);

        assert_eq!(result.salary.status, "MISS");
        assert_eq!(result.match_type, MatchType::Match);
        assert_eq!(result.total, 90);
    }

    #[test]
    fn missing_salary_figures_skip_the_factor() {
        let mut candidate = base_candidate();
        candidate.desired_salary_min = None;

        let result = score(&candidate, &base_job());

        assert_eq!(result.salary.status, "SKIP");
        assert_eq!(result.total, 90);
    }

    #[test]
    fn no_sought_positions_gates_everything_out() {
        let candidate = CandidateProfile {
            preferred_regions: vec!["Mediterranean".into()],
            ..CandidateProfile::default()
        };

        let result = score(&candidate, &base_job());

        assert_eq!(result.match_type, MatchType::None);
        assert_eq!(result.position.status, "SKIP");
    }
}
