use chrono::{DateTime, Utc};

use super::positions::sought_positions;
use super::scoring::{score_job, MatchScore, MatchType};
use crate::date::days_since_posted;
use crate::{CandidateProfile, JobPosting};

#[derive(Debug, Clone, PartialEq)]
pub struct MatchedJob {
    pub job: JobPosting,
    pub score: MatchScore,
    pub posted_days: i64,
}

/// Score the job pool against a candidate and return the top matches.
///
/// Jobs without position relevance are excluded outright. Survivors sort by
/// score descending with fresher postings winning ties, then truncate to
/// `limit`. `now` is supplied by the caller so the ranking is deterministic
/// for a given snapshot.
pub fn rank_jobs(
    candidate: &CandidateProfile,
    jobs: &[JobPosting],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<MatchedJob> {
    let sought = sought_positions(candidate);
    if sought.is_empty() {
        return Vec::new();
    }

    let mut matched: Vec<MatchedJob> = jobs
        .iter()
        .filter_map(|job| {
            let score = score_job(candidate, &sought, job);
            if score.match_type == MatchType::None {
                return None;
            }

            Some(MatchedJob {
                job: job.clone(),
                posted_days: days_since_posted(job.created_at, now),
                score,
            })
        })
        .collect();

    matched.sort_by(|a, b| {
        b.score
            .total
            .cmp(&a.score.total)
            .then(a.posted_days.cmp(&b.posted_days))
    });
    matched.truncate(limit);
    matched
}
