use std::collections::HashSet;

use crate::normalize::normalize_position_set;
use crate::CandidateProfile;

/// Which side of the platform the candidate wants to work on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndustryPreference {
    Yacht,
    Household,
    Both,
}

impl IndustryPreference {
    pub fn includes_yacht(self) -> bool {
        matches!(self, Self::Yacht | Self::Both)
    }

    pub fn includes_household(self) -> bool {
        matches!(self, Self::Household | Self::Both)
    }
}

/// Resolve the industry preference with fallback: the explicit preference
/// field wins; otherwise infer from candidate_type. Absent or unrecognized on
/// both counts resolves to `Both` (most permissive).
pub fn resolve_industry_preference(candidate: &CandidateProfile) -> IndustryPreference {
    if let Some(pref) = candidate.industry_preference.as_deref().map(str::trim) {
        match pref {
            "yacht" => return IndustryPreference::Yacht,
            "household" => return IndustryPreference::Household,
            "both" => return IndustryPreference::Both,
            _ => {}
        }
    }

    match candidate.candidate_type.as_deref().map(str::trim) {
        Some("yacht_crew") => IndustryPreference::Yacht,
        Some("household_staff") => IndustryPreference::Household,
        _ => IndustryPreference::Both,
    }
}

/// Derive the normalized, de-duplicated set of positions the candidate is
/// seeking.
///
/// Explicit preference positions (gated by industry preference) are used
/// exclusively when any are set; otherwise the profile's primary and
/// secondary positions are the fallback. Historical positions never enter, so
/// a Captain who once worked as a Stewardess is not shown interior jobs.
pub fn sought_positions(candidate: &CandidateProfile) -> HashSet<String> {
    let industry = resolve_industry_preference(candidate);

    let mut preferred: Vec<&str> = Vec::new();
    if industry.includes_yacht() {
        preferred.extend(present(&candidate.yacht_position_primary));
        preferred.extend(present(&candidate.yacht_position_secondary));
    }
    if industry.includes_household() {
        preferred.extend(present(&candidate.household_position_primary));
        preferred.extend(present(&candidate.household_position_secondary));
    }

    if !preferred.is_empty() {
        return normalize_position_set(preferred);
    }

    let mut fallback: Vec<&str> = Vec::new();
    fallback.extend(present(&candidate.primary_position));
    fallback.extend(candidate.secondary_positions.iter().map(String::as_str));

    normalize_position_set(fallback)
}

fn present(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}
