use super::categories::{Category, CATEGORIES};
use crate::verification::VerificationTier;
use crate::{text_present, CandidateProfile};

#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessAction {
    pub id: &'static str,
    pub label: &'static str,
    pub percentage_boost: u8,
    pub completed: bool,
    pub href: &'static str,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CompletenessResult {
    /// 0..=100. Sum of the weights of all satisfied categories.
    pub score: u8,
    /// One entry per unsatisfied category that offers remediation, in
    /// category order.
    pub actions: Vec<CompletenessAction>,
}

/// Compute the profile completeness score and the remediation actions.
///
/// Pure over the profile snapshot; filling in any field can only keep the
/// score or raise it, never lower it.
pub fn compute(profile: &CandidateProfile) -> CompletenessResult {
    let mut score: u8 = 0;
    let mut actions = Vec::new();

    for category in &CATEGORIES {
        if is_satisfied(category, profile) {
            score += category.weight;
        } else if category.offers_action {
            actions.push(CompletenessAction {
                id: category.id,
                label: category.label,
                percentage_boost: category.weight,
                completed: false,
                href: category.href,
            });
        }
    }

    CompletenessResult { score, actions }
}

fn is_satisfied(category: &Category, profile: &CandidateProfile) -> bool {
    match category.id {
        "basic_info" => has_basic_info(profile),
        "professional" => has_professional_profile(profile),
        "cv" => has_cv(profile),
        "photo" => text_present(profile.photo_url.as_deref()),
        "certifications" => has_certifications(profile),
        "preferences" => text_present(profile.industry_preference.as_deref()),
        "identity" => {
            VerificationTier::parse(profile.verification_tier.as_deref()).identity_confirmed()
        }
        other => unreachable!("unknown completeness category: {other}"),
    }
}

fn has_basic_info(profile: &CandidateProfile) -> bool {
    [
        profile.first_name.as_deref(),
        profile.last_name.as_deref(),
        profile.email.as_deref(),
        profile.phone.as_deref(),
        profile.nationality.as_deref(),
        profile.current_location.as_deref(),
    ]
    .into_iter()
    .all(text_present)
        && profile.date_of_birth.is_some()
}

fn has_professional_profile(profile: &CandidateProfile) -> bool {
    text_present(profile.primary_position.as_deref())
        && text_present(profile.candidate_type.as_deref())
}

fn has_cv(profile: &CandidateProfile) -> bool {
    profile.documents.iter().any(|d| d.doc_type == "cv")
}

/// Yacht crew must hold at least one of STCW/ENG1; household-only candidates
/// are exempt and earn the category outright.
fn has_certifications(profile: &CandidateProfile) -> bool {
    if !is_yacht_related(profile.candidate_type.as_deref()) {
        return true;
    }

    profile.has_stcw == Some(true) || profile.has_eng1 == Some(true)
}

fn is_yacht_related(candidate_type: Option<&str>) -> bool {
    matches!(
        candidate_type.map(str::trim),
        Some("yacht_crew") | Some("both")
    )
}
