pub mod api;
pub mod completeness;
pub mod date;
pub mod db;
pub mod logging;
pub mod matching;
pub mod normalize;
pub mod schema;
pub mod verification;

use chrono::{DateTime, NaiveDate, Utc};

// Commonly used data models for the scoring and ranking functions.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CandidateProfile {
    pub id: Option<i64>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub date_of_birth: Option<NaiveDate>,
    pub nationality: Option<String>,
    pub current_location: Option<String>,
    pub photo_url: Option<String>,
    pub primary_position: Option<String>,
    pub secondary_positions: Vec<String>,
    pub candidate_type: Option<String>,
    pub years_experience: Option<i32>,
    pub has_stcw: Option<bool>,
    pub stcw_expiry: Option<NaiveDate>,
    pub has_eng1: Option<bool>,
    pub eng1_expiry: Option<NaiveDate>,
    pub industry_preference: Option<String>,
    pub yacht_position_primary: Option<String>,
    pub yacht_position_secondary: Option<String>,
    pub household_position_primary: Option<String>,
    pub household_position_secondary: Option<String>,
    pub preferred_regions: Vec<String>,
    pub preferred_contract_types: Vec<String>,
    pub desired_salary_min: Option<u32>,
    pub desired_salary_max: Option<u32>,
    pub verification_tier: Option<String>,
    pub documents: Vec<Document>,
}

/// Uploaded document attached to a candidate. Only the type tag matters to the
/// scoring core (CV presence detection).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub doc_type: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct JobPosting {
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
    pub status: Option<String>,
    pub is_public: bool,
    pub created_at: Option<DateTime<Utc>>,
}

/// Presence test shared by completeness and matching: empty and
/// whitespace-only strings count the same as an absent column.
pub fn text_present(value: Option<&str>) -> bool {
    value.map(str::trim).is_some_and(|v| !v.is_empty())
}
