use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::CandidateProfile;

#[derive(Debug, thiserror::Error)]
pub enum CandidateFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

const CANDIDATE_COLUMNS: &str = "\
    id, first_name, last_name, email, phone, date_of_birth, nationality,\
    current_location, photo_url, primary_position, secondary_positions,\
    candidate_type, years_experience, has_stcw, stcw_expiry, has_eng1,\
    eng1_expiry, industry_preference, yacht_position_primary,\
    yacht_position_secondary, household_position_primary,\
    household_position_secondary, preferred_regions, preferred_contract_types,\
    desired_salary_min, desired_salary_max, verification_tier";

fn map_candidate_row(row: &Row) -> CandidateProfile {
    CandidateProfile {
        id: Some(row.get("id")),
        first_name: row.get("first_name"),
        last_name: row.get("last_name"),
        email: row.get("email"),
        phone: row.get("phone"),
        date_of_birth: row.get("date_of_birth"),
        nationality: row.get("nationality"),
        current_location: row.get("current_location"),
        photo_url: row.get("photo_url"),
        primary_position: row.get("primary_position"),
        secondary_positions: row
            .get::<_, Option<Vec<String>>>("secondary_positions")
            .unwrap_or_default(),
        candidate_type: row.get("candidate_type"),
        years_experience: row.get("years_experience"),
        has_stcw: row.get("has_stcw"),
        stcw_expiry: row.get("stcw_expiry"),
        has_eng1: row.get("has_eng1"),
        eng1_expiry: row.get("eng1_expiry"),
        industry_preference: row.get("industry_preference"),
        yacht_position_primary: row.get("yacht_position_primary"),
        yacht_position_secondary: row.get("yacht_position_secondary"),
        household_position_primary: row.get("household_position_primary"),
        household_position_secondary: row.get("household_position_secondary"),
        preferred_regions: row
            .get::<_, Option<Vec<String>>>("preferred_regions")
            .unwrap_or_default(),
        preferred_contract_types: row
            .get::<_, Option<Vec<String>>>("preferred_contract_types")
            .unwrap_or_default(),
        desired_salary_min: non_negative(row.get("desired_salary_min")),
        desired_salary_max: non_negative(row.get("desired_salary_max")),
        verification_tier: row.get("verification_tier"),
        documents: Vec::new(),
    }
}

fn non_negative(value: Option<i32>) -> Option<u32> {
    value.filter(|v| *v >= 0).map(|v| v as u32)
}

#[instrument(skip(pool))]
pub async fn fetch_candidate_by_user_id(
    pool: &PgPool,
    user_id: i64,
) -> Result<Option<CandidateProfile>, CandidateFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {CANDIDATE_COLUMNS} FROM crew.candidates WHERE user_id = $1");
    let row = client.query_opt(&query, &[&user_id]).await?;

    Ok(row.as_ref().map(map_candidate_row))
}

#[instrument(skip(pool))]
pub async fn fetch_candidate_by_email(
    pool: &PgPool,
    email: &str,
) -> Result<Option<CandidateProfile>, CandidateFetchError> {
    let client = pool.get().await?;

    let query = format!("SELECT {CANDIDATE_COLUMNS} FROM crew.candidates WHERE email = $1");
    let row = client.query_opt(&query, &[&email]).await?;

    Ok(row.as_ref().map(map_candidate_row))
}

/// Resolve a candidate by user id, falling back to email when the foreign key
/// has not been linked yet (accounts created before profile import).
#[instrument(skip(pool))]
pub async fn resolve_candidate(
    pool: &PgPool,
    user_id: i64,
    email: Option<&str>,
) -> Result<Option<CandidateProfile>, CandidateFetchError> {
    if let Some(candidate) = fetch_candidate_by_user_id(pool, user_id).await? {
        return Ok(Some(candidate));
    }

    match email {
        Some(email) => fetch_candidate_by_email(pool, email).await,
        None => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn column_list_matches_schema() {
        for column in [
            "date_of_birth",
            "secondary_positions",
            "preferred_regions",
            "preferred_contract_types",
            "verification_tier",
        ] {
            assert!(CANDIDATE_COLUMNS.contains(column), "missing: {column}");
            assert!(crate::schema::CANDIDATES_DDL.contains(column));
        }
    }

    #[test]
    fn negative_salaries_are_dropped() {
        assert_eq!(non_negative(Some(-1)), None);
        assert_eq!(non_negative(Some(0)), Some(0));
        assert_eq!(non_negative(Some(4200)), Some(4200));
        assert_eq!(non_negative(None), None);
    }
}
