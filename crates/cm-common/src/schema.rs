/// Candidate profile rows as the dashboard reads them. One row per platform
/// user; preference arrays are TEXT[] so the fetch path avoids join fanout.
pub const CANDIDATES_DDL: &str = r#"
CREATE TABLE crew.candidates (
    id BIGSERIAL PRIMARY KEY,
    user_id BIGINT UNIQUE,
    email VARCHAR(255) UNIQUE,

    first_name TEXT,
    last_name TEXT,
    phone TEXT,
    date_of_birth DATE,
    nationality TEXT,
    current_location TEXT,
    photo_url TEXT,

    primary_position TEXT,
    secondary_positions TEXT[] NOT NULL DEFAULT '{}',
    candidate_type VARCHAR(30),
    years_experience INTEGER,

    has_stcw BOOLEAN,
    stcw_expiry DATE,
    has_eng1 BOOLEAN,
    eng1_expiry DATE,

    industry_preference VARCHAR(20),
    yacht_position_primary TEXT,
    yacht_position_secondary TEXT,
    household_position_primary TEXT,
    household_position_secondary TEXT,
    preferred_regions TEXT[] NOT NULL DEFAULT '{}',
    preferred_contract_types TEXT[] NOT NULL DEFAULT '{}',
    desired_salary_min INTEGER,
    desired_salary_max INTEGER,

    verification_tier VARCHAR(20) NOT NULL DEFAULT 'unverified',

    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT chk_verification_tier CHECK (verification_tier IN (
        'unverified', 'basic', 'identity', 'references', 'verified', 'premium'
    ))
);

CREATE INDEX idx_candidates_user_id ON crew.candidates(user_id);
CREATE INDEX idx_candidates_email ON crew.candidates(email);
"#;

/// Uploaded document tags per candidate. The dashboard only needs the type
/// tag (CV presence); file contents live in object storage.
pub const CANDIDATE_DOCUMENTS_DDL: &str = r#"
CREATE TABLE crew.candidate_documents (
    id BIGSERIAL PRIMARY KEY,
    candidate_id BIGINT NOT NULL REFERENCES crew.candidates(id),
    doc_type VARCHAR(40) NOT NULL,
    storage_key TEXT,
    uploaded_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);

CREATE INDEX idx_candidate_documents_candidate ON crew.candidate_documents(candidate_id, doc_type);
"#;

/// Open job postings. The match pool query filters on status + visibility and
/// walks created_at descending, so those three carry the index.
pub const JOB_POSTINGS_DDL: &str = r#"
CREATE TABLE crew.job_postings (
    id BIGSERIAL PRIMARY KEY,
    title TEXT NOT NULL,
    vessel_name TEXT,
    vessel_size TEXT,
    primary_region TEXT,
    salary_min INTEGER,
    salary_max INTEGER,
    salary_currency VARCHAR(10),
    contract_type VARCHAR(30),
    is_urgent BOOLEAN NOT NULL DEFAULT false,
    status VARCHAR(20) NOT NULL DEFAULT 'open',
    is_public BOOLEAN NOT NULL DEFAULT true,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),

    CONSTRAINT chk_job_status CHECK (status IN ('draft', 'open', 'filled', 'closed'))
);

CREATE INDEX idx_job_postings_open_recent
  ON crew.job_postings(status, is_public, created_at DESC);
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn candidates_schema_covers_scoring_inputs() {
        for required in [
            "user_id",
            "email",
            "date_of_birth",
            "photo_url",
            "primary_position",
            "secondary_positions",
            "candidate_type",
            "has_stcw",
            "has_eng1",
            "industry_preference",
            "yacht_position_primary",
            "household_position_secondary",
            "preferred_regions",
            "preferred_contract_types",
            "desired_salary_min",
            "verification_tier",
            "chk_verification_tier",
            "idx_candidates_user_id",
            "idx_candidates_email",
        ] {
            assert!(CANDIDATES_DDL.contains(required), "missing: {required}");
        }
    }

    #[test]
    fn documents_schema_covers_type_lookup() {
        for required in [
            "candidate_id",
            "doc_type",
            "REFERENCES crew.candidates(id)",
            "idx_candidate_documents_candidate",
        ] {
            assert!(CANDIDATE_DOCUMENTS_DDL.contains(required), "missing: {required}");
        }
    }

    #[test]
    fn job_postings_schema_covers_pool_query() {
        for required in [
            "title TEXT NOT NULL",
            "vessel_name",
            "primary_region",
            "salary_max",
            "contract_type",
            "is_urgent",
            "is_public",
            "chk_job_status",
            "idx_job_postings_open_recent",
        ] {
            assert!(JOB_POSTINGS_DDL.contains(required), "missing: {required}");
        }
    }
}
