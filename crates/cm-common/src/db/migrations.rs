use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::info;

use crate::db::PgPool;
use crate::schema::{CANDIDATES_DDL, CANDIDATE_DOCUMENTS_DDL, JOB_POSTINGS_DDL};

#[derive(Debug, thiserror::Error)]
pub enum MigrationError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Tables in dependency order; candidate_documents references candidates.
const TABLES: [(&str, &str); 3] = [
    ("crew.candidates", CANDIDATES_DDL),
    ("crew.candidate_documents", CANDIDATE_DOCUMENTS_DDL),
    ("crew.job_postings", JOB_POSTINGS_DDL),
];

/// Apply the schema for any table that does not exist yet. Existing tables
/// are left untouched; column evolution is handled out of band.
pub async fn run_migrations(pool: &PgPool) -> Result<(), MigrationError> {
    let client = pool.get().await?;

    client
        .batch_execute("CREATE SCHEMA IF NOT EXISTS crew")
        .await?;

    for (table, ddl) in TABLES {
        let row = client
            .query_one("SELECT to_regclass($1)::text", &[&table])
            .await?;
        let exists: Option<String> = row.get(0);

        if exists.is_none() {
            info!(table, "creating missing table");
            client.batch_execute(ddl).await?;
        }
    }

    Ok(())
}
