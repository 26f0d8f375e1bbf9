use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tokio_postgres::Row;
use tracing::instrument;

use crate::db::PgPool;
use crate::JobPosting;

#[derive(Debug, thiserror::Error)]
pub enum JobFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

fn map_job_row(row: &Row) -> JobPosting {
    JobPosting {
        id: Some(row.get("id")),
        title: row.get("title"),
        vessel_name: row.get("vessel_name"),
        vessel_size: row.get("vessel_size"),
        primary_region: row.get("primary_region"),
        salary_min: non_negative(row.get("salary_min")),
        salary_max: non_negative(row.get("salary_max")),
        salary_currency: row.get("salary_currency"),
        contract_type: row.get("contract_type"),
        is_urgent: row.get("is_urgent"),
        status: row.get("status"),
        is_public: row.get("is_public"),
        created_at: row.get("created_at"),
    }
}

fn non_negative(value: Option<i32>) -> Option<u32> {
    value.filter(|v| *v >= 0).map(|v| v as u32)
}

/// Most-recent-first pool of rankable postings. The ranker re-sorts by score,
/// so the pool just needs to be large enough that truncation happens after
/// ranking, not before.
#[instrument(skip(pool))]
pub async fn fetch_open_jobs(
    pool: &PgPool,
    pool_size: i64,
) -> Result<Vec<JobPosting>, JobFetchError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT \
                id, title, vessel_name, vessel_size, primary_region, \
                salary_min, salary_max, salary_currency, contract_type, \
                is_urgent, status, is_public, created_at \
            FROM crew.job_postings \
            WHERE status = 'open' AND is_public \
            ORDER BY created_at DESC \
            LIMIT $1",
            &[&pool_size],
        )
        .await?;

    Ok(rows.iter().map(map_job_row).collect())
}
