use deadpool_postgres::PoolError;
use tokio_postgres::Error as PgError;
use tracing::instrument;

use crate::db::PgPool;
use crate::Document;

#[derive(Debug, thiserror::Error)]
pub enum DocumentFetchError {
    #[error("failed to get postgres connection: {0}")]
    Pool(#[from] PoolError),
    #[error("postgres error: {0}")]
    Postgres(#[from] PgError),
}

/// Type tags of a candidate's uploads. The completeness calculator only needs
/// the tags, not the files.
#[instrument(skip(pool))]
pub async fn fetch_document_tags(
    pool: &PgPool,
    candidate_id: i64,
) -> Result<Vec<Document>, DocumentFetchError> {
    let client = pool.get().await?;

    let rows = client
        .query(
            "SELECT doc_type FROM crew.candidate_documents WHERE candidate_id = $1",
            &[&candidate_id],
        )
        .await?;

    Ok(rows
        .iter()
        .map(|row| Document {
            doc_type: row.get("doc_type"),
        })
        .collect())
}
