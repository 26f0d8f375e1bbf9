pub mod candidates;
pub mod documents;
pub mod jobs;
pub mod migrations;
pub mod pool;

// Keep re-exports unique so downstream crates see a single symbol per helper.
pub use candidates::{
    fetch_candidate_by_email, fetch_candidate_by_user_id, resolve_candidate, CandidateFetchError,
};
pub use documents::{fetch_document_tags, DocumentFetchError};
pub use jobs::{fetch_open_jobs, JobFetchError};
pub use migrations::{run_migrations, MigrationError};
pub use pool::{create_pool_from_url, create_pool_from_url_checked, DbPoolError, PgPool};
