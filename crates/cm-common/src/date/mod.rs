use chrono::{DateTime, Utc};

/// Whole days between a posting's creation and `now`, floored, never
/// negative. A missing timestamp counts as freshly posted.
pub fn days_since_posted(created_at: Option<DateTime<Utc>>, now: DateTime<Utc>) -> i64 {
    created_at
        .map(|created| (now - created).num_days().max(0))
        .unwrap_or(0)
}
