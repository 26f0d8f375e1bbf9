pub mod positions;
pub mod ranker;
pub mod scoring;
pub mod weights;

pub use positions::{resolve_industry_preference, sought_positions, IndustryPreference};
pub use ranker::{rank_jobs, MatchedJob};
pub use scoring::{score_job, FactorScore, MatchScore, MatchType};
pub use weights::{MatchWeights, MATCH_WEIGHTS};
