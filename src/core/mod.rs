// Core algorithm exports
pub mod criteria;
pub mod filters;
pub mod ranker;
pub mod scoring;

pub use criteria::parse_criteria;
pub use filters::{filter_pool, is_eligible};
pub use ranker::{RankOutcome, Ranker, DEFAULT_POOL_CAP};
pub use scoring::score_candidate;
