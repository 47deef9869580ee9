// Core algorithm exports
pub mod engine;
pub mod keywords;
pub mod scoring;

pub use engine::{rank_candidates, MatchEngine};
pub use keywords::keywords;
pub use scoring::{match_score, GOOD_MATCH_THRESHOLD};
