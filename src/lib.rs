//! Finder Match - Item matching service for the Campus Finder lost-and-found platform
//!
//! This library provides the matching engine used by Campus Finder to pair
//! lost item reports with found item reports. It scores candidate pairs with
//! a weighted heuristic over category, location, date proximity, description
//! keywords and item attributes, and alerts both owners when a pair scores
//! above the good-match threshold.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{match_score, rank_candidates, MatchEngine, GOOD_MATCH_THRESHOLD};
pub use crate::models::{
    FindMatchesRequest, FindMatchesResponse, Item, ItemKind, MatchWeights, ScoredMatch,
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_exports() {
        // Verify that the library exports work correctly
        let weights = MatchWeights::default();
        let base = weights.category + weights.location + weights.date + weights.description;
        assert_eq!(base, 100.0);
        assert_eq!(GOOD_MATCH_THRESHOLD, 50);
    }
}
