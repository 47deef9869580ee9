use serde::{Deserialize, Serialize};

use crate::models::domain::{ItemKind, ScoredMatch};

/// Response for the find-matches endpoint: good matches only.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FindMatchesResponse {
    pub matches: Vec<ScoredMatch>,
    pub total_matches: usize,
}

/// Response for the existing-item lookup: every candidate, annotated.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemMatchesResponse {
    pub item_id: String,
    pub item_type: ItemKind,
    pub matches: Vec<ScoredMatch>,
    pub total_results: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
