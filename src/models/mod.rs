// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Category, Item, ItemKind, ItemQuery, ItemStatus, MatchWeights, ScoredMatch};
pub use requests::{FindMatchesRequest, ItemMatchesQuery};
pub use responses::{ErrorResponse, FindMatchesResponse, HealthResponse, ItemMatchesResponse};
