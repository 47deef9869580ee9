use actix_web::{web, HttpResponse, Responder};
use validator::Validate;

use crate::core::MatchEngine;
use crate::models::{
    ErrorResponse, FindMatchesRequest, FindMatchesResponse, HealthResponse, ItemMatchesQuery,
    ItemMatchesResponse,
};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub engine: MatchEngine,
}

/// Configure all match-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/matches/find", web::post().to(find_matches))
        .route("/matches/item/{item_id}", web::get().to(item_matches));
}

/// Health check endpoint
async fn health_check() -> impl Responder {
    HttpResponse::Ok().json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Find matches endpoint
///
/// POST /api/v1/matches/find
///
/// Request body:
/// ```json
/// {
///   "item": {
///     "itemId": "string",
///     "userId": "string",
///     "itemName": "string",
///     "category": "Electronics",
///     "status": "active"
///   },
///   "itemType": "lost"
/// }
/// ```
///
/// Called by the platform right after a new report is stored. Returns good
/// matches only; both owners are alerted for each one as a side effect.
async fn find_matches(
    state: web::Data<AppState>,
    req: web::Json<FindMatchesRequest>,
) -> impl Responder {
    // Validate request
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for find_matches request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    tracing::info!("Finding matches for {} item: {}", req.item_type, req.item.id);

    let matches = state.engine.find_matches(&req.item, req.item_type).await;

    let response = FindMatchesResponse {
        total_matches: matches.len(),
        matches,
    };

    HttpResponse::Ok().json(response)
}

/// Matches for an existing item
///
/// GET /api/v1/matches/item/{item_id}?itemType=lost
///
/// Returns the full ranked candidate list for a stored item, every entry
/// annotated with its score and good-match flag. Sends no notifications,
/// so it is safe for the item detail page to poll.
async fn item_matches(
    state: web::Data<AppState>,
    path: web::Path<String>,
    query: web::Query<ItemMatchesQuery>,
) -> impl Responder {
    let item_id = path.into_inner();
    let item_type = query.item_type;

    tracing::info!("Listing matches for {} item: {}", item_type, item_id);

    let matches = state.engine.matches_for_item(&item_id, item_type).await;

    HttpResponse::Ok().json(ItemMatchesResponse {
        item_id,
        item_type,
        total_results: matches.len(),
        matches,
    })
}
