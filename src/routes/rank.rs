use crate::models::{ErrorResponse, HealthResponse, RankRequest, RankResponse};
use crate::services::{ApplicationsClient, RankError, RankingService};
use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub ranking: Arc<RankingService>,
    pub applications: Arc<ApplicationsClient>,
}

/// Configure all ranking-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/rank", web::post().to(rank_candidates));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.applications.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Rank candidates endpoint
///
/// POST /api/v1/rank
///
/// Request body:
/// ```json
/// {
///   "castingId": "string",
///   "callerId": "string",
///   "limit": 20
/// }
/// ```
///
/// `callerId` is the authenticated Pro's user id as resolved by the session
/// layer; ownership of the casting is re-verified before any ranking work.
async fn rank_candidates(
    state: web::Data<AppState>,
    req: web::Json<RankRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for rank request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    let request_id = uuid::Uuid::new_v4();
    // Absent limit means no truncation beyond the pool cap; explicit limits
    // above the cap are clamped inside the ranker
    let limit = req
        .limit
        .map(|l| l as usize)
        .unwrap_or_else(|| state.ranking.pool_cap());

    tracing::info!(
        "[{}] Ranking casting {} for caller {}, limit {}",
        request_id,
        req.casting_id,
        req.caller_id,
        limit
    );

    match state.ranking.rank(&req.casting_id, &req.caller_id, limit).await {
        Ok((casting, outcome)) => {
            tracing::info!(
                "[{}] Returning {} suggestions for casting {}",
                request_id,
                outcome.suggestions.len(),
                req.casting_id
            );

            HttpResponse::Ok().json(RankResponse {
                casting,
                suggestions: outcome.suggestions,
                total_found: outcome.total_found,
            })
        }
        Err(e) => rank_error_response(request_id, e),
    }
}

/// Translate a ranking failure into its HTTP shape.
///
/// Store failures are 503 so callers know a retry may succeed; the engine
/// itself never retries.
fn rank_error_response(request_id: uuid::Uuid, error: RankError) -> HttpResponse {
    match error {
        RankError::CastingNotFound(_) => {
            tracing::info!("[{}] {}", request_id, error);
            HttpResponse::NotFound().json(ErrorResponse {
                error: "casting_not_found".to_string(),
                message: error.to_string(),
                status_code: 404,
            })
        }
        RankError::Forbidden { .. } => {
            tracing::warn!("[{}] {}", request_id, error);
            HttpResponse::Forbidden().json(ErrorResponse {
                error: "forbidden".to_string(),
                message: "This casting does not belong to the caller".to_string(),
                status_code: 403,
            })
        }
        RankError::Directory(_) | RankError::Applications(_) => {
            tracing::error!("[{}] Store read failed: {}", request_id, error);
            HttpResponse::ServiceUnavailable().json(ErrorResponse {
                error: "store_unavailable".to_string(),
                message: error.to_string(),
                status_code: 503,
            })
        }
    }
}
