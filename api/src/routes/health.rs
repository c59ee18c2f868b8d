use actix_web::HttpResponse;

use crate::dto::HealthResponse;

/// Handler for GET /health
///
/// Always 200; the Authorization header is ignored.
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(HealthResponse::healthy())
}
