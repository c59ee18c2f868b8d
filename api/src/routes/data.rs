use actix_web::{web, HttpResponse};

use crate::app::AppState;
use crate::middleware::auth::AuthContext;

/// Handler for GET /api/v1/data
///
/// Requires `Authorization: Bearer <token>`; the gate rejects anything else
/// with 401 before this handler runs.
///
/// ## Success (200 OK)
/// ```json
/// {
///     "items": [{"id": 1, "name": "Widget A", "description": "...", "category": "widgets"}],
///     "total": 3
/// }
/// ```
pub async fn get_data(state: web::Data<AppState>, auth: AuthContext) -> HttpResponse {
    tracing::debug!(subject = %auth.subject, "Serving data listing");
    HttpResponse::Ok().json(state.catalog.list())
}
