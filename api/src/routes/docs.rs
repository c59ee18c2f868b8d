use actix_web::HttpResponse;

/// API documentation endpoint
pub async fn api_documentation() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "title": "Bearer Demo API",
        "description": "REST API with bearer-token authentication",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "health": {
                "path": "/health",
                "method": "GET",
                "requires_auth": false,
                "responses": {
                    "200": "{status, version}"
                }
            },
            "token": {
                "path": "/api/v1/token",
                "method": "POST",
                "requires_auth": false,
                "request_body": {
                    "username": "string",
                    "password": "string"
                },
                "responses": {
                    "200": "{access_token, token_type: \"bearer\", expires_in}",
                    "401": "Invalid credentials",
                    "422": "Invalid request body"
                }
            },
            "data": {
                "path": "/api/v1/data",
                "method": "GET",
                "requires_auth": true,
                "responses": {
                    "200": "{items, total}",
                    "401": "Missing, invalid or expired token"
                }
            }
        }
    }))
}
