//! Application state and factory
//!
//! This module builds the shared application state from settings and
//! provides the factory for creating the Actix-web application.

use std::sync::Arc;

use actix_web::{
    body::MessageBody,
    dev::{ServiceFactory, ServiceRequest, ServiceResponse},
    web, App,
};
use bd_core::{
    services::auth::DemoCredentials, AuthService, CatalogService, DomainError, TokenService,
    TokenServiceConfig,
};
use bd_shared::AppConfig;
use tracing_actix_web::TracingLogger;

use crate::handlers::error::{json_error_handler, not_found};
use crate::middleware::{auth::JwtAuth, cors::create_cors, security::SecurityHeaders};
use crate::routes::{data::get_data, docs::api_documentation, health::health_check, token::create_token};

/// Application state shared by every worker
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub token_service: Arc<TokenService>,
    pub auth_service: AuthService,
    pub catalog: CatalogService,
}

impl AppState {
    /// Wires the services from validated settings
    pub fn from_config(config: AppConfig) -> Result<Self, DomainError> {
        let token_config = TokenServiceConfig::try_from(&config.jwt)?;
        let token_service = Arc::new(TokenService::new(token_config));
        let auth_service = AuthService::new(
            Box::new(DemoCredentials::default()),
            Arc::clone(&token_service),
        );

        Ok(Self {
            config: Arc::new(config),
            token_service,
            auth_service,
            catalog: CatalogService::new(),
        })
    }
}

/// Create and configure the application with all dependencies
pub fn create_app(
    app_state: web::Data<AppState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let config = Arc::clone(&app_state.config);
    let cors = create_cors(config.environment, &config.cors);
    let security = SecurityHeaders::for_environment(config.environment);
    let jwt_auth = JwtAuth::new(Arc::clone(&app_state.token_service));

    App::new()
        // Add application state
        .app_data(app_state)
        .app_data(web::JsonConfig::default().error_handler(json_error_handler))

        // The last wrap is outermost: tracing sees every request, including CORS rejections
        .wrap(security)
        .wrap(cors)
        .wrap(TracingLogger::default())

        // Health check endpoint
        .route("/health", web::get().to(health_check))

        // API v1 routes
        .service(
            web::scope("/api/v1")
                .route("/token", web::post().to(create_token))
                .service(
                    web::resource("/data")
                        .wrap(jwt_auth)
                        .route(web::get().to(get_data)),
                )
                .route("", web::get().to(api_documentation))
                .route("/", web::get().to(api_documentation)),
        )

        // Default 404 handler
        .default_service(web::route().to(not_found))
}
