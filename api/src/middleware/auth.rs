//! JWT authentication middleware for protecting API endpoints.
//!
//! This middleware extracts the bearer token from the Authorization header,
//! verifies it with the core `TokenService`, and injects an [`AuthContext`]
//! into the request. Every failure is answered with the same 401; the
//! specific reason is only logged.

use actix_web::{
    body::EitherBody,
    dev::{Service, ServiceRequest, ServiceResponse, Transform},
    http::{header, StatusCode},
    Error, FromRequest, HttpMessage, HttpRequest, HttpResponse, ResponseError,
};
use bd_core::{Claims, TokenService};
use bd_shared::{error_codes, ErrorResponse};
use futures_util::future::LocalBoxFuture;
use std::{
    future::{ready, Ready},
    rc::Rc,
    sync::Arc,
    task::{Context, Poll},
};

/// Authenticated identity injected into requests
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    /// Subject claim of the verified token
    pub subject: String,
}

impl AuthContext {
    pub fn from_claims(claims: Claims) -> Self {
        Self {
            subject: claims.sub,
        }
    }
}

/// Rejections produced by the auth gate
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AuthRejection {
    #[error("Not authenticated")]
    MissingCredentials,

    #[error("Invalid or expired token")]
    InvalidToken,
}

impl ResponseError for AuthRejection {
    fn status_code(&self) -> StatusCode {
        StatusCode::UNAUTHORIZED
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::Unauthorized()
            .insert_header((header::WWW_AUTHENTICATE, "Bearer"))
            .json(ErrorResponse::new(error_codes::UNAUTHORIZED, self.to_string()))
    }
}

/// JWT authentication middleware factory
#[derive(Clone)]
pub struct JwtAuth {
    token_service: Arc<TokenService>,
}

impl JwtAuth {
    /// Creates a new JWT authentication middleware backed by `token_service`
    pub fn new(token_service: Arc<TokenService>) -> Self {
        Self { token_service }
    }
}

impl<S, B> Transform<S, ServiceRequest> for JwtAuth
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = JwtAuthMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(JwtAuthMiddleware {
            service: Rc::new(service),
            token_service: Arc::clone(&self.token_service),
        }))
    }
}

/// JWT authentication middleware service
pub struct JwtAuthMiddleware<S> {
    service: Rc<S>,
    token_service: Arc<TokenService>,
}

impl<S, B> Service<ServiceRequest> for JwtAuthMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    fn poll_ready(&self, ctx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        self.service.poll_ready(ctx)
    }

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        let auth_context = match authenticate(&req, &self.token_service) {
            Ok(context) => context,
            Err(rejection) => {
                let response = req.error_response(rejection).map_into_right_body();
                return Box::pin(async move { Ok(response) });
            }
        };

        // Inject auth context into request extensions
        req.extensions_mut().insert(auth_context);

        Box::pin(async move {
            let response = service.call(req).await?;
            Ok(response.map_into_left_body())
        })
    }
}

/// Runs the gate for one request
fn authenticate(
    req: &ServiceRequest,
    token_service: &TokenService,
) -> Result<AuthContext, AuthRejection> {
    let token = extract_bearer_token(req).ok_or_else(|| {
        tracing::debug!(path = %req.path(), "Rejected request without bearer credentials");
        AuthRejection::MissingCredentials
    })?;

    match token_service.verify(&token) {
        Ok(claims) => {
            tracing::debug!(subject = %claims.sub, path = %req.path(), "Authenticated request");
            Ok(AuthContext::from_claims(claims))
        }
        Err(e) => {
            tracing::debug!(kind = e.kind(), error = %e, path = %req.path(), "Rejected bearer token");
            Err(AuthRejection::InvalidToken)
        }
    }
}

/// Extracts the bearer token from the Authorization header
///
/// The scheme is matched case-insensitively; an empty token counts as absent.
fn extract_bearer_token(req: &ServiceRequest) -> Option<String> {
    let value = req.headers().get(header::AUTHORIZATION)?.to_str().ok()?;
    let (scheme, token) = value.trim().split_once(' ')?;
    let token = token.trim();

    if scheme.eq_ignore_ascii_case("bearer") && !token.is_empty() {
        Some(token.to_string())
    } else {
        None
    }
}

/// Extractor for required authentication
impl FromRequest for AuthContext {
    type Error = Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut actix_web::dev::Payload) -> Self::Future {
        let result = req
            .extensions()
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| AuthRejection::MissingCredentials.into());

        ready(result)
    }
}
