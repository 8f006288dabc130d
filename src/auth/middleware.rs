use actix_web::{
    body::EitherBody,
    dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform},
    http::header,
    web, Error, HttpMessage,
};
use futures::future::{ready, LocalBoxFuture, Ready};
use log::warn;

use crate::auth::extractors::AuthenticatedUser;
use crate::auth::token::verify_token;
use crate::error::{AppError, AuthError};
use crate::services::users;
use crate::state::AppState;

/// Paths reachable without a bearer token.
const PUBLIC_PATHS: [&str; 4] = ["/", "/health", "/login", "/register"];

/// Guards every non-public path behind a bearer token.
///
/// On success the resolved [`AuthenticatedUser`] is stored in the request extensions.
/// On failure the request never reaches the handler: a missing header or a scheme other
/// than `Bearer` answers 403, an invalid or expired token or an unknown subject answers 401.
pub struct AuthMiddleware;

impl<S, B> Transform<S, ServiceRequest> for AuthMiddleware
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = AuthMiddlewareService<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthMiddlewareService { service }))
    }
}

pub struct AuthMiddlewareService<S> {
    service: S,
}

impl<S, B> Service<ServiceRequest> for AuthMiddlewareService<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error>,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        if PUBLIC_PATHS.contains(&req.path()) {
            let fut = self.service.call(req);
            return Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) });
        }

        match authenticate(&req) {
            Ok(user) => {
                req.extensions_mut().insert(user);
                let fut = self.service.call(req);
                Box::pin(async move { fut.await.map(ServiceResponse::map_into_left_body) })
            }
            Err(app_err) => {
                warn!("Rejected {} {}: {}", req.method(), req.path(), app_err);
                Box::pin(async move { Ok(req.error_response(app_err).map_into_right_body()) })
            }
        }
    }
}

/// Extracts the token from an `Authorization: Bearer <token>` header.
pub fn bearer_token(req: &ServiceRequest) -> Result<&str, AuthError> {
    let value = req
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .ok_or(AuthError::MissingAuthorization)?;

    match value.trim().split_once(' ') {
        Some((scheme, token)) if !token.trim().is_empty() => {
            if scheme == "Bearer" {
                Ok(token.trim())
            } else {
                Err(AuthError::InvalidAuthScheme)
            }
        }
        _ => Err(AuthError::MissingAuthorization),
    }
}

fn authenticate(req: &ServiceRequest) -> Result<AuthenticatedUser, AppError> {
    let state = req
        .app_data::<web::Data<AppState>>()
        .ok_or_else(|| AppError::InternalServerError("Application state not configured".into()))?;

    let token = bearer_token(req)?;
    let claims = verify_token(token, &state.auth)?;

    let store = state.store.read();
    let user = users::get_user_by_username(&store, &claims.sub)
        .map_err(|_| AuthError::UnknownUser)?;
    Ok(AuthenticatedUser(user.clone()))
}
