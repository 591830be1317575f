//! Authentication gate.
//!
//! Reads the raw token from the `token` header (no `Bearer` prefix),
//! validates it and stores the resulting [`IdentityClaims`] in request
//! extensions. Requests without a valid token are answered with 401 here and
//! never reach the wrapped service.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{web, Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::IdentityClaims;
use crate::auth::jwt::{validate_token, TokenError};
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;
use crate::state::app_state::AppState;

/// Name of the request header carrying the access token.
pub const TOKEN_HEADER: &str = "token";

pub struct Authentication;

impl<S, B> Transform<S, ServiceRequest> for Authentication
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = AuthenticationMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(AuthenticationMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct AuthenticationMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for AuthenticationMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = LocalBoxFuture<'static, Result<Self::Response, Self::Error>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = Rc::clone(&self.service);

        Box::pin(async move {
            match authenticate(&req) {
                Ok(claims) => {
                    req.extensions_mut().insert(claims);
                    let res = service.call(req).await?;
                    Ok(res.map_into_left_body())
                }
                Err(err) => {
                    let response = err.error_response();
                    Ok(req.into_response(response).map_into_right_body())
                }
            }
        })
    }
}

fn authenticate(req: &ServiceRequest) -> Result<IdentityClaims, AppError> {
    let token = match extract_token(req) {
        Ok(Some(token)) => token,
        Ok(None) => {
            security::token_rejected(ErrorCode::MissingToken, req.path());
            return Err(AppError::missing_token());
        }
        Err(e) => {
            security::token_rejected(e.code(), req.path());
            return Err(e.into());
        }
    };

    let state = req.app_data::<web::Data<AppState>>().ok_or_else(|| {
        tracing::error!("AppState not registered; cannot validate tokens");
        AppError::internal(ErrorCode::Internal, "Internal server error")
    })?;

    validate_token(token, &state.security).map_err(|e| {
        security::token_rejected(e.code(), req.path());
        AppError::from(e)
    })
}

/// `Ok(None)` when the header is absent or empty.
fn extract_token(req: &ServiceRequest) -> Result<Option<&str>, TokenError> {
    let Some(value) = req.headers().get(TOKEN_HEADER) else {
        return Ok(None);
    };
    let token = value.to_str().map_err(|_| TokenError::Malformed)?.trim();
    Ok((!token.is_empty()).then_some(token))
}
