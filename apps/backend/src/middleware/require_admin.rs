//! Role gate for admin-only routes.
//!
//! Must sit inside `Authentication`: it only reads the claims that gate
//! stored. A request without claims here means the two were wired in the
//! wrong order, which is a server fault rather than a client one.

use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{forward_ready, Service, ServiceRequest, ServiceResponse, Transform};
use actix_web::{Error, HttpMessage, ResponseError};
use futures_util::future::{ready, LocalBoxFuture, Ready};

use crate::auth::claims::IdentityClaims;
use crate::error::AppError;
use crate::errors::ErrorCode;
use crate::logging::security;

pub struct RequireAdmin;

impl<S, B> Transform<S, ServiceRequest> for RequireAdmin
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    S::Future: 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type InitError = ();
    type Transform = RequireAdminMiddleware<S>;
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RequireAdminMiddleware {
            service: Rc::new(service),
        }))
    }
}

pub struct RequireAdminMiddleware<S> {
    service: Rc<S>,
}

impl<S, B> Service<ServiceRequest> for RequireAdminMiddleware<S>
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
            match check_admin(&req) {
                Ok(()) => {
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

fn check_admin(req: &ServiceRequest) -> Result<(), AppError> {
    let extensions = req.extensions();
    let Some(claims) = extensions.get::<IdentityClaims>() else {
        tracing::error!(path = %req.path(), "RequireAdmin reached without identity claims");
        return Err(AppError::internal(
            ErrorCode::Internal,
            "Internal server error",
        ));
    };

    if claims.user_type.is_admin() {
        Ok(())
    } else {
        security::admin_required(&claims.email, claims.user_type, req.path());
        Err(AppError::admin_required())
    }
}
