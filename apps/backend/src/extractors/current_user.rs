use std::future::{ready, Ready};

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpMessage, HttpRequest};
use serde::Serialize;

use crate::auth::claims::{IdentityClaims, Role};
use crate::error::AppError;

/// Identity of the caller, read from the claims the `Authentication`
/// middleware stored in request extensions. No database lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CurrentUser {
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub user_type: Role,
}

impl From<IdentityClaims> for CurrentUser {
    fn from(claims: IdentityClaims) -> Self {
        Self {
            email: claims.email,
            first_name: claims.first_name,
            last_name: claims.last_name,
            user_type: claims.user_type,
        }
    }
}

impl FromRequest for CurrentUser {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let claims = req.extensions().get::<IdentityClaims>().cloned();
        ready(claims.map(CurrentUser::from).ok_or_else(AppError::missing_token))
    }
}
