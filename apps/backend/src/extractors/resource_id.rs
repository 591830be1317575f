use std::fmt;
use std::future::{ready, Ready};
use std::marker::PhantomData;

use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest};
use ulid::Ulid;

use crate::error::AppError;

/// A stored resource addressed by `/{id}`.
pub trait Resource {
    /// Human name used in messages, e.g. `"order item"`.
    const LABEL: &'static str;
}

/// The `{id}` path segment, checked to be a well-formed ULID.
/// Anything else is a 400 `Invalid <label> ID`; existence is not checked here.
pub struct ResourceId<R> {
    id: String,
    _resource: PhantomData<R>,
}

// Manual impl: the marker type never needs to be `Debug` itself.
impl<R: Resource> fmt::Debug for ResourceId<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ResourceId").field(&R::LABEL).field(&self.id).finish()
    }
}

impl<R> ResourceId<R> {
    pub fn as_str(&self) -> &str {
        &self.id
    }

    pub fn into_inner(self) -> String {
        self.id
    }
}

pub fn parse_id<R: Resource>(raw: &str) -> Result<ResourceId<R>, AppError> {
    let ulid = Ulid::from_string(raw).map_err(|_| AppError::invalid_id(R::LABEL))?;
    Ok(ResourceId {
        id: ulid.to_string(),
        _resource: PhantomData,
    })
}

impl<R: Resource + 'static> FromRequest for ResourceId<R> {
    type Error = AppError;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _payload: &mut Payload) -> Self::Future {
        let raw = req.match_info().get("id").unwrap_or_default();
        ready(parse_id::<R>(raw))
    }
}
