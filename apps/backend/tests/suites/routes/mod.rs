mod health;
mod invoices;
mod menus;
mod order_items;
mod orders;
mod tables;

use actix_http::Request;
use actix_web::body::BoxBody;
use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, Error};
use serde_json::Value;

/// Send `method uri` with an optional token and JSON body.
pub async fn send<S>(
    app: &S,
    method: actix_web::http::Method,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> ServiceResponse<BoxBody>
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let mut req = test::TestRequest::default().method(method).uri(uri);
    if let Some(token) = token {
        req = req.insert_header(("token", token));
    }
    if let Some(body) = body {
        req = req.set_json(body);
    }
    test::call_service(app, req.to_request()).await
}

/// POST a record and return its id, asserting the 201 envelope.
pub async fn create_record<S>(app: &S, uri: &str, token: &str, key: &str, body: Value) -> String
where
    S: Service<Request, Response = ServiceResponse<BoxBody>, Error = Error>,
{
    let resp = send(app, actix_web::http::Method::POST, uri, Some(token), Some(body)).await;
    let created = crate::common::json_with_status(resp, 201).await;
    assert!(
        created[key].is_object(),
        "create response should embed `{key}`: {created}"
    );
    let id = crate::common::created_id(&created);
    assert_eq!(created[key]["id"], id.as_str());
    id
}
