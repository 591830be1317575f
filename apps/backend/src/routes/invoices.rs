//! Invoices. Reading and creating need a valid token, updating needs an
//! admin. There is no delete.

use actix_web::{guard, web, HttpResponse};
use serde::Deserialize;
use validator::Validate;

use super::{created, done, not_found};
use crate::entities::invoices;
use crate::error::AppError;
use crate::extractors::{ResourceId, ValidatedJson};
use crate::infra::db::{require_db, with_timeout};
use crate::middleware::{Authentication, RequireAdmin};
use crate::repos::invoices as invoices_repo;
use crate::repos::invoices::InvoiceFields;
use crate::state::app_state::AppState;

const LABEL: &str = "Invoice";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct InvoiceRequest {
    #[validate(length(min = 1, message = "is required"))]
    pub order_id: String,
    #[validate(length(min = 1, message = "is required"))]
    pub payment_method: String,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub total_amount: f64,
    #[validate(length(min = 1, message = "is required"))]
    pub payment_status: String,
}

impl From<InvoiceRequest> for InvoiceFields {
    fn from(req: InvoiceRequest) -> Self {
        Self {
            order_id: req.order_id,
            payment_method: req.payment_method,
            total_amount: req.total_amount,
            payment_status: req.payment_status,
        }
    }
}

async fn list_invoices(app_state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let invoices = with_timeout(invoices_repo::list(db)).await?;
    Ok(HttpResponse::Ok().json(invoices))
}

async fn get_invoice(
    id: ResourceId<invoices::Entity>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let invoice = with_timeout(invoices_repo::find_by_id(db, id.as_str()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(HttpResponse::Ok().json(invoice))
}

async fn create_invoice(
    req: ValidatedJson<InvoiceRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    let invoice = with_timeout(invoices_repo::insert(db, req.into_inner().into())).await?;
    created(LABEL, "invoice", &invoice.id, &invoice)
}

async fn update_invoice(
    id: ResourceId<invoices::Entity>,
    req: ValidatedJson<InvoiceRequest>,
    app_state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let db = require_db(&app_state)?;
    with_timeout(invoices_repo::update(db, id.as_str(), req.into_inner().into()))
        .await?
        .ok_or_else(|| not_found(LABEL))?;
    Ok(done(LABEL, "updated"))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/invoices")
            .wrap(Authentication)
            .service(
                web::resource("")
                    .route(web::get().to(list_invoices))
                    .route(web::post().to(create_invoice)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Get())
                    .route(web::get().to(get_invoice)),
            )
            .service(
                web::resource("/{id}")
                    .guard(guard::Put())
                    .route(web::put().to(update_invoice))
                    .wrap(RequireAdmin),
            ),
    );
}
