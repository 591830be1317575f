use actix_web::{web, HttpResponse};
use sea_orm::{ConnectionTrait, Statement};
use serde::Serialize;
use tracing::warn;

use crate::error::AppError;
use crate::infra::db::{require_db, with_timeout};
use crate::logging::pii::Redacted;
use crate::state::app_state::AppState;

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    db: &'static str,
}

/// Liveness plus a `SELECT 1` against the pool. Always 200; a broken
/// database shows up as `"db": "error"`.
async fn health(app_state: web::Data<AppState>) -> HttpResponse {
    let db_ok = match require_db(&app_state) {
        Ok(db) => {
            let probe = with_timeout(async {
                db.query_one(Statement::from_string(
                    db.get_database_backend(),
                    "SELECT 1 AS health_check".to_string(),
                ))
                .await
                .map_err(AppError::from)
            })
            .await;

            match probe {
                Ok(_) => true,
                Err(e) => {
                    warn!(error = %Redacted(&e.to_string()), "Health check query failed");
                    false
                }
            }
        }
        Err(_) => false,
    };

    HttpResponse::Ok().json(HealthResponse {
        status: "ok",
        message: "Restaurant API is running",
        db: if db_ok { "ok" } else { "error" },
    })
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/health").route(web::get().to(health)));
}
