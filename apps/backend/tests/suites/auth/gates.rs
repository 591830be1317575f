use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use actix_web::http::StatusCode;
use actix_web::{test, web, HttpResponse};
use backend_test_support::error_body::assert_error_body;
use restaurant_backend::auth::claims::Role;
use restaurant_backend::middleware::{Authentication, RequireAdmin};
use restaurant_backend::{AppError, CurrentUser};

use crate::support::auth::{admin_token, expired_token, mint_token, user_token};
use crate::support::create_test_app;
use crate::support::state::{test_security, test_state};

/// Records whether the handler ran and echoes the caller.
async fn spy(
    called: web::Data<Arc<AtomicBool>>,
    caller: CurrentUser,
) -> Result<HttpResponse, AppError> {
    called.store(true, Ordering::SeqCst);
    Ok(HttpResponse::Ok().json(caller))
}

fn spy_routes(called: Arc<AtomicBool>) -> impl Fn(&mut web::ServiceConfig) + Send + Sync {
    move |cfg: &mut web::ServiceConfig| {
        cfg.app_data(web::Data::new(called.clone()))
            .service(
                web::resource("/spy/staff")
                    .route(web::get().to(spy))
                    .wrap(Authentication),
            )
            .service(
                web::resource("/spy/admin")
                    .route(web::get().to(spy))
                    .wrap(RequireAdmin)
                    .wrap(Authentication),
            )
            .service(
                web::resource("/spy/misconfigured")
                    .route(web::get().to(spy))
                    .wrap(RequireAdmin),
            );
    }
}

#[actix_web::test]
async fn missing_token_is_rejected_before_the_handler() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/spy/staff").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, StatusCode::UNAUTHORIZED, "No Authorization header provided").await;
    assert!(!called.load(Ordering::SeqCst), "handler must not run");
    Ok(())
}

#[actix_web::test]
async fn empty_token_counts_as_missing() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let req = test::TestRequest::get()
        .uri("/spy/staff")
        .insert_header(("token", ""))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, StatusCode::UNAUTHORIZED, "No Authorization header provided").await;
    assert!(!called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn bad_tokens_share_one_message() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let foreign = restaurant_backend::SecurityConfig::new(
        "some_other_service_secret_0123456789".as_bytes(),
    );
    let candidates = [
        "not-a-jwt".to_string(),
        format!("Bearer {}", user_token(&test_security())),
        user_token(&foreign),
        expired_token(&test_security()),
    ];

    for token in candidates {
        let req = test::TestRequest::get()
            .uri("/spy/staff")
            .insert_header(("token", token.as_str()))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_error_body(resp, StatusCode::UNAUTHORIZED, "Invalid or expired token").await;
    }

    assert!(!called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn valid_token_reaches_handler_with_claims() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let token = mint_token("host@example.test", Role::User, &test_security());
    let req = test::TestRequest::get()
        .uri("/spy/staff")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["email"], "host@example.test");
    assert_eq!(body["user_type"], "USER");
    assert!(called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn user_role_is_forbidden_on_admin_routes() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let token = user_token(&test_security());
    let req = test::TestRequest::get()
        .uri("/spy/admin")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, StatusCode::FORBIDDEN, "Admin access required").await;
    assert!(!called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn admin_role_passes_admin_gate() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let token = admin_token(&test_security());
    let req = test::TestRequest::get()
        .uri("/spy/admin")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["user_type"], "ADMIN");
    assert!(called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn admin_gate_missing_token_is_401_not_403() -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let req = test::TestRequest::get().uri("/spy/admin").to_request();
    let resp = test::call_service(&app, req).await;

    assert_error_body(resp, StatusCode::UNAUTHORIZED, "No Authorization header provided").await;
    assert!(!called.load(Ordering::SeqCst));
    Ok(())
}

#[actix_web::test]
async fn admin_gate_without_authentication_is_a_server_error(
) -> Result<(), Box<dyn std::error::Error>> {
    let called = Arc::new(AtomicBool::new(false));
    let app = create_test_app(test_state().await)
        .with_routes(spy_routes(called.clone()))
        .build()
        .await?;

    let token = admin_token(&test_security());
    let req = test::TestRequest::get()
        .uri("/spy/misconfigured")
        .insert_header(("token", token.as_str()))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);
    assert!(!called.load(Ordering::SeqCst));
    Ok(())
}
