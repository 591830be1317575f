use actix_web::{web, App, HttpServer};
use restaurant_backend::auth::password::PasswordHashing;
use restaurant_backend::config::db::DbKind;
use restaurant_backend::config::server::ServerConfig;
use restaurant_backend::infra::state::build_state;
use restaurant_backend::middleware::{
    cors_middleware, RequestTrace, SecurityHeaders, StructuredLogger, TraceSpan,
};
use restaurant_backend::routes;
use restaurant_backend::state::security_config::SecurityConfig;

mod telemetry;

/// Print a startup failure and exit. Configuration errors are fatal.
fn fatal(what: &str, err: impl std::fmt::Display) -> ! {
    eprintln!("❌ {what}: {err}");
    std::process::exit(1);
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    telemetry::init_tracing();

    // Environment variables must be set by the runtime environment
    // (docker env_file, or `set -a; . ./.env; set +a` locally).
    let server = ServerConfig::from_env().unwrap_or_else(|e| fatal("Invalid server config", e));
    let security_config =
        SecurityConfig::from_env().unwrap_or_else(|e| fatal("Invalid token config", e));
    let passwords =
        PasswordHashing::from_env().unwrap_or_else(|e| fatal("Invalid password hashing config", e));
    let db_kind = DbKind::from_env().unwrap_or_else(|e| fatal("Invalid database config", e));

    println!(
        "🚀 Starting Restaurant API on http://{}:{}",
        server.host, server.port
    );

    let app_state = match build_state()
        .with_db(db_kind)
        .with_security(security_config)
        .with_passwords(passwords)
        .build()
        .await
    {
        Ok(state) => state,
        Err(e) => fatal("Failed to build application state", e),
    };

    println!("✅ Database connected");

    let data = web::Data::new(app_state);

    HttpServer::new(move || {
        App::new()
            .wrap(cors_middleware())
            .wrap(SecurityHeaders)
            .wrap(StructuredLogger)
            .wrap(TraceSpan)
            .wrap(RequestTrace)
            .app_data(data.clone())
            .configure(routes::configure)
    })
    .bind((server.host.as_str(), server.port))?
    .run()
    .await
}
