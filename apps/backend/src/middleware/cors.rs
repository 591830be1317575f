use std::env;

use actix_cors::Cors;
use actix_web::http::header;

/// Origins allowed when `CORS_ALLOWED_ORIGINS` is unset or holds nothing usable.
const DEV_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://127.0.0.1:3000"];

/// Parse a comma-separated origin list, keeping only `http(s)://` entries.
pub fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty() && *s != "null")
        .filter(|s| s.starts_with("http://") || s.starts_with("https://"))
        .map(|s| s.to_string())
        .collect()
}

/// CORS for the API. Clients send credentials in the custom `token` header,
/// so it has to be allowed explicitly.
pub fn cors_middleware() -> Cors {
    let configured = parse_origins(&env::var("CORS_ALLOWED_ORIGINS").unwrap_or_default());
    let origins: Vec<String> = if configured.is_empty() {
        DEV_ORIGINS.iter().map(|s| s.to_string()).collect()
    } else {
        configured
    };

    let mut cors = Cors::default()
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::HeaderName::from_static("token"),
            header::CONTENT_TYPE,
            header::ACCEPT,
        ])
        .expose_headers(vec![
            header::HeaderName::from_static("x-trace-id"),
            header::HeaderName::from_static("x-request-id"),
        ])
        .max_age(3600);

    for origin in origins {
        cors = cors.allowed_origin(&origin);
    }

    cors
}
