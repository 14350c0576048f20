use axum::http::request::Parts;
use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{AllowOrigin, CorsLayer};

use crate::config::AppConfig;

/// Build the CORS layer. Outside production everything is allowed; in
/// production only localhost and the configured origins pass.
pub fn cors_layer(config: &AppConfig) -> CorsLayer {
    let allowed: Vec<String> = config
        .cors_origins
        .iter()
        .map(|origin| normalize(origin))
        .collect();
    let production = config.production;

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(
            move |origin: &HeaderValue, _parts: &Parts| {
                let origin = origin.to_str().unwrap_or_default();
                let permitted = origin_allowed(origin, &allowed, production);
                if !permitted {
                    tracing::warn!("CORS blocked origin {origin}");
                }
                permitted
            },
        ))
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::AUTHORIZATION, header::CONTENT_TYPE])
        .allow_credentials(true)
}

/// Decide whether an origin may make cross-origin requests. Localhost is
/// always allowed; dev tunnels only count outside production.
pub fn origin_allowed(origin: &str, allowed: &[String], production: bool) -> bool {
    if !production
        || origin.is_empty()
        || origin.contains("localhost")
        || origin.contains("127.0.0.1")
    {
        return true;
    }
    let normalized = normalize(origin);
    allowed.iter().any(|candidate| *candidate == normalized)
        || is_dev_tunnel_origin(origin, production)
}

fn normalize(origin: &str) -> String {
    origin.trim_end_matches('/').to_string()
}

fn is_dev_tunnel_origin(origin: &str, production: bool) -> bool {
    if production {
        return false;
    }
    origin
        .split("://")
        .nth(1)
        .and_then(|rest| rest.split([':', '/']).next())
        .is_some_and(|host| host.ends_with(".devtunnels.ms"))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn allowed() -> Vec<String> {
        vec!["https://mixmasters.club".to_string()]
    }

    #[test]
    fn everything_passes_outside_production() {
        assert!(origin_allowed("https://evil.example", &allowed(), false));
        assert!(origin_allowed("https://foo.devtunnels.ms", &allowed(), false));
    }

    #[test]
    fn localhost_always_passes() {
        assert!(origin_allowed("http://localhost:5173", &allowed(), true));
        assert!(origin_allowed("http://127.0.0.1:4000", &allowed(), true));
    }

    #[test]
    fn production_requires_configured_origin() {
        assert!(origin_allowed("https://mixmasters.club", &allowed(), true));
        assert!(origin_allowed("https://mixmasters.club/", &allowed(), true));
        assert!(!origin_allowed("https://evil.example", &allowed(), true));
        assert!(!origin_allowed("https://foo.devtunnels.ms", &allowed(), true));
    }

    #[test]
    fn absent_origin_passes() {
        assert!(origin_allowed("", &allowed(), true));
    }
}
