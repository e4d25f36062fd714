//! CORS Middleware Configuration

use std::time::Duration;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use crate::config::CorsSettings;

/// Methods the user API answers to
const ALLOWED_METHODS: [Method; 4] = [Method::GET, Method::POST, Method::PUT, Method::DELETE];

/// Create CORS layer from settings.
///
/// A `*` entry, or a list with no parseable origin, allows any origin.
pub fn create_cors_layer(settings: &CorsSettings) -> CorsLayer {
    let base = CorsLayer::new()
        .allow_methods(ALLOWED_METHODS)
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT]);

    let origins = parse_origins(&settings.allowed_origins);
    if origins.is_empty() || settings.allowed_origins.iter().any(|o| o == "*") {
        base.allow_origin(Any)
    } else {
        base.allow_origin(origins).max_age(Duration::from_secs(3600))
    }
}

fn parse_origins(origins: &[String]) -> Vec<HeaderValue> {
    origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| match o.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                tracing::warn!(origin = %o, "Ignoring unparseable CORS origin");
                None
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins_skips_wildcard_and_garbage() {
        let origins = parse_origins(&[
            "http://localhost:3000".to_string(),
            "*".to_string(),
            "bad\norigin".to_string(),
        ]);

        assert_eq!(origins, vec![HeaderValue::from_static("http://localhost:3000")]);
    }
}
