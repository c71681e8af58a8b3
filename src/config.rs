// src/config.rs
use std::env;

use axum::http::HeaderValue;
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Clone)]
pub struct Settings {
    pub bind_addr: String,
    pub admin_key: String,
    pub cors_origins: Vec<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let admin_key = env::var("ADMIN_API_KEY").unwrap_or_else(|_| "secret123".to_string());
        let cors_origins = env::var("CORS_ORIGINS")
            .map(|v| {
                v.split(',')
                    .map(|s| s.trim().to_string())
                    .filter(|s| !s.is_empty())
                    .collect()
            })
            .unwrap_or_default();

        Self {
            bind_addr,
            admin_key,
            cors_origins,
        }
    }

    /// Restrict CORS to the configured origins; with none configured, stay
    /// wide open for local development.
    pub fn cors_layer(&self) -> CorsLayer {
        if self.cors_origins.is_empty() {
            return CorsLayer::very_permissive();
        }
        let origins: Vec<HeaderValue> = self
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}
