// src/routes/mod.rs
pub mod chat;

use crate::error::AppError;
use crate::state::SharedState;
use axum::{
    Router,
    extract::{Request, State},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
};
use chat::{chat_handler, get_metrics_handler};
use tower_http::trace::TraceLayer;

pub fn create_router(state: SharedState) -> Router {
    let admin_routes = Router::new()
        .route("/metrics", get(get_metrics_handler))
        .layer(middleware::from_fn_with_state(state.clone(), auth_middleware));

    Router::new()
        .route("/api/v1/chatbot/chat", post(chat_handler))
        .nest("/admin", admin_routes)
        .route("/health", get(|| async { "OK" }))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn auth_middleware(
    State(state): State<SharedState>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // API Key check.
    match req.headers().get("x-admin-key") {
        Some(val) if val == state.settings.admin_key.as_str() => Ok(next.run(req).await),
        _ => Err(AppError::Unauthorized),
    }
}
