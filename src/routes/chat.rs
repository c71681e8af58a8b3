use axum::{Json, extract::State};

use crate::{
    message::{ChatRequest, ChatResponse},
    services::chatbot::generate_response,
    services::metrics_manager::MetricsData,
    state::SharedState,
};

// The responder is total: any message, including an empty one, gets a reply,
// so there is no error path here.
pub async fn chat_handler(
    State(state): State<SharedState>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let (topic, response) = generate_response(&payload.message);

    state.metrics.record_topic(topic.name()).await;
    tracing::debug!(topic = topic.name(), "classified chat message");

    Json(ChatResponse { response })
}

pub async fn get_metrics_handler(State(state): State<SharedState>) -> Json<MetricsData> {
    Json(state.metrics.get_metrics().await)
}
