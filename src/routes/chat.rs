use axum::{
    extract::State,
    Json,
};
use crate::{
    config::ModelConfig,
    message::{ChatRequest, ChatResponse},
    reply::generate_reply,
};

// The handler is infallible: malformed bodies are rejected by the Json
// extractor before it runs, and `history` is accepted but unused.
pub async fn chat_handler(
    State(model): State<&'static ModelConfig>,
    Json(payload): Json<ChatRequest>,
) -> Json<ChatResponse> {
    let response = generate_reply(model, &payload.message);

    Json(ChatResponse { response })
}
