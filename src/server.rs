// src/server.rs
use anyhow::Result;
use tower_http::cors::CorsLayer;

use crate::config::ModelConfig;
use crate::routes::create_router;

/// Bind one model's listener and serve until the task ends. Each
/// instance owns its socket exclusively; no state is shared between
/// instances.
pub async fn serve(model: &'static ModelConfig) -> Result<()> {
    let cors = CorsLayer::very_permissive();

    let app = create_router().with_state(model).layer(cors);

    let listener =
        tokio::net::TcpListener::bind(format!("127.0.0.1:{}", model.port)).await?;

    tracing::info!("{} listening on http://127.0.0.1:{}", model.name, model.port);

    axum::serve(listener, app).await?;

    Ok(())
}
