use maxy_backend::config::MODELS;
use maxy_backend::server;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    println!("🚀 Starting all Maxy models...");

    // One task per model. A listener that dies is logged and not
    // restarted; the other two keep serving.
    let handles: Vec<_> = MODELS
        .iter()
        .map(|model| {
            tokio::spawn(async move {
                if let Err(err) = server::serve(model).await {
                    tracing::error!("{} server stopped: {err:#}", model.name);
                }
            })
        })
        .collect();

    println!("✅ Servers active on ports 5000, 5001, and 5002.");

    for handle in handles {
        let _ = handle.await;
    }
}
