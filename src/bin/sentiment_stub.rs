use anyhow::Context;
use comment_sentiment::{config::StubConfig, stub};
use dotenv::dotenv;
use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = StubConfig::from_env()?;
    let app = stub::build_router(&config.cors_allow_origin);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Sentiment stub listening on {}", listener.local_addr()?);
    info!("API docs at /docs");

    axum::serve(listener, app).await?;
    Ok(())
}
