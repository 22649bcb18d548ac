use anyhow::Context;
use comment_sentiment::{
    analysis::CommentAnalyzer,
    config::Config,
    sentiment::HttpSentimentClient,
    web::{self, AppState},
};
use dotenv::dotenv;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};
use tracing::info;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    info!(
        "Sentiment service at {} (timeout {:?}, connect timeout {:?})",
        config.sentiment_api_url, config.request_timeout, config.connect_timeout
    );

    let client = HttpSentimentClient::new(
        &config.sentiment_api_url,
        config.request_timeout,
        config.connect_timeout,
    )
    .context("Failed to build HTTP client")?;

    let state = Arc::new(AppState {
        analyzer: CommentAnalyzer::new(Arc::new(client)),
    });
    let app = web::build_router(state, &config.static_dir);

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("Failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Server shut down");
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut stream) => {
                stream.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
