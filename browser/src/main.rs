use browser::{AppState, config::Config, router};
use repository::JobRepository;
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    let client = reqwest::Client::builder()
        .timeout(config.request_timeout)
        .build()?;
    let repository = JobRepository::with_client(client, config.jobs_source_url.clone());

    let state = AppState::start(repository, config.advisory_window);
    let app = router(state.clone());

    let listener = TcpListener::bind(&config.server_address).await?;
    tracing::info!(addr = %config.server_address, "Job listings browser running");

    axum::serve(listener, app)
        .with_graceful_shutdown(async move {
            if let Err(e) = tokio::signal::ctrl_c().await {
                tracing::error!(error = %e, "Failed to listen for shutdown signal");
            }
            tracing::info!("Shutting down");
            state.shutdown();
        })
        .await?;

    Ok(())
}
