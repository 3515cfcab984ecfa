#![recursion_limit = "256"]

mod config;
mod routes;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("failed to load .env: {e}");
        }
    }

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    if let Err(e) = run().await {
        tracing::error!(error = %e, "skillsync host failed");
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cfg = config::HostConfig::from_env()?;
    let app = routes::leptos_app()?;

    let listener = tokio::net::TcpListener::bind(cfg.bind_addr()).await?;
    tracing::info!(port = cfg.port, host = %cfg.bind_host, "skillsync listening");
    axum::serve(listener, app).await?;
    Ok(())
}
