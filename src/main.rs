mod config;
mod error;
mod handlers;
mod routes;

use anyhow::Context;
use config::Config;
use nba_api::client::ScoresApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with_target(true)
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;

    if config.balldontlie_api_key.is_none() {
        tracing::warn!(
            "BALLDONTLIE_API_KEY not set; /api/scores will fail whenever the live feed is empty. \
             Get a free key at https://www.balldontlie.io/"
        );
    }

    let api = ScoresApi::new(config.balldontlie_api_key.clone());
    let app = routes::routes().with_state(api);

    let bind_address = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&bind_address)
        .await
        .with_context(|| format!("Failed to bind {bind_address}"))?;
    tracing::info!("NBA Tracker running at http://{bind_address}");

    axum::serve(listener, app).await?;

    Ok(())
}
