use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tranche_liquidity::{api, CentrifugeGatewaySource, Config, LiquidityService};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("Configuration error")?;
    let port = config.port;

    let datasource = CentrifugeGatewaySource::new(
        config.centrifuge_api_url.clone(),
        config.request_timeout,
        config.retry_max_elapsed,
    )
    .context("Failed to create gateway client")?;
    let service = LiquidityService::new(Arc::new(datasource));

    tracing::info!(
        gateway = %config.centrifuge_api_url,
        tracked_pools = config.tracked_pools.len(),
        "Starting tranche liquidity service"
    );
    let app = api::create_router(api::AppState::new(config, service));

    let addr = SocketAddr::from(([127, 0, 0, 1], port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind to {}", addr))?;

    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await.context("Server error")?;
    Ok(())
}
