pub mod health;
pub mod liquidity;

use crate::config::Config;
use crate::orchestration::LiquidityService;
use axum::{routing::get, Router};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub service: Arc<LiquidityService>,
}

impl AppState {
    pub fn new(config: Config, service: LiquidityService) -> Self {
        Self {
            config: Arc::new(config),
            service: Arc::new(service),
        }
    }
}

pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/health", get(health::health))
        .route("/ready", get(health::ready))
        .route(
            "/v1/pools/:pool_id/liquidity",
            get(liquidity::get_pool_liquidity),
        )
        .route("/v1/liquidity", get(liquidity::get_tracked_liquidity))
        .layer(cors)
        .with_state(state)
}
