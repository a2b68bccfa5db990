pub mod api;
pub mod config;
pub mod datasource;
pub mod domain;
pub mod engine;
pub mod error;
pub mod orchestration;

pub use config::Config;
pub use datasource::{
    CentrifugeGatewaySource, DataSourceError, MockDataSource, PoolDataSource,
};
pub use domain::{
    Decimal, LiquidityRow, LiquiditySummary, OrderType, Perquintill, PoolId, PoolMetadata,
    PoolSnapshot, SolutionResult, Tranche, TrancheId,
};
pub use engine::compute_liquidity;
pub use error::AppError;
pub use orchestration::{LiquidityService, PoolLiquidity};
