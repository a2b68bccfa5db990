pub mod liquidity;

pub use liquidity::{LiquidityService, PoolLiquidity, ServiceError};
