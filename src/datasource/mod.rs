//! Data source abstraction for fetching pool state, tranche metadata and
//! dry-run solutions.

use crate::domain::{PoolId, PoolMetadata, PoolSnapshot, SolutionResult};
use async_trait::async_trait;
use std::fmt;

pub mod centrifuge;
pub mod mock;

pub use centrifuge::CentrifugeGatewaySource;
pub use mock::MockDataSource;

/// Source of everything the liquidity computation reads.
///
/// `Ok(None)` means the source does not know the pool; the caller decides
/// whether that is an error. Implementations handle retry/backoff.
#[async_trait]
pub trait PoolDataSource: Send + Sync + fmt::Debug {
    /// Fetch the pool's tranches in canonical order.
    async fn fetch_pool(&self, pool_id: &PoolId) -> Result<Option<PoolSnapshot>, DataSourceError>;

    /// Fetch off-chain metadata (tranche symbols).
    async fn fetch_pool_metadata(
        &self,
        pool_id: &PoolId,
    ) -> Result<Option<PoolMetadata>, DataSourceError>;

    /// Ask the solver how the pool's current orders would be executed,
    /// without submitting anything. Amounts are decoded with
    /// `currency_decimals`.
    async fn dry_run_solution(
        &self,
        pool_id: &PoolId,
        currency_decimals: u32,
    ) -> Result<Option<SolutionResult>, DataSourceError>;
}

/// Error type for data source operations.
#[derive(Debug, Clone)]
pub enum DataSourceError {
    /// Network error (e.g., connection timeout, DNS failure)
    NetworkError(String),
    /// HTTP error (e.g., 5xx server error)
    HttpError { status: u16, message: String },
    /// Parsing error (invalid JSON or malformed response)
    ParseError(String),
    /// Rate limit exceeded
    RateLimited,
    /// Other error
    Other(String),
}

impl fmt::Display for DataSourceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSourceError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            DataSourceError::HttpError { status, message } => {
                write!(f, "HTTP error {}: {}", status, message)
            }
            DataSourceError::ParseError(msg) => write!(f, "Parse error: {}", msg),
            DataSourceError::RateLimited => write!(f, "Rate limited"),
            DataSourceError::Other(msg) => write!(f, "Error: {}", msg),
        }
    }
}

impl std::error::Error for DataSourceError {}
