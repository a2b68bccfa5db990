//! Mock data source for testing without network calls.

use super::{DataSourceError, PoolDataSource};
use crate::domain::{PoolId, PoolMetadata, PoolSnapshot, SolutionResult};
use async_trait::async_trait;
use std::collections::HashMap;

/// Mock data source that returns predefined pools, metadata and solutions.
#[derive(Debug, Clone, Default)]
pub struct MockDataSource {
    pools: HashMap<PoolId, PoolSnapshot>,
    metadata: HashMap<PoolId, PoolMetadata>,
    solutions: HashMap<PoolId, SolutionResult>,
    failing_pools: Vec<PoolId>,
    fail_metadata: bool,
    fail_solutions: bool,
}

impl MockDataSource {
    /// Create a new mock data source with no pools.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a pool, keyed by its own id.
    pub fn with_pool(mut self, pool: PoolSnapshot) -> Self {
        self.pools.insert(pool.id.clone(), pool);
        self
    }

    pub fn with_metadata(mut self, pool_id: PoolId, metadata: PoolMetadata) -> Self {
        self.metadata.insert(pool_id, metadata);
        self
    }

    pub fn with_solution(mut self, pool_id: PoolId, solution: SolutionResult) -> Self {
        self.solutions.insert(pool_id, solution);
        self
    }

    /// Make `fetch_pool` fail for this pool.
    pub fn with_failing_pool(mut self, pool_id: PoolId) -> Self {
        self.failing_pools.push(pool_id);
        self
    }

    /// Make every metadata fetch fail.
    pub fn with_failing_metadata(mut self) -> Self {
        self.fail_metadata = true;
        self
    }

    /// Make every dry-run solve fail.
    pub fn with_failing_solutions(mut self) -> Self {
        self.fail_solutions = true;
        self
    }
}

#[async_trait]
impl PoolDataSource for MockDataSource {
    async fn fetch_pool(&self, pool_id: &PoolId) -> Result<Option<PoolSnapshot>, DataSourceError> {
        if self.failing_pools.contains(pool_id) {
            return Err(DataSourceError::HttpError {
                status: 503,
                message: "Server error".to_string(),
            });
        }
        Ok(self.pools.get(pool_id).cloned())
    }

    async fn fetch_pool_metadata(
        &self,
        pool_id: &PoolId,
    ) -> Result<Option<PoolMetadata>, DataSourceError> {
        if self.fail_metadata {
            return Err(DataSourceError::NetworkError("connection refused".to_string()));
        }
        Ok(self.metadata.get(pool_id).cloned())
    }

    async fn dry_run_solution(
        &self,
        pool_id: &PoolId,
        _currency_decimals: u32,
    ) -> Result<Option<SolutionResult>, DataSourceError> {
        if self.fail_solutions {
            return Err(DataSourceError::RateLimited);
        }
        Ok(self.solutions.get(pool_id).cloned())
    }
}
