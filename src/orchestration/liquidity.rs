use crate::datasource::{DataSourceError, PoolDataSource};
use crate::domain::{LiquiditySummary, PoolId, SolutionResult};
use crate::engine::compute_liquidity;
use futures::future::join_all;
use std::sync::Arc;
use thiserror::Error;
use tracing::{debug, error, warn};

/// A computed summary plus how it was produced.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PoolLiquidity {
    pub pool_id: PoolId,
    /// True when a tranche-shaped dry-run solution fed the executing amounts.
    pub solution_applied: bool,
    pub summary: LiquiditySummary,
}

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("Pool {0} not found")]
    PoolNotFound(PoolId),
    #[error("Failed to fetch pool: {0}")]
    DataSource(#[from] DataSourceError),
}

/// Fetches everything a pool's liquidity view needs and runs the computation.
#[derive(Debug, Clone)]
pub struct LiquidityService {
    datasource: Arc<dyn PoolDataSource>,
}

impl LiquidityService {
    pub fn new(datasource: Arc<dyn PoolDataSource>) -> Self {
        Self { datasource }
    }

    /// Compute the liquidity summary of one pool.
    ///
    /// Pool and metadata are fetched concurrently. The dry-run solve needs the
    /// pool's currency decimals so it runs after. Metadata and solution
    /// failures degrade to "absent"; only the pool itself is required.
    pub async fn pool_liquidity(&self, pool_id: &PoolId) -> Result<PoolLiquidity, ServiceError> {
        let (pool, metadata) = tokio::join!(
            self.datasource.fetch_pool(pool_id),
            self.datasource.fetch_pool_metadata(pool_id),
        );

        let pool = pool?.ok_or_else(|| ServiceError::PoolNotFound(pool_id.clone()))?;
        let metadata = metadata.unwrap_or_else(|e| {
            warn!(pool_id = %pool_id, error = %e, "Metadata unavailable, tranche symbols left empty");
            None
        });

        let solution = self.solution(pool_id, pool.currency_decimals).await;
        let solution_applied = solution
            .as_ref()
            .is_some_and(SolutionResult::is_tranche_shaped);

        debug!(
            pool_id = %pool_id,
            tranches = pool.tranches.len(),
            solution_applied,
            "Computing liquidity"
        );
        let summary = compute_liquidity(Some(&pool), metadata.as_ref(), solution.as_ref());

        Ok(PoolLiquidity {
            pool_id: pool_id.clone(),
            solution_applied,
            summary,
        })
    }

    /// Compute every pool concurrently. Failures are reported per pool.
    pub async fn tracked_overview(
        &self,
        pool_ids: &[PoolId],
    ) -> Vec<(PoolId, Result<PoolLiquidity, ServiceError>)> {
        let futures = pool_ids.iter().map(|pool_id| async move {
            let result = self.pool_liquidity(pool_id).await;
            if let Err(e) = &result {
                error!(pool_id = %pool_id, error = %e, "Liquidity computation failed");
            }
            (pool_id.clone(), result)
        });
        join_all(futures).await
    }

    async fn solution(&self, pool_id: &PoolId, currency_decimals: u32) -> Option<SolutionResult> {
        if pool_id.is_empty() {
            return None;
        }
        match self
            .datasource
            .dry_run_solution(pool_id, currency_decimals)
            .await
        {
            Ok(solution) => solution,
            Err(e) => {
                warn!(pool_id = %pool_id, error = %e, "Dry-run solve failed, nothing marked as executing");
                None
            }
        }
    }
}
