//! Pure liquidity computation over pool state and dry-run solutions.
//!
//! Nothing here performs I/O or keeps state between calls. Every missing
//! input (pool, metadata, solution, price, symbol) has a defined default, so
//! the computation cannot fail.

pub mod aggregate;
pub mod rows;
pub mod snapshot;
pub mod solution_reader;

pub use aggregate::aggregate;
pub use rows::build_row;
pub use snapshot::{read_tranche_snapshots, TrancheSnapshot};
pub use solution_reader::{read_solution_entry, SolutionEntry};

use crate::domain::{LiquiditySummary, OrderType, PoolMetadata, PoolSnapshot, SolutionResult};

/// Project pool state and an optional dry-run solution into per-tranche rows
/// and pool-wide totals.
pub fn compute_liquidity(
    pool: Option<&PoolSnapshot>,
    metadata: Option<&PoolMetadata>,
    solution: Option<&SolutionResult>,
) -> LiquiditySummary {
    let snapshots = read_tranche_snapshots(pool, metadata);

    let mut investment_rows = Vec::with_capacity(snapshots.len());
    let mut redemption_rows = Vec::with_capacity(snapshots.len());
    for (index, snapshot) in snapshots.iter().enumerate() {
        let entry = read_solution_entry(solution, index, snapshot.price_factor);
        investment_rows.push(build_row(snapshot, &entry, OrderType::Invest));
        redemption_rows.push(build_row(snapshot, &entry, OrderType::Redeem));
    }

    let investments = aggregate(&investment_rows);
    let redemptions = aggregate(&redemption_rows);
    LiquiditySummary::new(investment_rows, redemption_rows, investments, redemptions)
}
