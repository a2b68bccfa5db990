//! Domain types for tranche liquidity.
//!
//! This module provides:
//! - Lossless numeric handling via the Decimal wrapper and Perquintill ratios
//! - Domain primitives: PoolId, TrancheId, OrderType
//! - Pool snapshots, tranche metadata and dry-run solver results
//! - Derived liquidity rows and summaries

pub mod decimal;
pub mod liquidity;
pub mod perquintill;
pub mod pool;
pub mod primitives;
pub mod solution;

pub use decimal::{Decimal, FixedPointError};
pub use liquidity::{LiquidityRow, LiquiditySummary, OrderTotals};
pub use perquintill::Perquintill;
pub use pool::{PoolMetadata, PoolSnapshot, Tranche, TrancheMetadata};
pub use primitives::{OrderType, PoolId, PoolIdParseError, TrancheId};
pub use solution::{
    OrderFulfillment, OtherSolution, SolutionResult, TrancheFulfillment, TrancheSolution,
};
