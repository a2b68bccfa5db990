//! Result of a dry-run epoch solve.

use crate::domain::{Decimal, Perquintill};
use serde::{Deserialize, Serialize};

/// How much of one order side a solution executes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderFulfillment {
    /// Invest side: currency. Redeem side: tranche tokens.
    pub amount: Decimal,
    pub percentage: Perquintill,
}

impl OrderFulfillment {
    pub fn new(amount: Decimal, percentage: Perquintill) -> Self {
        Self { amount, percentage }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrancheFulfillment {
    pub invest: OrderFulfillment,
    pub redeem: OrderFulfillment,
}

/// Per-tranche allocation, in the pool's tranche order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrancheSolution {
    pub tranches: Vec<TrancheFulfillment>,
}

/// A solver answer that carries no per-tranche allocation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtherSolution {
    /// Global feasibility flag, when the solver reported one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub feasible: Option<bool>,
}

/// The two shapes a dry-run solve can come back in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum SolutionResult {
    Tranches(TrancheSolution),
    Other(OtherSolution),
}

impl SolutionResult {
    pub fn is_tranche_shaped(&self) -> bool {
        matches!(self, SolutionResult::Tranches(_))
    }
}
