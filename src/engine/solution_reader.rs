use crate::domain::{Decimal, Perquintill, SolutionResult};

/// What a solution executes for one tranche, in pool currency.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SolutionEntry {
    pub invest_amount: Decimal,
    pub invest_percentage: Perquintill,
    /// Token amount already multiplied by the tranche's price factor.
    pub redeem_amount: Decimal,
    pub redeem_percentage: Perquintill,
}

impl SolutionEntry {
    /// Nothing executes.
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Read the tranche at `index` from a dry-run result.
///
/// Absent results, results without per-tranche data and out-of-range indices
/// all read as [`SolutionEntry::zero`]. `price_factor` must be the one the
/// snapshot reader used for the same tranche so locked and executing
/// redemptions share a unit.
pub fn read_solution_entry(
    solution: Option<&SolutionResult>,
    index: usize,
    price_factor: Decimal,
) -> SolutionEntry {
    let fulfillment = match solution {
        Some(SolutionResult::Tranches(tranches)) => match tranches.tranches.get(index) {
            Some(fulfillment) => fulfillment,
            None => return SolutionEntry::zero(),
        },
        Some(SolutionResult::Other(_)) | None => return SolutionEntry::zero(),
    };

    SolutionEntry {
        invest_amount: fulfillment.invest.amount.non_negative(),
        invest_percentage: fulfillment.invest.percentage,
        redeem_amount: fulfillment
            .redeem
            .amount
            .saturating_mul(price_factor)
            .non_negative(),
        redeem_percentage: fulfillment.redeem.percentage,
    }
}
