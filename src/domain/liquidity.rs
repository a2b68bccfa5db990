//! Derived liquidity rows and their pool-wide summary.

use crate::domain::{Decimal, Perquintill};
use serde::Serialize;

/// One tranche's locked versus executing amount for one order type.
///
/// Both amounts are in pool currency. Redemptions are converted from tokens
/// through the tranche's token price.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquidityRow {
    pub label: String,
    pub locked: Decimal,
    pub executing: Decimal,
    pub executing_percentage: Perquintill,
}

/// Sum of locked and executing amounts over a set of rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OrderTotals {
    pub locked: Decimal,
    pub executing: Decimal,
}

/// Rows for every tranche plus the four pool-wide totals.
///
/// Only [`crate::engine::compute_liquidity`] builds this, so the totals always
/// match the rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LiquiditySummary {
    investment_rows: Vec<LiquidityRow>,
    redemption_rows: Vec<LiquidityRow>,
    investments: OrderTotals,
    redemptions: OrderTotals,
}

impl LiquiditySummary {
    pub(crate) fn new(
        investment_rows: Vec<LiquidityRow>,
        redemption_rows: Vec<LiquidityRow>,
        investments: OrderTotals,
        redemptions: OrderTotals,
    ) -> Self {
        Self {
            investment_rows,
            redemption_rows,
            investments,
            redemptions,
        }
    }

    pub fn investment_rows(&self) -> &[LiquidityRow] {
        &self.investment_rows
    }

    pub fn redemption_rows(&self) -> &[LiquidityRow] {
        &self.redemption_rows
    }

    pub fn total_locked_investments(&self) -> Decimal {
        self.investments.locked
    }

    pub fn total_executing_investments(&self) -> Decimal {
        self.investments.executing
    }

    pub fn total_locked_redemptions(&self) -> Decimal {
        self.redemptions.locked
    }

    pub fn total_executing_redemptions(&self) -> Decimal {
        self.redemptions.executing
    }

    pub fn is_empty(&self) -> bool {
        self.investment_rows.is_empty() && self.redemption_rows.is_empty()
    }
}
