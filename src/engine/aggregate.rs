use crate::domain::{LiquidityRow, OrderTotals};

/// Exact decimal sums of `locked` and `executing` over `rows`, saturating at
/// the decimal maximum.
pub fn aggregate(rows: &[LiquidityRow]) -> OrderTotals {
    OrderTotals {
        locked: rows.iter().map(|row| &row.locked).sum(),
        executing: rows.iter().map(|row| &row.executing).sum(),
    }
}
