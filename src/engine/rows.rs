use crate::domain::{LiquidityRow, OrderType};

use super::{SolutionEntry, TrancheSnapshot};

/// Combine one tranche's snapshot and solution entry into a display row.
///
/// An unnamed tranche keeps the leading space in its label
/// (`" investments"`); consumers match on that exact string.
pub fn build_row(
    snapshot: &TrancheSnapshot,
    entry: &SolutionEntry,
    order_type: OrderType,
) -> LiquidityRow {
    let (locked, executing, executing_percentage) = match order_type {
        OrderType::Invest => (
            snapshot.locked_invest,
            entry.invest_amount,
            entry.invest_percentage,
        ),
        OrderType::Redeem => (
            snapshot.locked_redeem_in_currency,
            entry.redeem_amount,
            entry.redeem_percentage,
        ),
    };

    LiquidityRow {
        label: format!("{} {}", snapshot.symbol, order_type.label_suffix()),
        locked,
        executing,
        executing_percentage,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, Perquintill};

    fn dec(s: &str) -> Decimal {
        Decimal::from_str_canonical(s).unwrap()
    }

    fn snapshot(symbol: &str) -> TrancheSnapshot {
        TrancheSnapshot {
            symbol: symbol.to_string(),
            locked_invest: dec("500"),
            locked_redeem_in_currency: dec("240"),
            price_factor: dec("1.2"),
        }
    }

    fn entry() -> SolutionEntry {
        SolutionEntry {
            invest_amount: dec("500"),
            invest_percentage: Perquintill::one(),
            redeem_amount: dec("180"),
            redeem_percentage: Perquintill::from_percent(75),
        }
    }

    #[test]
    fn invest_row_uses_invest_fields() {
        let row = build_row(&snapshot("TIN"), &entry(), OrderType::Invest);
        assert_eq!(row.label, "TIN investments");
        assert_eq!(row.locked, dec("500"));
        assert_eq!(row.executing, dec("500"));
        assert_eq!(row.executing_percentage, Perquintill::one());
    }

    #[test]
    fn redeem_row_uses_redeem_fields() {
        let row = build_row(&snapshot("TIN"), &entry(), OrderType::Redeem);
        assert_eq!(row.label, "TIN redemptions");
        assert_eq!(row.locked, dec("240"));
        assert_eq!(row.executing, dec("180"));
        assert_eq!(row.executing_percentage, Perquintill::from_percent(75));
    }

    #[test]
    fn unnamed_tranche_keeps_leading_space() {
        let invest = build_row(&snapshot(""), &SolutionEntry::zero(), OrderType::Invest);
        let redeem = build_row(&snapshot(""), &SolutionEntry::zero(), OrderType::Redeem);
        assert_eq!(invest.label, " investments");
        assert_eq!(redeem.label, " redemptions");
        assert!(invest.executing.is_zero());
        assert!(invest.executing_percentage.is_zero());
    }
}
