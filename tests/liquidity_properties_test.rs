//! Properties of `compute_liquidity` checked over a spread of pool shapes.

use std::str::FromStr;
use tranche_liquidity::compute_liquidity;
use tranche_liquidity::domain::{
    Decimal, LiquidityRow, OrderFulfillment, OtherSolution, Perquintill, PoolId, PoolMetadata,
    PoolSnapshot, SolutionResult, Tranche, TrancheFulfillment, TrancheId, TrancheSolution,
};

fn dec(s: &str) -> Decimal {
    Decimal::from_str(s).unwrap()
}

/// Pool with `n` tranches; every third tranche is unpriced.
fn pool_with(n: usize) -> (PoolSnapshot, PoolMetadata) {
    let mut metadata = PoolMetadata::new();
    let tranches: Vec<Tranche> = (0..n)
        .map(|i| {
            let id = TrancheId::new(format!("tranche-{}", i));
            if i % 2 == 0 {
                metadata = std::mem::take(&mut metadata).with_symbol(id.clone(), format!("T{}", i));
            }
            let price = (i % 3 != 2).then(|| dec(&format!("1.{}", i)));
            Tranche::new(
                id,
                Some(dec(&format!("{}.25", 100 * (i + 1)))),
                Some(dec(&format!("{}", 10 * (i + 1)))),
                price,
            )
        })
        .collect();
    (
        PoolSnapshot::new(PoolId::new("9".to_string()), 18, tranches),
        metadata,
    )
}

fn solution_for(pool: &PoolSnapshot) -> SolutionResult {
    SolutionResult::Tranches(TrancheSolution {
        tranches: pool
            .tranches
            .iter()
            .map(|tranche| TrancheFulfillment {
                invest: OrderFulfillment::new(
                    tranche.outstanding_invest_orders.unwrap_or_default() * dec("0.5"),
                    Perquintill::from_percent(50),
                ),
                redeem: OrderFulfillment::new(
                    tranche.outstanding_redeem_orders.unwrap_or_default(),
                    Perquintill::one(),
                ),
            })
            .collect(),
    })
}

fn sum_locked(rows: &[LiquidityRow]) -> Decimal {
    rows.iter().fold(Decimal::zero(), |acc, row| acc + row.locked)
}

fn sum_executing(rows: &[LiquidityRow]) -> Decimal {
    rows.iter().fold(Decimal::zero(), |acc, row| acc + row.executing)
}

#[test]
fn one_row_per_tranche_in_order() {
    for n in 0..8 {
        let (pool, metadata) = pool_with(n);
        let solution = solution_for(&pool);
        let summary = compute_liquidity(Some(&pool), Some(&metadata), Some(&solution));

        assert_eq!(summary.investment_rows().len(), n);
        assert_eq!(summary.redemption_rows().len(), n);
        for (i, (invest, redeem)) in summary
            .investment_rows()
            .iter()
            .zip(summary.redemption_rows())
            .enumerate()
        {
            let symbol = if i % 2 == 0 { format!("T{}", i) } else { String::new() };
            assert_eq!(invest.label, format!("{} investments", symbol));
            assert_eq!(redeem.label, format!("{} redemptions", symbol));
        }
    }
}

#[test]
fn without_solution_nothing_executes_and_locked_is_exact() {
    let infeasible = SolutionResult::Other(OtherSolution {
        feasible: Some(false),
    });
    for n in 1..6 {
        let (pool, metadata) = pool_with(n);
        for solution in [None, Some(&infeasible)] {
            let summary = compute_liquidity(Some(&pool), Some(&metadata), solution);
            for (tranche, row) in pool.tranches.iter().zip(summary.investment_rows()) {
                assert_eq!(Some(row.locked), tranche.outstanding_invest_orders);
                assert!(row.executing.is_zero());
                assert!(row.executing_percentage.is_zero());
            }
            for (tranche, row) in pool.tranches.iter().zip(summary.redemption_rows()) {
                let price = tranche.token_price.unwrap_or_else(Decimal::one);
                assert_eq!(
                    row.locked,
                    tranche.outstanding_redeem_orders.unwrap_or_default() * price
                );
                assert!(row.executing.is_zero());
                assert!(row.executing_percentage.is_zero());
            }
        }
    }
}

#[test]
fn totals_match_row_sums() {
    for n in 0..8 {
        let (pool, metadata) = pool_with(n);
        let solution = solution_for(&pool);
        let summary = compute_liquidity(Some(&pool), Some(&metadata), Some(&solution));

        assert_eq!(
            summary.total_locked_investments(),
            sum_locked(summary.investment_rows())
        );
        assert_eq!(
            summary.total_executing_investments(),
            sum_executing(summary.investment_rows())
        );
        assert_eq!(
            summary.total_locked_redemptions(),
            sum_locked(summary.redemption_rows())
        );
        assert_eq!(
            summary.total_executing_redemptions(),
            sum_executing(summary.redemption_rows())
        );
    }
}

#[test]
fn redemptions_are_converted_through_token_price() {
    let pool = PoolSnapshot::new(
        PoolId::new("1".to_string()),
        18,
        vec![
            Tranche::new(
                TrancheId::new("priced".to_string()),
                None,
                Some(dec("100")),
                Some(dec("1.5")),
            ),
            Tranche::new(TrancheId::new("unpriced".to_string()), None, Some(dec("100")), None),
        ],
    );
    let solution = solution_for(&pool);
    let summary = compute_liquidity(Some(&pool), None, Some(&solution));

    assert_eq!(summary.redemption_rows()[0].locked, dec("150"));
    assert_eq!(summary.redemption_rows()[0].executing, dec("150"));
    assert_eq!(summary.redemption_rows()[1].locked, dec("100"));
    assert_eq!(summary.redemption_rows()[1].executing, dec("100"));
    assert_eq!(summary.total_locked_redemptions(), dec("250"));
}

#[test]
fn recomputing_gives_equal_results() {
    let (pool, metadata) = pool_with(5);
    let solution = solution_for(&pool);

    let first = compute_liquidity(Some(&pool), Some(&metadata), Some(&solution));
    let second = compute_liquidity(Some(&pool), Some(&metadata), Some(&solution));
    assert_eq!(first, second);

    let degraded_first = compute_liquidity(Some(&pool), None, None);
    let degraded_second = compute_liquidity(Some(&pool), None, None);
    assert_eq!(degraded_first, degraded_second);
}
