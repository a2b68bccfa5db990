use crate::domain::{Decimal, PoolMetadata, PoolSnapshot};

/// Locked amounts of one tranche, already in pool currency.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrancheSnapshot {
    /// Empty when the metadata does not name the tranche.
    pub symbol: String,
    pub locked_invest: Decimal,
    pub locked_redeem_in_currency: Decimal,
    /// Token price, or exactly 1 when the tranche has not been priced yet.
    /// Executing redemptions must be converted with this same factor.
    pub price_factor: Decimal,
}

/// Read every tranche of `pool` in canonical order. An absent pool has no
/// tranches. Conversions past the decimal range saturate.
pub fn read_tranche_snapshots(
    pool: Option<&PoolSnapshot>,
    metadata: Option<&PoolMetadata>,
) -> Vec<TrancheSnapshot> {
    let Some(pool) = pool else {
        return Vec::new();
    };

    pool.tranches
        .iter()
        .map(|tranche| {
            let price_factor = tranche.token_price.unwrap_or_else(Decimal::one);
            let locked_redeem_tokens = tranche
                .outstanding_redeem_orders
                .unwrap_or_default()
                .non_negative();

            TrancheSnapshot {
                symbol: metadata
                    .and_then(|meta| meta.symbol(&tranche.id))
                    .unwrap_or_default()
                    .to_string(),
                locked_invest: tranche
                    .outstanding_invest_orders
                    .unwrap_or_default()
                    .non_negative(),
                locked_redeem_in_currency: locked_redeem_tokens
                    .saturating_mul(price_factor)
                    .non_negative(),
                price_factor,
            }
        })
        .collect()
}
