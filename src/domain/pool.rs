//! Pool state and side-channel metadata as read from the chain gateway.

use crate::domain::{Decimal, PoolId, TrancheId};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// One slice of a pool's capital structure at snapshot time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tranche {
    pub id: TrancheId,
    /// Currency waiting to be invested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding_invest_orders: Option<Decimal>,
    /// Tranche tokens waiting to be redeemed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub outstanding_redeem_orders: Option<Decimal>,
    /// Price of one token in pool currency. None before the first valuation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token_price: Option<Decimal>,
}

impl Tranche {
    pub fn new(
        id: TrancheId,
        outstanding_invest_orders: Option<Decimal>,
        outstanding_redeem_orders: Option<Decimal>,
        token_price: Option<Decimal>,
    ) -> Self {
        Self {
            id,
            outstanding_invest_orders,
            outstanding_redeem_orders,
            token_price,
        }
    }
}

/// A pool with its tranches in canonical order, most junior first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolSnapshot {
    pub id: PoolId,
    pub currency_decimals: u32,
    pub tranches: Vec<Tranche>,
}

impl PoolSnapshot {
    pub fn new(id: PoolId, currency_decimals: u32, tranches: Vec<Tranche>) -> Self {
        Self {
            id,
            currency_decimals,
            tranches,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrancheMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub symbol: Option<String>,
}

/// Off-chain pool metadata keyed by tranche id.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PoolMetadata {
    pub tranches: HashMap<TrancheId, TrancheMetadata>,
}

impl PoolMetadata {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a tranche symbol.
    pub fn with_symbol(mut self, tranche_id: TrancheId, symbol: impl Into<String>) -> Self {
        self.tranches.insert(
            tranche_id,
            TrancheMetadata {
                symbol: Some(symbol.into()),
            },
        );
        self
    }

    /// Symbol for a tranche if the metadata names one.
    pub fn symbol(&self, tranche_id: &TrancheId) -> Option<&str> {
        self.tranches
            .get(tranche_id)
            .and_then(|meta| meta.symbol.as_deref())
    }
}
