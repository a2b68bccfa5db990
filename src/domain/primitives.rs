//! Domain primitives: PoolId, TrancheId, OrderType.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// On-chain pool identifier (a decimal integer rendered as a string).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct PoolId(pub String);

impl PoolId {
    pub fn new(id: String) -> Self {
        PoolId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Display for PoolId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid pool id: {0:?}")]
pub struct PoolIdParseError(pub String);

impl FromStr for PoolId {
    type Err = PoolIdParseError;

    /// Accepts a non-empty run of ASCII digits, surrounding whitespace ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() || !trimmed.chars().all(|c| c.is_ascii_digit()) {
            return Err(PoolIdParseError(s.to_string()));
        }
        Ok(PoolId(trimmed.to_string()))
    }
}

/// Tranche identifier, opaque and unique within a pool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TrancheId(pub String);

impl TrancheId {
    pub fn new(id: String) -> Self {
        TrancheId(id)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for TrancheId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of a tranche's order book a row describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderType {
    /// Currency waiting to be invested.
    Invest,
    /// Tranche tokens waiting to be redeemed.
    Redeem,
}

impl OrderType {
    /// Plural noun used in row labels.
    pub fn label_suffix(&self) -> &'static str {
        match self {
            OrderType::Invest => "investments",
            OrderType::Redeem => "redemptions",
        }
    }
}
