//! Client for the Centrifuge chain gateway's JSON API.
//!
//! Balances arrive as unsigned integer strings in the pool currency's
//! decimals; token prices are integer strings with 18 decimals.

use super::{DataSourceError, PoolDataSource};
use crate::domain::{
    Decimal, OrderFulfillment, OtherSolution, Perquintill, PoolId, PoolMetadata, PoolSnapshot,
    SolutionResult, Tranche, TrancheFulfillment, TrancheId, TrancheMetadata, TrancheSolution,
};
use async_trait::async_trait;
use backoff::future::retry;
use backoff::ExponentialBackoff;
use reqwest::{Client, Method, StatusCode};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, warn};

/// Decimals of the fixed-point token price.
const PRICE_DECIMALS: u32 = 18;

#[derive(Debug, Clone)]
pub struct CentrifugeGatewaySource {
    client: Client,
    base_url: String,
    max_elapsed: Duration,
}

impl CentrifugeGatewaySource {
    /// Create a gateway client. `timeout` bounds each request, `max_elapsed`
    /// bounds all retries of one call.
    pub fn new(
        base_url: String,
        timeout: Duration,
        max_elapsed: Duration,
    ) -> Result<Self, DataSourceError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| DataSourceError::Other(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            max_elapsed,
        })
    }

    /// Send a request, retrying rate limits and server errors. 404 is `Ok(None)`.
    async fn send(
        &self,
        method: Method,
        path: &str,
        body: Option<&Value>,
    ) -> Result<Option<Value>, DataSourceError> {
        let url = format!("{}{}", self.base_url, path);
        let backoff = ExponentialBackoff {
            max_elapsed_time: Some(self.max_elapsed),
            ..Default::default()
        };

        retry(backoff, || async {
            let mut request = self.client.request(method.clone(), &url);
            if let Some(body) = body {
                request = request.json(body);
            }

            let response = request.send().await.map_err(|e| {
                backoff::Error::transient(DataSourceError::NetworkError(e.to_string()))
            })?;

            let status = response.status();
            if status == StatusCode::NOT_FOUND {
                return Ok(None);
            }
            if status == StatusCode::TOO_MANY_REQUESTS {
                return Err(backoff::Error::transient(DataSourceError::RateLimited));
            }
            if status.is_server_error() {
                return Err(backoff::Error::transient(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Server error".to_string(),
                }));
            }
            if !status.is_success() {
                return Err(backoff::Error::permanent(DataSourceError::HttpError {
                    status: status.as_u16(),
                    message: "Client error".to_string(),
                }));
            }

            response
                .json::<Value>()
                .await
                .map(Some)
                .map_err(|e| backoff::Error::permanent(DataSourceError::ParseError(e.to_string())))
        })
        .await
    }
}

#[async_trait]
impl PoolDataSource for CentrifugeGatewaySource {
    async fn fetch_pool(&self, pool_id: &PoolId) -> Result<Option<PoolSnapshot>, DataSourceError> {
        debug!(pool_id = %pool_id, "Fetching pool");
        let path = format!("/pools/{}", pool_id);
        match self.send(Method::GET, &path, None).await? {
            Some(json) => parse_pool(&json, pool_id).map(Some),
            None => Ok(None),
        }
    }

    async fn fetch_pool_metadata(
        &self,
        pool_id: &PoolId,
    ) -> Result<Option<PoolMetadata>, DataSourceError> {
        debug!(pool_id = %pool_id, "Fetching pool metadata");
        let path = format!("/pools/{}/metadata", pool_id);
        Ok(self
            .send(Method::GET, &path, None)
            .await?
            .map(|json| parse_metadata(&json)))
    }

    async fn dry_run_solution(
        &self,
        pool_id: &PoolId,
        currency_decimals: u32,
    ) -> Result<Option<SolutionResult>, DataSourceError> {
        debug!(pool_id = %pool_id, "Requesting dry-run solution");
        let path = format!("/pools/{}/solution", pool_id);
        let payload = serde_json::json!({ "dryRun": true });
        Ok(self
            .send(Method::POST, &path, Some(&payload))
            .await?
            .map(|json| parse_solution(&json, currency_decimals)))
    }
}

/// Read an optional fixed-point field. Missing or null is `None`.
fn fixed_point_field(
    json: &Value,
    key: &str,
    decimals: u32,
) -> Result<Option<Decimal>, DataSourceError> {
    let raw = match json.get(key) {
        None | Some(Value::Null) => return Ok(None),
        Some(Value::String(s)) => s.clone(),
        Some(Value::Number(n)) if n.is_u64() => n.to_string(),
        Some(other) => {
            return Err(DataSourceError::ParseError(format!(
                "{} must be an unsigned integer, got {}",
                key, other
            )))
        }
    };
    Decimal::from_fixed_point(&raw, decimals)
        .map(Some)
        .map_err(|e| DataSourceError::ParseError(format!("Invalid {}: {}", key, e)))
}

fn parse_pool(json: &Value, pool_id: &PoolId) -> Result<PoolSnapshot, DataSourceError> {
    let decimals = json
        .get("currency")
        .and_then(|c| c.get("decimals"))
        .and_then(|d| d.as_u64())
        .ok_or_else(|| DataSourceError::ParseError("Missing currency.decimals".to_string()))?;
    let decimals = u32::try_from(decimals)
        .map_err(|_| DataSourceError::ParseError(format!("Invalid decimals: {}", decimals)))?;

    let tranches_json = json
        .get("tranches")
        .and_then(|t| t.as_array())
        .ok_or_else(|| DataSourceError::ParseError("Expected tranches array".to_string()))?;

    let tranches = tranches_json
        .iter()
        .map(|tranche| parse_tranche(tranche, decimals))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(PoolSnapshot::new(pool_id.clone(), decimals, tranches))
}

fn parse_tranche(json: &Value, decimals: u32) -> Result<Tranche, DataSourceError> {
    let id = json
        .get("id")
        .and_then(|v| v.as_str())
        .ok_or_else(|| DataSourceError::ParseError("Missing tranche id".to_string()))?;

    Ok(Tranche::new(
        TrancheId::new(id.to_string()),
        fixed_point_field(json, "outstandingInvestOrders", decimals)?,
        fixed_point_field(json, "outstandingRedeemOrders", decimals)?,
        fixed_point_field(json, "tokenPrice", PRICE_DECIMALS)?,
    ))
}

/// Metadata is best effort: unreadable entries are skipped.
fn parse_metadata(json: &Value) -> PoolMetadata {
    let mut metadata = PoolMetadata::new();
    let Some(tranches) = json.get("tranches").and_then(|t| t.as_object()) else {
        return metadata;
    };

    for (id, entry) in tranches {
        let symbol = entry
            .get("symbol")
            .and_then(|s| s.as_str())
            .map(str::to_string);
        metadata
            .tranches
            .insert(TrancheId::new(id.clone()), TrancheMetadata { symbol });
    }
    metadata
}

/// Anything without a `tranches` array is a non tranche-shaped answer. A
/// malformed entry reads as a zero fulfillment so indices stay aligned.
fn parse_solution(json: &Value, decimals: u32) -> SolutionResult {
    let Some(entries) = json.get("tranches").and_then(|t| t.as_array()) else {
        return SolutionResult::Other(OtherSolution {
            feasible: json.get("isFeasible").and_then(|v| v.as_bool()),
        });
    };

    let tranches = entries
        .iter()
        .enumerate()
        .map(|(index, entry)| {
            parse_tranche_fulfillment(entry, decimals).unwrap_or_else(|e| {
                warn!(index, error = %e, "Malformed solution entry, treating as zero");
                TrancheFulfillment::default()
            })
        })
        .collect();

    SolutionResult::Tranches(TrancheSolution { tranches })
}

fn parse_tranche_fulfillment(
    json: &Value,
    decimals: u32,
) -> Result<TrancheFulfillment, DataSourceError> {
    Ok(TrancheFulfillment {
        invest: parse_order_fulfillment(json, "invest", decimals)?,
        redeem: parse_order_fulfillment(json, "redeem", decimals)?,
    })
}

fn parse_order_fulfillment(
    json: &Value,
    side: &str,
    decimals: u32,
) -> Result<OrderFulfillment, DataSourceError> {
    let side_json = json
        .get(side)
        .ok_or_else(|| DataSourceError::ParseError(format!("Missing {} fulfillment", side)))?;

    let amount = fixed_point_field(side_json, "amount", decimals)?
        .ok_or_else(|| DataSourceError::ParseError(format!("Missing {}.amount", side)))?;

    let parts = match side_json.get("perquintill") {
        Some(Value::String(s)) => s.trim().parse::<u64>().ok(),
        Some(Value::Number(n)) => n.as_u64(),
        _ => None,
    }
    .ok_or_else(|| DataSourceError::ParseError(format!("Invalid {}.perquintill", side)))?;

    Ok(OrderFulfillment::new(amount, Perquintill::from_parts(parts)))
}
