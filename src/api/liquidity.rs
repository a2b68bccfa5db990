use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;
use std::str::FromStr;

use crate::api::AppState;
use crate::domain::{LiquidityRow, LiquiditySummary, PoolId};
use crate::error::AppError;
use crate::orchestration::PoolLiquidity;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquidityRowDto {
    pub order: String,
    pub locked: String,
    pub executing: String,
    /// Fraction in [0, 1].
    pub executing_percentage: String,
    /// Same share in percent, e.g. "75".
    pub executing_percent: String,
}

impl From<&LiquidityRow> for LiquidityRowDto {
    fn from(row: &LiquidityRow) -> Self {
        Self {
            order: row.label.clone(),
            locked: row.locked.to_canonical_string(),
            executing: row.executing.to_canonical_string(),
            executing_percentage: row.executing_percentage.to_fraction().to_canonical_string(),
            executing_percent: row.executing_percentage.to_percent().to_canonical_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiquiditySums {
    pub sum_of_locked_investments: String,
    pub sum_of_executable_investments: String,
    pub sum_of_locked_redemptions: String,
    pub sum_of_executable_redemptions: String,
}

impl From<&LiquiditySummary> for LiquiditySums {
    fn from(summary: &LiquiditySummary) -> Self {
        Self {
            sum_of_locked_investments: summary.total_locked_investments().to_canonical_string(),
            sum_of_executable_investments: summary
                .total_executing_investments()
                .to_canonical_string(),
            sum_of_locked_redemptions: summary.total_locked_redemptions().to_canonical_string(),
            sum_of_executable_redemptions: summary
                .total_executing_redemptions()
                .to_canonical_string(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PoolLiquidityResponse {
    pub pool_id: String,
    pub solution_applied: bool,
    pub investments: Vec<LiquidityRowDto>,
    pub redemptions: Vec<LiquidityRowDto>,
    #[serde(flatten)]
    pub sums: LiquiditySums,
}

impl From<PoolLiquidity> for PoolLiquidityResponse {
    fn from(liquidity: PoolLiquidity) -> Self {
        let summary = &liquidity.summary;
        Self {
            pool_id: liquidity.pool_id.to_string(),
            solution_applied: liquidity.solution_applied,
            investments: summary.investment_rows().iter().map(Into::into).collect(),
            redemptions: summary.redemption_rows().iter().map(Into::into).collect(),
            sums: summary.into(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TrackedPoolEntry {
    pub pool_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solution_applied: Option<bool>,
    #[serde(flatten, skip_serializing_if = "Option::is_none")]
    pub sums: Option<LiquiditySums>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

pub async fn get_pool_liquidity(
    Path(pool_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<PoolLiquidityResponse>, AppError> {
    let pool_id = PoolId::from_str(&pool_id)
        .map_err(|_| AppError::BadRequest("poolId must be a decimal integer".to_string()))?;

    let liquidity = state.service.pool_liquidity(&pool_id).await?;
    Ok(Json(liquidity.into()))
}

pub async fn get_tracked_liquidity(
    State(state): State<AppState>,
) -> Json<Vec<TrackedPoolEntry>> {
    let results = state
        .service
        .tracked_overview(&state.config.tracked_pools)
        .await;

    let entries = results
        .into_iter()
        .map(|(pool_id, result)| match result {
            Ok(liquidity) => TrackedPoolEntry {
                pool_id: pool_id.to_string(),
                solution_applied: Some(liquidity.solution_applied),
                sums: Some((&liquidity.summary).into()),
                error: None,
            },
            Err(e) => TrackedPoolEntry {
                pool_id: pool_id.to_string(),
                solution_applied: None,
                sums: None,
                error: Some(e.to_string()),
            },
        })
        .collect();

    Json(entries)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Decimal, Perquintill};

    #[test]
    fn test_row_dto_formats_amounts_and_percentages() {
        let row = LiquidityRow {
            label: "TIN redemptions".to_string(),
            locked: Decimal::from_str_canonical("240.00").unwrap(),
            executing: Decimal::from_str_canonical("180.0").unwrap(),
            executing_percentage: Perquintill::from_percent(75),
        };

        let dto = LiquidityRowDto::from(&row);
        assert_eq!(dto.order, "TIN redemptions");
        assert_eq!(dto.locked, "240");
        assert_eq!(dto.executing, "180");
        assert_eq!(dto.executing_percentage, "0.75");
        assert_eq!(dto.executing_percent, "75");
    }

    #[test]
    fn test_tracked_entry_error_shape() {
        let entry = TrackedPoolEntry {
            pool_id: "7".to_string(),
            solution_applied: None,
            sums: None,
            error: Some("Pool 7 not found".to_string()),
        };
        let json = serde_json::to_value(entry).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "poolId": "7", "error": "Pool 7 not found" })
        );
    }
}
