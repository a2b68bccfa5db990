use crate::domain::PoolId;
use std::collections::HashMap;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub port: u16,
    pub centrifuge_api_url: String,
    pub request_timeout: Duration,
    pub retry_max_elapsed: Duration,
    pub tracked_pools: Vec<PoolId>,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnv(String),
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let port = env_map
            .get("PORT")
            .map(|s| s.as_str())
            .unwrap_or("8080")
            .parse::<u16>()
            .map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?;

        let centrifuge_api_url = env_map
            .get("CENTRIFUGE_API_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .ok_or_else(|| ConfigError::MissingEnv("CENTRIFUGE_API_URL".to_string()))?;

        let request_timeout_ms = parse_millis(&env_map, "REQUEST_TIMEOUT_MS", "10000")?;
        if request_timeout_ms == 0 {
            return Err(ConfigError::InvalidValue(
                "REQUEST_TIMEOUT_MS".to_string(),
                "must be greater than 0".to_string(),
            ));
        }
        let retry_max_elapsed_ms = parse_millis(&env_map, "RETRY_MAX_ELAPSED_MS", "30000")?;

        let tracked_pools = parse_tracked_pools_from_map(&env_map)?;

        Ok(Config {
            port,
            centrifuge_api_url,
            request_timeout: Duration::from_millis(request_timeout_ms),
            retry_max_elapsed: Duration::from_millis(retry_max_elapsed_ms),
            tracked_pools,
        })
    }
}

fn parse_millis(
    env_map: &HashMap<String, String>,
    key: &str,
    default: &str,
) -> Result<u64, ConfigError> {
    env_map
        .get(key)
        .map(|s| s.as_str())
        .unwrap_or(default)
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidValue(key.to_string(), "must be a valid u64".to_string()))
}

/// `TRACKED_POOLS` (comma separated) wins over `TRACKED_POOLS_FILE` (one id
/// per line). Duplicates are dropped, first occurrence kept.
fn parse_tracked_pools_from_map(
    env_map: &HashMap<String, String>,
) -> Result<Vec<PoolId>, ConfigError> {
    let (key, raw): (&str, Vec<String>) = if let Some(pools_str) = env_map.get("TRACKED_POOLS") {
        (
            "TRACKED_POOLS",
            pools_str.split(',').map(str::to_string).collect(),
        )
    } else if let Some(file_path) = env_map.get("TRACKED_POOLS_FILE") {
        let content = std::fs::read_to_string(file_path).map_err(|_| {
            ConfigError::InvalidValue(
                "TRACKED_POOLS_FILE".to_string(),
                "file not found or unreadable".to_string(),
            )
        })?;
        ("TRACKED_POOLS_FILE", content.lines().map(str::to_string).collect())
    } else {
        return Ok(Vec::new());
    };

    let mut pools: Vec<PoolId> = Vec::new();
    for entry in raw.iter().map(|s| s.trim()).filter(|s| !s.is_empty()) {
        let pool_id = PoolId::from_str(entry)
            .map_err(|e| ConfigError::InvalidValue(key.to_string(), e.to_string()))?;
        if !pools.contains(&pool_id) {
            pools.push(pool_id);
        }
    }
    Ok(pools)
}
