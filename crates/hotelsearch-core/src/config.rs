//! Service configuration loader.
//!
//! Uses Figment to merge `config.toml` + `HOTELSEARCH_*` env vars.
//! Endpoint and API key are required; everything else has the hosted
//! demo index's defaults. Validation failures are configuration
//! errors, surfaced before the process accepts any queries.

use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};

use crate::error::{Result, SearchError};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default)]
    pub endpoint: String,
    #[serde(default)]
    pub api_key: String,
    #[serde(default = "default_index_name")]
    pub index_name: String,
    #[serde(default = "default_semantic_config")]
    pub semantic_config: String,
    #[serde(default = "default_api_version")]
    pub api_version: String,
    #[serde(default = "default_limit")]
    pub default_limit: usize,
}

fn default_index_name() -> String {
    "hotels-sample-index".to_string()
}

fn default_semantic_config() -> String {
    "my-semantic-config".to_string()
}

fn default_api_version() -> String {
    "2023-11-01".to_string()
}

fn default_limit() -> usize {
    10
}

impl ServiceConfig {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file("config.toml"))
                .merge(Env::prefixed("HOTELSEARCH_")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: ServiceConfig = figment
            .extract()
            .map_err(|e| SearchError::Configuration(format!("failed to read config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.endpoint.is_empty() {
            return Err(SearchError::Configuration(
                "search endpoint is not set (config.toml `endpoint` or HOTELSEARCH_ENDPOINT)"
                    .to_string(),
            ));
        }
        if self.api_key.is_empty() {
            return Err(SearchError::Configuration(
                "search API key is not set (config.toml `api_key` or HOTELSEARCH_API_KEY)"
                    .to_string(),
            ));
        }
        if self.index_name.is_empty() {
            return Err(SearchError::Configuration("index name is empty".to_string()));
        }
        Ok(())
    }
}
