//! REST implementation of the external search collaborator.
//!
//! Talks to the hosted service's documents-search endpoint:
//! `POST {endpoint}/indexes/{index}/docs/search?api-version=...` with
//! an `api-key` header. Failures are classified into the error
//! taxonomy here; nothing is retried.

use std::time::Duration;

use reqwest::blocking::Client;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};

use hotelsearch_core::config::ServiceConfig;
use hotelsearch_core::error::{Result, SearchError};
use hotelsearch_core::traits::{QueryKind, RawResponse, SearchPlan, SearchService};

const EXTRACTIVE: &str = "extractive";

pub struct RestSearchService {
    client: Client,
    config: ServiceConfig,
}

#[derive(Serialize)]
struct SearchBody<'a> {
    search: &'a str,
    #[serde(rename = "queryType")]
    query_type: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    filter: Option<&'a str>,
    top: usize,
    count: bool,
    #[serde(rename = "semanticConfiguration", skip_serializing_if = "Option::is_none")]
    semantic_configuration: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    captions: Option<&'static str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    answers: Option<&'static str>,
}

#[derive(Deserialize)]
struct SearchResponseBody {
    #[serde(rename = "@odata.count")]
    count: Option<u64>,
    #[serde(rename = "@search.answers")]
    answers: Option<serde_json::Value>,
    #[serde(default)]
    value: Vec<serde_json::Map<String, serde_json::Value>>,
}

impl RestSearchService {
    pub fn new(config: ServiceConfig) -> Result<Self> {
        // All timeout policy lives in the client; the orchestration
        // layers above define none of their own.
        let client = Client::builder()
            .timeout(Duration::from_secs(30))
            .build()
            .map_err(|e| {
                SearchError::Configuration(format!("failed to build HTTP client: {}", e))
            })?;
        Ok(Self { client, config })
    }

    fn search_url(&self) -> String {
        format!(
            "{}/indexes/{}/docs/search?api-version={}",
            self.config.endpoint.trim_end_matches('/'),
            self.config.index_name,
            self.config.api_version
        )
    }
}

impl SearchService for RestSearchService {
    fn search(&self, plan: &SearchPlan) -> Result<RawResponse> {
        let semantic = plan.query_kind == QueryKind::Semantic;
        let body = SearchBody {
            search: &plan.search_text,
            query_type: if semantic { "semantic" } else { "simple" },
            filter: plan.filter.as_deref(),
            top: plan.top,
            count: true,
            semantic_configuration: semantic.then_some(self.config.semantic_config.as_str()),
            captions: plan.captions.then_some(EXTRACTIVE),
            answers: plan.answers.then_some(EXTRACTIVE),
        };

        let response = self
            .client
            .post(self.search_url())
            .header("api-key", &self.config.api_key)
            .json(&body)
            .send()
            .map_err(|e| SearchError::Transient(format!("request failed: {}", e)))?;

        let status = response.status();
        if !status.is_success() {
            let detail = response.text().unwrap_or_default();
            return Err(classify_status(status, &detail));
        }

        let parsed: SearchResponseBody = response
            .json()
            .map_err(|e| SearchError::Transient(format!("malformed service response: {}", e)))?;

        Ok(RawResponse {
            documents: parsed.value,
            total_count: parsed.count,
            answers: parsed.answers,
        })
    }
}

fn classify_status(status: StatusCode, detail: &str) -> SearchError {
    match status {
        StatusCode::BAD_REQUEST => {
            SearchError::Query(format!("service rejected the request: {}", detail))
        }
        StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
            SearchError::Configuration(format!("credentials rejected ({}): {}", status, detail))
        }
        // A missing index is a deployment mistake, not a user query
        // problem.
        StatusCode::NOT_FOUND => {
            SearchError::Configuration(format!("index not found: {}", detail))
        }
        _ => SearchError::Transient(format!("service returned {}: {}", status, detail)),
    }
}
