use std::time::{Duration, SystemTime, UNIX_EPOCH};

use anyhow::Context;
use serde::Deserialize;

use crate::{
    configuration::SearchAdSettings, domain::search_volume::MetricRecord,
    services::signer::RequestSigner,
};

const KEYWORD_TOOL_PATH: &str = "/keywordstool";
const API_TIMEOUT: Duration = Duration::from_secs(30);

// Transport errors and non-2xx responses both land in Failed; the analyzer
// renders that as a pending section instead of failing the request.
pub enum SearchVolumeResult {
    Records(Vec<MetricRecord>),
    Failed { detail: String },
}

#[derive(Deserialize)]
struct KeywordToolResponse {
    #[serde(default, rename = "keywordList")]
    keyword_list: Vec<MetricRecord>,
}

pub struct SearchAdClient {
    client: reqwest::Client,
    base_url: String,
    customer_id: String,
    api_key: String,
    signer: RequestSigner,
}

impl SearchAdClient {
    pub fn new(settings: SearchAdSettings) -> Self {
        let client = reqwest::Client::builder()
            .timeout(API_TIMEOUT)
            .build()
            .expect("Failed to build the Search-Ad HTTP client");

        SearchAdClient {
            client,
            base_url: settings.base_url,
            customer_id: settings.customer_id,
            api_key: settings.api_key,
            signer: RequestSigner::new(settings.secret_key),
        }
    }

    pub async fn fetch_keyword_stats(&self, hint_keyword: &str) -> SearchVolumeResult {
        match self.request_keyword_stats(hint_keyword).await {
            Ok(records) => {
                log::info!(
                    "Keyword tool returned {} records for hint: {}",
                    records.len(),
                    hint_keyword
                );
                SearchVolumeResult::Records(records)
            }
            Err(e) => {
                log::error!("Keyword stats call failed for {}: {:?}", hint_keyword, e);
                SearchVolumeResult::Failed {
                    detail: e.to_string(),
                }
            }
        }
    }

    async fn request_keyword_stats(&self, hint_keyword: &str) -> anyhow::Result<Vec<MetricRecord>> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .context("System clock is before the unix epoch")?
            .as_millis()
            .to_string();
        let signature = self.signer.sign(&timestamp, "GET", KEYWORD_TOOL_PATH);

        let response = self
            .client
            .get(format!("{}{}", self.base_url, KEYWORD_TOOL_PATH))
            .header("X-Timestamp", &timestamp)
            .header("X-API-KEY", &self.api_key)
            .header("X-Customer", &self.customer_id)
            .header("X-Signature", signature)
            .header("Content-Type", "application/json")
            .query(&[("hintKeywords", hint_keyword), ("showDetail", "1")])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            let excerpt: String = body.chars().take(200).collect();
            anyhow::bail!("Keyword tool returned {}: {}", status, excerpt);
        }

        let parsed: KeywordToolResponse = response.json().await?;
        Ok(parsed.keyword_list)
    }
}
