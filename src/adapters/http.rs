use crate::domain::model::RawResult;
use crate::domain::ports::ResultsFeed;
use crate::utils::error::{Result, TeerError};
use async_trait::async_trait;
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

pub const DEFAULT_RESULTS_ENDPOINT: &str = "https://admin.shillongteerground.com/teer/api/results/";
pub const DEFAULT_MAX_RECORDS: usize = 20;

const USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36";

#[derive(Debug, Clone)]
pub struct FeedSettings {
    pub endpoint: String,
    pub max_records: usize,
    pub timeout: Duration,
    pub retry_attempts: u32,
    pub retry_delay: Duration,
    pub headers: HashMap<String, String>,
}

impl Default for FeedSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_RESULTS_ENDPOINT.to_string(),
            max_records: DEFAULT_MAX_RECORDS,
            timeout: Duration::from_secs(30),
            retry_attempts: 0,
            retry_delay: Duration::from_secs(1),
            headers: HashMap::new(),
        }
    }
}

/// Fetches the newest-first results list over HTTP.
pub struct HttpResultsFeed {
    settings: FeedSettings,
    client: Client,
}

impl HttpResultsFeed {
    pub fn new(settings: FeedSettings) -> Self {
        Self {
            settings,
            client: Client::new(),
        }
    }

    async fn fetch_once(&self) -> Result<Vec<RawResult>> {
        let mut request = self
            .client
            .get(&self.settings.endpoint)
            .header(reqwest::header::USER_AGENT, USER_AGENT)
            .header(reqwest::header::ACCEPT, "application/json")
            .timeout(self.settings.timeout);

        for (key, value) in &self.settings.headers {
            request = request.header(key, value);
        }

        tracing::debug!("Making API request to: {}", self.settings.endpoint);
        let response = request.send().await?;
        tracing::debug!("API response status: {}", response.status());

        if !response.status().is_success() {
            return Err(TeerError::FeedError {
                message: format!("API responded with status: {}", response.status()),
            });
        }

        let json_data: serde_json::Value = response.json().await?;
        parse_results(json_data, self.settings.max_records)
    }
}

#[async_trait]
impl ResultsFeed for HttpResultsFeed {
    async fn fetch(&self) -> Result<Vec<RawResult>> {
        let mut attempt = 0;
        loop {
            match self.fetch_once().await {
                Ok(records) => {
                    tracing::info!("Successfully fetched {} records", records.len());
                    return Ok(records);
                }
                Err(e) if attempt < self.settings.retry_attempts => {
                    attempt += 1;
                    tracing::warn!(
                        "Fetch attempt {} failed: {}; retrying in {:?}",
                        attempt,
                        e,
                        self.settings.retry_delay
                    );
                    tokio::time::sleep(self.settings.retry_delay).await;
                }
                Err(e) => return Err(e),
            }
        }
    }
}

/// Turns a feed body into at most `max_records` raw results, skipping
/// elements that are not JSON objects.
pub fn parse_results(json_data: serde_json::Value, max_records: usize) -> Result<Vec<RawResult>> {
    let serde_json::Value::Array(items) = json_data else {
        return Err(TeerError::FeedError {
            message: "Expected a JSON array of results".to_string(),
        });
    };

    Ok(items
        .into_iter()
        .take(max_records)
        .filter_map(RawResult::from_json)
        .collect())
}
