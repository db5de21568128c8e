use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, USER_AGENT};
use reqwest::Client;
use tracing::debug;

use super::{parse_products_total, CatalogSource};
use crate::config::WatchConfig;
use crate::error::{Result, WatchError};

/// HTTP client for the KSP category search API
#[derive(Debug, Clone)]
pub struct KspCatalogClient {
    http: Client,
    url: String,
}

impl KspCatalogClient {
    pub fn new(config: &WatchConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(
            USER_AGENT,
            HeaderValue::from_str(&config.user_agent).map_err(|e| {
                WatchError::InvalidConfiguration {
                    field: "user_agent",
                    details: e.to_string(),
                }
            })?,
        );
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()?;

        Ok(Self {
            http,
            url: config.catalog_url.clone(),
        })
    }
}

#[async_trait]
impl CatalogSource for KspCatalogClient {
    async fn fetch_products_total(&self) -> Result<Option<i64>> {
        debug!(url = %self.url, "Fetching catalog search results");

        let response = self.http.get(&self.url).send().await?.error_for_status()?;
        let body = response.bytes().await?;
        let total = parse_products_total(&body)?;

        debug!(products_total = ?total, bytes = body.len(), "Catalog response parsed");
        Ok(total)
    }
}
