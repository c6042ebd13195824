// ============================================================
// CSV FETCHER
// ============================================================
// The only I/O boundary of the pipeline. Everything downstream of
// `fetch` is a pure function of the returned records.

use async_trait::async_trait;
use reqwest::Client;
use tracing::debug;

use crate::domain::error::{AppError, Result};
use crate::domain::record::RawRecord;
use crate::infrastructure::csv::parse_records;

/// Source of parsed CSV records, keyed by URL. Abstracted so section
/// pipelines can be driven by mock data in tests.
#[async_trait]
pub trait CsvSource: Send + Sync {
    async fn fetch(&self, url: &str) -> Result<Vec<RawRecord>>;
}

/// Fetches published-sheet CSV exports over HTTPS.
pub struct HttpCsvSource {
    client: Client,
}

impl HttpCsvSource {
    pub fn new() -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(30))
                .user_agent("hanaboard/0.1")
                .build()
                .unwrap_or_else(|_| Client::new()),
        }
    }
}

impl Default for HttpCsvSource {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CsvSource for HttpCsvSource {
    async fn fetch(&self, url: &str) -> Result<Vec<RawRecord>> {
        if url.trim().is_empty() {
            return Err(AppError::EmptyUrl);
        }

        // The sheet publisher caches aggressively; ask for a fresh copy.
        let response = self
            .client
            .get(url)
            .header(reqwest::header::CACHE_CONTROL, "no-store")
            .send()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::Http(status.as_u16()));
        }

        let body = response
            .text()
            .await
            .map_err(|e| AppError::Network(e.to_string()))?;

        let records = parse_records(&body);
        debug!(url, records = records.len(), "Fetched CSV");
        Ok(records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_empty_url_is_a_config_mistake() {
        let source = HttpCsvSource::new();
        assert_eq!(source.fetch("").await.unwrap_err(), AppError::EmptyUrl);
        assert_eq!(source.fetch("   ").await.unwrap_err(), AppError::EmptyUrl);
    }
}
