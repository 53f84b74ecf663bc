//! HTTP client for the NBU exchange-rate endpoint.

use std::time::Duration;

use chrono::NaiveDate;
use url::Url;

use crate::{
    query::{ExchangeQuery, Query},
    types::RateTable,
    Error,
};

/// Production endpoint serving the daily official rate tables.
pub const DEFAULT_BASE_URL: &str = "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange";

/// Request timeout for exchange-rate calls.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the NBU exchange endpoint.
///
/// One `reqwest::Client` is built up front and reused for every request.
pub struct Client {
    http: reqwest::Client,
    /// Endpoint URL. Defaults to [`DEFAULT_BASE_URL`].
    base_api_url: String,
}

impl Client {
    /// Creates a new client pointing at the production NBU endpoint.
    pub fn new() -> Result<Self, Error> {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Creates a new client with a custom endpoint URL. Used for testing with wiremock.
    pub fn with_base_url(base_url: &str) -> Result<Self, Error> {
        Self::with_timeout(base_url, REQUEST_TIMEOUT)
    }

    /// Creates a new client with a custom endpoint URL and request timeout.
    pub fn with_timeout(base_url: &str, timeout: Duration) -> Result<Self, Error> {
        Url::parse(base_url).map_err(|source| Error::InvalidUrl {
            url: base_url.to_string(),
            source,
        })?;
        let http = reqwest::Client::builder()
            .user_agent(concat!("nbu-rates/", env!("CARGO_PKG_VERSION")))
            .timeout(timeout)
            .build()
            .map_err(Error::ClientBuild)?;
        Ok(Self {
            http,
            base_api_url: base_url.to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_api_url
    }

    fn get_url(&self, query: &impl Query) -> Result<Url, Error> {
        let url = Url::parse(&self.base_api_url).map_err(|source| {
            tracing::error!("Invalid URL constructed: {}", source);
            Error::InvalidUrl {
                url: self.base_api_url.clone(),
                source,
            }
        })?;
        Ok(query.add_to_url(&url))
    }

    /// Fetches the full rate table published for `date`.
    ///
    /// Sends `GET <base>?date=YYYYMMDD&json`. Any non-200 status, transport
    /// failure, or non-array body is returned as an [`Error`] carrying the
    /// formatted date.
    pub async fn get_exchange_rates(&self, date: NaiveDate) -> Result<RateTable, Error> {
        let query = ExchangeQuery::for_date(date);
        let formatted = query.formatted_date();
        let url = self.get_url(&query)?;

        tracing::debug!(date = %formatted, %url, "requesting exchange rates");
        let resp = self
            .http
            .get(url)
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|source| {
                tracing::debug!("Failed to get rates for {}: {}", formatted, source);
                Error::Transport {
                    date: formatted.clone(),
                    source,
                }
            })?;

        let status = resp.status();
        let body = resp.text().await.map_err(|source| {
            tracing::debug!("Failed to read response body for {}: {}", formatted, source);
            Error::Transport {
                date: formatted.clone(),
                source,
            }
        })?;

        if status != reqwest::StatusCode::OK {
            let snippet = truncate_body(&body);
            tracing::debug!(
                "Request for {} failed with status {}: {}",
                formatted,
                status,
                snippet
            );
            return Err(Error::HttpStatus {
                date: formatted,
                status: status.as_u16(),
                body: snippet,
            });
        }

        let (table, skipped) = RateTable::from_json(&body).map_err(|source| {
            tracing::debug!(
                "Failed to parse rates for {}: {} | body: {}",
                formatted,
                source,
                truncate_body(&body)
            );
            Error::Parse {
                date: formatted.clone(),
                source,
            }
        })?;
        if skipped > 0 {
            tracing::warn!(date = %formatted, skipped, "skipped malformed rate records");
        }
        tracing::debug!(date = %formatted, entries = table.len(), "received rate table");

        Ok(table)
    }
}

fn truncate_body(body: &str) -> String {
    const MAX: usize = 500;
    if body.len() <= MAX {
        return body.to_string();
    }
    let mut end = MAX;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    format!("{}...[truncated]", &body[..end])
}
