//! Error types for the API client.

/// Errors that can occur when requesting an exchange-rate table.
///
/// Every request-level variant carries the requested date in `YYYYMMDD`
/// form so callers can report which day failed.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The configured base URL could not be turned into a request URL.
    #[error("Invalid base URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    /// The underlying HTTP client could not be constructed.
    #[error("Failed to build HTTP client")]
    ClientBuild(#[source] reqwest::Error),
    /// The API returned a non-success status with a body snippet.
    #[error("Request for {date} failed with status {status}")]
    HttpStatus {
        date: String,
        status: u16,
        body: String,
    },
    /// Connection, DNS, timeout, or body read failure.
    #[error("Request for {date} failed: {source}")]
    Transport {
        date: String,
        #[source]
        source: reqwest::Error,
    },
    /// The body was not a JSON array of rate records.
    #[error("Failed to parse rates for {date}: {source}")]
    Parse {
        date: String,
        #[source]
        source: serde_json::Error,
    },
}

impl Error {
    /// The requested date (`YYYYMMDD`) for request-level failures.
    pub fn date(&self) -> Option<&str> {
        match self {
            Self::HttpStatus { date, .. } | Self::Transport { date, .. } | Self::Parse { date, .. } => {
                Some(date)
            }
            Self::InvalidUrl { .. } | Self::ClientBuild(_) => None,
        }
    }

    /// HTTP status code, when the server answered with one.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }
}
