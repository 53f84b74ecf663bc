//! Error types for the library layer.

/// Errors produced by the library layer, wrapping upstream API errors
/// and adding input validation failures.
#[derive(thiserror::Error, Debug)]
pub enum NbuRatesError {
    /// An error from the underlying API client.
    #[error("API error: {0}")]
    Api(#[from] nbu_api::Error),
    /// User-provided input failed validation.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
