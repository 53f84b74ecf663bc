use url::Url;

use crate::error::NbuRatesError;

/// Length of the alphabetic codes the NBU publishes (ISO 4217 style).
pub const CURRENCY_CODE_LENGTH: usize = 3;

/// Validate a currency code: trim, uppercase, require exactly three ASCII letters.
///
/// The endpoint publishes codes in upper case, so normalizing here lets the
/// exact-match lookup succeed for `usd` as well as `USD`.
pub fn validate_currency_code(input: &str) -> Result<String, NbuRatesError> {
    let upper = input.trim().to_uppercase();
    if upper.len() == CURRENCY_CODE_LENGTH && nbu_api::types::is_currency_code(&upper) {
        Ok(upper)
    } else {
        Err(NbuRatesError::InvalidInput(format!(
            "unknown currency code '{}'. Expected three letters, e.g. USD, EUR, PLN",
            input
        )))
    }
}

/// Validate an endpoint URL: must parse and use http or https.
pub fn validate_base_url(input: &str) -> Result<String, NbuRatesError> {
    let trimmed = input.trim();
    let url = Url::parse(trimmed).map_err(|e| {
        NbuRatesError::InvalidInput(format!("invalid base URL '{}': {}", input, e))
    })?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(NbuRatesError::InvalidInput(format!(
            "unsupported URL scheme '{}' in '{}'. Use http or https",
            other, input
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- Currency code validation --

    #[test]
    fn currency_valid_uppercase() {
        assert_eq!(validate_currency_code("USD").unwrap(), "USD");
    }

    #[test]
    fn currency_valid_lowercase_is_normalized() {
        assert_eq!(validate_currency_code(" eur ").unwrap(), "EUR");
    }

    #[test]
    fn currency_too_long() {
        assert!(validate_currency_code("USDX").is_err());
    }

    #[test]
    fn currency_too_short() {
        assert!(validate_currency_code("US").is_err());
    }

    #[test]
    fn currency_non_alphabetic() {
        assert!(validate_currency_code("U5D").is_err());
        assert!(validate_currency_code("").is_err());
    }

    #[test]
    fn currency_error_names_input() {
        let err = validate_currency_code("12").unwrap_err();
        assert!(err.to_string().contains("'12'"));
    }

    // -- Base URL validation --

    #[test]
    fn base_url_https() {
        let url = "https://bank.gov.ua/NBUStatService/v1/statdirectory/exchange";
        assert_eq!(validate_base_url(url).unwrap(), url);
    }

    #[test]
    fn base_url_local_http() {
        assert_eq!(
            validate_base_url("http://127.0.0.1:8080/exchange").unwrap(),
            "http://127.0.0.1:8080/exchange"
        );
    }

    #[test]
    fn base_url_relative_rejected() {
        assert!(validate_base_url("/exchange").is_err());
    }

    #[test]
    fn base_url_other_scheme_rejected() {
        let err = validate_base_url("ftp://bank.gov.ua/exchange").unwrap_err();
        assert!(err.to_string().contains("ftp"));
    }
}
