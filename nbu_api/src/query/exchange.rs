use chrono::NaiveDate;
use url::Url;

use super::Query;

/// `strftime` pattern the exchange endpoint expects for its `date` parameter.
pub const REQUEST_DATE_FORMAT: &str = "%Y%m%d";

/// Query for the exchange-rate table published on one calendar date.
///
/// Serializes to `?date=YYYYMMDD&json`. The bare `json` key switches the
/// endpoint from XML to JSON output.
#[derive(Clone, Copy, Debug)]
pub struct ExchangeQuery {
    pub date: NaiveDate,
}

impl ExchangeQuery {
    pub fn for_date(date: NaiveDate) -> Self {
        Self { date }
    }

    /// The date formatted the way the endpoint expects it (`YYYYMMDD`).
    pub fn formatted_date(&self) -> String {
        self.date.format(REQUEST_DATE_FORMAT).to_string()
    }
}

impl Query for ExchangeQuery {
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        url.query_pairs_mut()
            .append_pair("date", &self.formatted_date())
            .append_key_only("json");
        url
    }
}
