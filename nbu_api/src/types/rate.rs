use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A single currency record from the exchange endpoint.
///
/// The endpoint also sends `r030`, `txt` and `exchangedate`; only the code
/// and the rate are kept.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RateEntry {
    /// Alphabetic currency code, e.g. `USD`.
    pub cc: String,
    /// Hryvnia per one unit of the currency.
    pub rate: f64,
}

impl RateEntry {
    pub fn new(cc: &str, rate: f64) -> Self {
        Self {
            cc: cc.to_string(),
            rate,
        }
    }
}

/// Returns true for a non-empty, purely alphabetic ASCII code.
pub fn is_currency_code(code: &str) -> bool {
    !code.is_empty() && code.chars().all(|c| c.is_ascii_alphabetic())
}

/// Every rate published for one calendar date, in payload order.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
#[serde(transparent)]
pub struct RateTable {
    entries: Vec<RateEntry>,
}

impl RateTable {
    pub fn new(entries: Vec<RateEntry>) -> Self {
        Self { entries }
    }

    /// Parses a response body that must be a JSON array.
    ///
    /// Elements missing `cc` or `rate`, or carrying a non-alphabetic code,
    /// are skipped rather than failing the whole table. Returns the table
    /// and the number of skipped elements.
    pub fn from_json(body: &str) -> Result<(Self, usize), serde_json::Error> {
        let raw: Vec<Value> = serde_json::from_str(body)?;
        let total = raw.len();
        let entries: Vec<RateEntry> = raw
            .into_iter()
            .filter_map(|value| serde_json::from_value::<RateEntry>(value).ok())
            .filter(|entry| is_currency_code(&entry.cc))
            .collect();
        let skipped = total - entries.len();
        Ok((Self { entries }, skipped))
    }

    pub fn entries(&self) -> &[RateEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Rate of the first entry whose code equals `code` exactly (case-sensitive).
    pub fn rate_for(&self, code: &str) -> Option<f64> {
        self.entries
            .iter()
            .find(|entry| entry.cc == code)
            .map(|entry| entry.rate)
    }
}

impl From<Vec<RateEntry>> for RateTable {
    fn from(entries: Vec<RateEntry>) -> Self {
        Self::new(entries)
    }
}
