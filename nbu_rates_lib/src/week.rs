//! Seven-day window: date arithmetic, the per-date fetch loop, and the
//! overall load outcome consumed by the CLI.

use chrono::{Days, NaiveDate};
use nbu_api::types::RateTable;
use nbu_api::Client;

use crate::series::{extract_series, Series};

/// Number of calendar days in the window, today included.
pub const WEEK_LENGTH: u64 = 7;

/// Anything that can return the rate table for one date.
///
/// Implemented by [`nbu_api::Client`]; tests substitute a stub.
#[allow(async_fn_in_trait)]
pub trait RateSource {
    async fn fetch_rates(&self, date: NaiveDate) -> Result<RateTable, nbu_api::Error>;
}

impl RateSource for Client {
    async fn fetch_rates(&self, date: NaiveDate) -> Result<RateTable, nbu_api::Error> {
        self.get_exchange_rates(date).await
    }
}

/// `today` and the six calendar days before it, newest first.
pub fn week_dates(today: NaiveDate) -> Vec<NaiveDate> {
    (0..WEEK_LENGTH)
        .filter_map(|offset| today.checked_sub_days(Days::new(offset)))
        .collect()
}

/// The rate table fetched for one date.
#[derive(Clone, Debug, PartialEq)]
pub struct DailyRates {
    pub date: NaiveDate,
    pub table: RateTable,
}

/// A date whose fetch failed, with the reason.
#[derive(Debug)]
pub struct FetchFailure {
    pub date: NaiveDate,
    pub error: nbu_api::Error,
}

impl FetchFailure {
    /// One-line console diagnostic naming the `YYYYMMDD` date and the cause.
    pub fn diagnostic(&self) -> String {
        let formatted = self.date.format(nbu_api::REQUEST_DATE_FORMAT);
        match self.error.status() {
            Some(status) => format!("Помилка отримання даних для {}: {}", formatted, status),
            None => format!("Помилка отримання даних для {}: {}", formatted, self.error),
        }
    }
}

/// Successful tables in fetch order, plus the dates that were dropped.
///
/// A failed date is absent from `days`; it never appears with an empty table.
#[derive(Debug, Default)]
pub struct WeekRates {
    days: Vec<DailyRates>,
    failures: Vec<FetchFailure>,
}

impl WeekRates {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a mapping directly from `(date, table)` pairs, keeping their order.
    pub fn from_days<I>(days: I) -> Self
    where
        I: IntoIterator<Item = (NaiveDate, RateTable)>,
    {
        Self {
            days: days
                .into_iter()
                .map(|(date, table)| DailyRates { date, table })
                .collect(),
            failures: Vec::new(),
        }
    }

    pub fn push(&mut self, date: NaiveDate, table: RateTable) {
        self.days.push(DailyRates { date, table });
    }

    pub fn push_failure(&mut self, date: NaiveDate, error: nbu_api::Error) {
        self.failures.push(FetchFailure { date, error });
    }

    pub fn days(&self) -> &[DailyRates] {
        &self.days
    }

    pub fn failures(&self) -> &[FetchFailure] {
        &self.failures
    }

    pub fn get(&self, date: NaiveDate) -> Option<&RateTable> {
        self.days.iter().find(|d| d.date == date).map(|d| &d.table)
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn into_failures(self) -> Vec<FetchFailure> {
        self.failures
    }
}

/// Fetches the rate table for each of the seven dates ending at `today`.
///
/// Requests run one at a time, newest date first. A failed date is logged,
/// recorded in [`WeekRates::failures`] and left out; there is no retry.
pub async fn build_week_series<S: RateSource>(source: &S, today: NaiveDate) -> WeekRates {
    build_week_series_with(source, today, |_| {}).await
}

/// Like [`build_week_series`], but calls `on_failure` as soon as a date fails,
/// before the next date is requested.
pub async fn build_week_series_with<S, F>(source: &S, today: NaiveDate, mut on_failure: F) -> WeekRates
where
    S: RateSource,
    F: FnMut(&FetchFailure),
{
    let mut rates = WeekRates::new();
    for date in week_dates(today) {
        match source.fetch_rates(date).await {
            Ok(table) => {
                tracing::debug!(%date, entries = table.len(), "loaded rate table");
                rates.push(date, table);
            }
            Err(error) => {
                tracing::debug!(%date, "dropping date: {}", error);
                rates.push_failure(date, error);
                if let Some(failure) = rates.failures.last() {
                    on_failure(failure);
                }
            }
        }
    }
    tracing::info!(
        "loaded {}/{} daily rate tables",
        rates.len(),
        WEEK_LENGTH
    );
    rates
}

/// What the week load produced for the requested currency.
#[derive(Debug)]
pub enum WeekOutcome {
    /// No date could be fetched; nothing was extracted.
    NoData,
    /// Tables were loaded but none contained the currency.
    CurrencyNotFound,
    /// A non-empty series ready to print and chart.
    Ready(Series),
}

/// Result of [`load_week`]: the outcome plus every dropped date.
#[derive(Debug)]
pub struct WeekReport {
    pub code: String,
    pub failures: Vec<FetchFailure>,
    pub outcome: WeekOutcome,
}

/// Runs the whole acquisition step: fetch the week, then extract `code`.
///
/// Extraction is skipped entirely when every fetch failed.
pub async fn load_week<S: RateSource>(source: &S, today: NaiveDate, code: &str) -> WeekReport {
    load_week_with(source, today, code, |_| {}).await
}

/// [`load_week`] with a hook that sees each failed date as it happens.
pub async fn load_week_with<S, F>(source: &S, today: NaiveDate, code: &str, on_failure: F) -> WeekReport
where
    S: RateSource,
    F: FnMut(&FetchFailure),
{
    let rates = build_week_series_with(source, today, on_failure).await;

    let outcome = if rates.is_empty() {
        WeekOutcome::NoData
    } else {
        let series = extract_series(&rates, code);
        if series.is_empty() {
            WeekOutcome::CurrencyNotFound
        } else {
            WeekOutcome::Ready(series)
        }
    };

    WeekReport {
        code: code.to_string(),
        failures: rates.into_failures(),
        outcome,
    }
}
