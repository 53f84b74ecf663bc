//! Currency extraction: turns a week of rate tables into one currency's series.

use chrono::NaiveDate;
use serde::Serialize;

use crate::week::WeekRates;

/// Display format for dates on the chart axis and in printed output.
pub const LABEL_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub rate: f64,
}

impl SeriesPoint {
    pub fn label(&self) -> String {
        self.date.format(LABEL_DATE_FORMAT).to_string()
    }
}

/// One currency's rate per date, in the order the dates were fetched.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Series {
    code: String,
    points: Vec<SeriesPoint>,
}

impl Series {
    pub fn new(code: &str, points: Vec<SeriesPoint>) -> Self {
        Self {
            code: code.to_string(),
            points,
        }
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn labels(&self) -> Vec<String> {
        self.points.iter().map(SeriesPoint::label).collect()
    }

    pub fn rates(&self) -> Vec<f64> {
        self.points.iter().map(|p| p.rate).collect()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Lowest and highest rate, or `None` for an empty series.
    pub fn bounds(&self) -> Option<(f64, f64)> {
        self.points.iter().map(|p| p.rate).fold(None, |acc, rate| match acc {
            None => Some((rate, rate)),
            Some((lo, hi)) => Some((lo.min(rate), hi.max(rate))),
        })
    }
}

/// Picks `code`'s rate out of each day's table, preserving the mapping's order.
///
/// Matching is exact and case-sensitive; a day without the code is skipped.
pub fn extract_series(rates: &WeekRates, code: &str) -> Series {
    let points = rates
        .days()
        .iter()
        .filter_map(|day| {
            day.table.rate_for(code).map(|rate| SeriesPoint {
                date: day.date,
                rate,
            })
        })
        .collect::<Vec<_>>();

    if points.len() < rates.len() {
        tracing::debug!(
            code,
            found = points.len(),
            days = rates.len(),
            "currency missing from some tables"
        );
    }

    Series::new(code, points)
}

#[cfg(test)]
mod tests {
    use super::*;
    use nbu_api::types::{RateEntry, RateTable};

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn table(entries: &[(&str, f64)]) -> RateTable {
        RateTable::new(entries.iter().map(|(cc, r)| RateEntry::new(cc, *r)).collect())
    }

    fn as_pairs(series: &Series) -> Vec<(String, f64)> {
        series.points().iter().map(|p| (p.label(), p.rate)).collect()
    }

    #[test]
    fn two_days_of_usd() {
        let rates = WeekRates::from_days(vec![
            (date(2024, 1, 1), table(&[("USD", 38.5)])),
            (date(2024, 1, 2), table(&[("USD", 39.0)])),
        ]);
        let series = extract_series(&rates, "USD");
        assert_eq!(
            as_pairs(&series),
            vec![
                ("2024-01-01".to_string(), 38.5),
                ("2024-01-02".to_string(), 39.0)
            ]
        );
    }

    #[test]
    fn currency_absent_everywhere_gives_empty_series() {
        let rates = WeekRates::from_days(vec![(date(2024, 1, 1), table(&[("EUR", 42.0)]))]);
        let series = extract_series(&rates, "USD");
        assert!(series.is_empty());
        assert_eq!(series.code(), "USD");
        assert_eq!(series.bounds(), None);
    }

    #[test]
    fn empty_mapping_gives_empty_series() {
        assert!(extract_series(&WeekRates::new(), "USD").is_empty());
    }

    #[test]
    fn extraction_is_exact_match() {
        let rates = WeekRates::from_days(vec![
            (date(2024, 1, 1), table(&[("USDX", 1.0)])),
            (date(2024, 1, 2), table(&[("usd", 2.0)])),
        ]);
        assert!(extract_series(&rates, "USD").is_empty());
    }

    #[test]
    fn extraction_preserves_mapping_order() {
        // Newest first, as the builder produces it; must not be re-sorted.
        let rates = WeekRates::from_days(vec![
            (date(2024, 1, 7), table(&[("USD", 39.3)])),
            (date(2024, 1, 6), table(&[("EUR", 42.0)])),
            (date(2024, 1, 5), table(&[("EUR", 42.1), ("USD", 39.1)])),
            (date(2024, 1, 4), table(&[("USD", 38.9)])),
        ]);
        let series = extract_series(&rates, "USD");
        assert_eq!(
            series.labels(),
            vec!["2024-01-07", "2024-01-05", "2024-01-04"]
        );
        assert_eq!(series.rates(), vec![39.3, 39.1, 38.9]);
    }

    #[test]
    fn bounds_span_all_points() {
        let series = Series::new(
            "EUR",
            vec![
                SeriesPoint { date: date(2024, 1, 1), rate: 42.5 },
                SeriesPoint { date: date(2024, 1, 2), rate: 41.9 },
                SeriesPoint { date: date(2024, 1, 3), rate: 42.2 },
            ],
        );
        assert_eq!(series.bounds(), Some((41.9, 42.5)));
    }

    #[test]
    fn series_serializes_iso_dates() {
        let series = Series::new(
            "USD",
            vec![SeriesPoint { date: date(2024, 1, 1), rate: 38.5 }],
        );
        let value = serde_json::to_value(&series).unwrap();
        assert_eq!(value["code"], "USD");
        assert_eq!(value["points"][0]["date"], "2024-01-01");
        assert_eq!(value["points"][0]["rate"], 38.5);
    }
}
