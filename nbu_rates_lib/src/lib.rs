//! Library layer for nbu-rates: the seven-day fetch loop, currency
//! extraction, chart rendering, configuration and input validation.
//!
//! Wraps the `nbu_api` client crate. Acquisition and extraction are pure
//! apart from the HTTP calls; rendering is the only step that touches disk.

pub mod chart;
pub mod config;
pub mod error;
pub mod series;
pub mod validation;
pub mod week;

pub use nbu_api;
pub use nbu_api::types;

pub use chart::{render_chart, render_svg, ChartError};
pub use config::{Config, DEFAULT_CURRENCY};
pub use error::NbuRatesError;
pub use series::{extract_series, Series, SeriesPoint};
pub use week::{
    build_week_series, build_week_series_with, load_week, load_week_with, week_dates, DailyRates,
    FetchFailure, RateSource, WeekOutcome, WeekRates, WeekReport, WEEK_LENGTH,
};
