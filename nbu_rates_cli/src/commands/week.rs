//! The default command: fetch the last seven days and chart one currency.

use std::path::PathBuf;

use anyhow::Result;
use chrono::Local;
use clap::Args;
use nbu_rates_lib::chart::default_chart_path;
use nbu_rates_lib::{
    load_week_with, render_chart, validation, Config, Series, WeekOutcome, WeekReport,
    DEFAULT_CURRENCY,
};

use crate::output::{
    print_json, print_series_csv, print_series_markdown, print_series_table, OutputFormat,
};

pub const NO_DATA_MESSAGE: &str = "Не вдалося завантажити дані про курси валют.";

#[derive(Args)]
pub struct WeekArgs {
    /// Currency code to chart (e.g. USD, EUR, PLN)
    #[arg(long, default_value = DEFAULT_CURRENCY)]
    pub currency: String,

    /// Exchange endpoint URL (overrides NBU_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,

    /// Where to write the SVG chart (default: rates_<CODE>.svg)
    #[arg(long)]
    pub chart: Option<PathBuf>,

    /// Print the series without writing a chart
    #[arg(long)]
    pub no_chart: bool,
}

impl WeekArgs {
    fn chart_path(&self, code: &str) -> PathBuf {
        self.chart
            .clone()
            .unwrap_or_else(|| default_chart_path(code))
    }
}

pub fn currency_not_found_message(code: &str) -> String {
    format!("Не вдалося знайти дані для валюти {}", code)
}

pub async fn run(args: &WeekArgs, format: &OutputFormat) -> Result<()> {
    let code = validation::validate_currency_code(&args.currency)?;

    let mut config = Config::from_env()?;
    if let Some(ref base_url) = args.base_url {
        config.base_url = validation::validate_base_url(base_url)?;
    }
    let client = config.client()?;

    let today = Local::now().date_naive();
    tracing::info!(%today, currency = %code, "loading last 7 days of rates");
    let report = load_week_with(&client, today, &code, |failure| {
        eprintln!("{}", failure.diagnostic());
    })
    .await;

    if let Some(series) = report_outcome(&report) {
        print_series(series, format)?;
        if !args.no_chart {
            write_chart(series, args.chart_path(&code));
        }
    }

    Ok(())
}

/// Prints the final message for `report` and returns the series when there is one.
///
/// Per-date failures were already reported while the week was loading.
fn report_outcome(report: &WeekReport) -> Option<&Series> {
    match &report.outcome {
        WeekOutcome::NoData => {
            eprintln!("{}", NO_DATA_MESSAGE);
            None
        }
        WeekOutcome::CurrencyNotFound => {
            eprintln!("{}", currency_not_found_message(&report.code));
            None
        }
        WeekOutcome::Ready(series) => Some(series),
    }
}

fn print_series(series: &Series, format: &OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Table => print_series_table(series),
        OutputFormat::Json => print_json(series),
        OutputFormat::Csv => print_series_csv(series)?,
        OutputFormat::Markdown => print_series_markdown(series),
    }
    Ok(())
}

/// Chart failures are reported but do not change the exit status.
fn write_chart(series: &Series, path: PathBuf) {
    match render_chart(series, &path) {
        Ok(()) => eprintln!("Графік збережено у {}", path.display()),
        Err(e) => eprintln!("Не вдалося побудувати графік: {}", e),
    }
}
