use anyhow::Result;
use nbu_rates_lib::Series;
use serde::Serialize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug, PartialEq)]
pub enum OutputFormat {
    Table,
    Json,
    Csv,
    Markdown,
}

impl OutputFormat {
    /// Unknown names fall back to the table format.
    pub fn parse(name: &str) -> Self {
        match name.trim().to_lowercase().as_str() {
            "json" => OutputFormat::Json,
            "csv" => OutputFormat::Csv,
            "markdown" | "md" => OutputFormat::Markdown,
            _ => OutputFormat::Table,
        }
    }
}

#[derive(Tabled, Serialize)]
struct SeriesRow {
    #[tabled(rename = "Date")]
    #[serde(rename = "Date")]
    date: String,
    #[tabled(rename = "Rate")]
    #[serde(rename = "Rate")]
    rate: String,
}

// -- Row builders --

fn build_series_rows(series: &Series) -> Vec<SeriesRow> {
    series
        .points()
        .iter()
        .map(|p| SeriesRow {
            date: p.label(),
            rate: format_rate(p.rate),
        })
        .collect()
}

// -- Table output --

pub fn print_series_table(series: &Series) {
    println!("{}", Table::new(build_series_rows(series)));
}

// -- Markdown output --

pub fn print_series_markdown(series: &Series) {
    let mut table = Table::new(build_series_rows(series));
    table.with(Style::markdown());
    println!("{}", table);
}

// -- CSV output --

pub fn print_series_csv(series: &Series) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(std::io::stdout());
    for row in build_series_rows(series) {
        wtr.serialize(row)?;
    }
    wtr.flush()?;
    Ok(())
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

/// NBU publishes rates with four decimal places.
fn format_rate(rate: f64) -> String {
    format!("{:.4}", rate)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use nbu_rates_lib::SeriesPoint;

    fn sample_series() -> Series {
        Series::new(
            "USD",
            vec![
                SeriesPoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 2).unwrap(),
                    rate: 39.0,
                },
                SeriesPoint {
                    date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
                    rate: 38.5123,
                },
            ],
        )
    }

    // -- format_rate tests --

    #[test]
    fn test_format_rate_pads_to_four_places() {
        assert_eq!(format_rate(39.0), "39.0000");
    }

    #[test]
    fn test_format_rate_rounds() {
        assert_eq!(format_rate(41.123456), "41.1235");
    }

    // -- OutputFormat parsing --

    #[test]
    fn test_output_format_parse() {
        assert_eq!(OutputFormat::parse("json"), OutputFormat::Json);
        assert_eq!(OutputFormat::parse("CSV"), OutputFormat::Csv);
        assert_eq!(OutputFormat::parse("md"), OutputFormat::Markdown);
        assert_eq!(OutputFormat::parse("table"), OutputFormat::Table);
        assert_eq!(OutputFormat::parse("yaml"), OutputFormat::Table);
    }

    // -- Row builder tests --

    #[test]
    fn test_build_series_rows_keep_series_order() {
        let rows = build_series_rows(&sample_series());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].date, "2024-01-02");
        assert_eq!(rows[0].rate, "39.0000");
        assert_eq!(rows[1].date, "2024-01-01");
        assert_eq!(rows[1].rate, "38.5123");
    }

    #[test]
    fn test_build_series_rows_empty() {
        let rows = build_series_rows(&Series::new("USD", Vec::new()));
        assert!(rows.is_empty());
    }

    // -- CSV output tests --

    fn csv_from_rows<T: Serialize>(rows: &[T]) -> String {
        let mut wtr = csv::Writer::from_writer(Vec::new());
        for row in rows {
            wtr.serialize(row).unwrap();
        }
        wtr.flush().unwrap();
        String::from_utf8(wtr.into_inner().unwrap()).unwrap()
    }

    #[test]
    fn test_csv_series_headers() {
        let rows = build_series_rows(&sample_series());
        let csv = csv_from_rows(&rows);
        let mut lines = csv.lines();
        assert_eq!(lines.next().unwrap(), "Date,Rate");
        assert_eq!(lines.next().unwrap(), "2024-01-02,39.0000");
    }

    // -- JSON output tests --

    #[test]
    fn test_json_series_serializable() {
        let val = serde_json::to_value(sample_series()).unwrap();
        assert_eq!(val["code"], "USD");
        assert_eq!(val["points"].as_array().unwrap().len(), 2);
    }

    // -- Markdown output tests --

    #[test]
    fn test_markdown_series_structure() {
        let rows = build_series_rows(&sample_series());
        let mut table = Table::new(&rows);
        table.with(Style::markdown());
        let md = table.to_string();

        assert!(md.contains('|'));
        assert!(md.contains("---"));
        let header_line = md.lines().next().unwrap();
        assert!(header_line.contains("Date"));
        assert!(header_line.contains("Rate"));
    }
}
