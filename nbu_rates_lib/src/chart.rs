//! Line chart rendering for a currency series.
//!
//! Charts are drawn with `plotters` onto an SVG surface. Dates are placed on
//! a categorical axis in series order, so the caller controls the left-to-right
//! sequence.

use std::path::{Path, PathBuf};

use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::FontTransform;

use crate::series::Series;

/// Chart size in pixels.
pub const CHART_SIZE: (u32, u32) = (1000, 500);

const FONT: &str = "sans-serif";
const LINE_COLOR: RGBColor = BLUE;

/// Errors from chart rendering.
#[derive(thiserror::Error, Debug)]
pub enum ChartError {
    #[error("No data to chart for currency {code}")]
    EmptySeries { code: String },
    #[error("Failed to draw chart: {0}")]
    Draw(String),
    #[error("Failed to write chart to {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Default output file for `code`, e.g. `rates_USD.svg`.
pub fn default_chart_path(code: &str) -> PathBuf {
    PathBuf::from(format!("rates_{}.svg", code))
}

pub fn chart_title(code: &str) -> String {
    format!("Зміна курсу {} за останні 7 днів", code)
}

/// Renders `series` as an SVG document.
pub fn render_svg(series: &Series) -> Result<String, ChartError> {
    if series.is_empty() {
        return Err(ChartError::EmptySeries {
            code: series.code().to_string(),
        });
    }

    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, CHART_SIZE).into_drawing_area();
        draw(&root, series)?;
        root.present().map_err(draw_error)?;
    }
    Ok(svg)
}

/// Renders `series` and writes it to `path`.
pub fn render_chart(series: &Series, path: &Path) -> Result<(), ChartError> {
    let svg = render_svg(series)?;
    std::fs::write(path, svg).map_err(|source| ChartError::Write {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(path = %path.display(), points = series.len(), "chart written");
    Ok(())
}

fn draw(root: &DrawingArea<SVGBackend<'_>, Shift>, series: &Series) -> Result<(), ChartError> {
    let labels = series.labels();
    // Discrete ranges are inclusive; keep at least two segments for a single point.
    let x_end = (labels.len() as i32 - 1).max(1);
    let (y_min, y_max) = padded_range(series);

    root.fill(&WHITE).map_err(draw_error)?;

    let mut chart = ChartBuilder::on(root)
        .caption(chart_title(series.code()), (FONT, 28))
        .margin(20)
        .x_label_area_size(x_label_area(&labels))
        .y_label_area_size(80)
        .build_cartesian_2d((0..x_end).into_segmented(), y_min..y_max)
        .map_err(draw_error)?;

    let label_for = |value: &SegmentValue<i32>| match value {
        SegmentValue::CenterOf(i) | SegmentValue::Exact(i) => labels
            .get(*i as usize)
            .cloned()
            .unwrap_or_default(),
        SegmentValue::Last => String::new(),
    };

    chart
        .configure_mesh()
        .x_labels(labels.len())
        .x_label_formatter(&label_for)
        // plotters only rotates text in quarter turns; vertical labels stand in for a 45° tilt.
        .x_label_style((FONT, 14).into_font().transform(FontTransform::Rotate90))
        .y_label_formatter(&|rate| format!("{:.2}", rate))
        .x_desc("Дата")
        .y_desc("Курс")
        .axis_desc_style((FONT, 18))
        .light_line_style(BLACK.mix(0.08))
        .bold_line_style(BLACK.mix(0.2))
        .draw()
        .map_err(draw_error)?;

    let points: Vec<(SegmentValue<i32>, f64)> = series
        .points()
        .iter()
        .enumerate()
        .map(|(i, p)| (SegmentValue::CenterOf(i as i32), p.rate))
        .collect();

    chart
        .draw_series(LineSeries::new(points.clone(), LINE_COLOR.stroke_width(2)))
        .map_err(draw_error)?
        .label(series.code())
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], LINE_COLOR.stroke_width(2)));

    chart
        .draw_series(
            points
                .into_iter()
                .map(|point| Circle::new(point, 5, LINE_COLOR.filled())),
        )
        .map_err(draw_error)?;

    chart
        .configure_series_labels()
        .label_font((FONT, 16))
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()
        .map_err(draw_error)?;

    Ok(())
}

/// Y-axis range with a margin around the data; a flat series still gets height.
fn padded_range(series: &Series) -> (f64, f64) {
    let (lo, hi) = series.bounds().unwrap_or((0.0, 1.0));
    let span = hi - lo;
    let pad = if span > f64::EPSILON {
        span * 0.1
    } else {
        (hi.abs() * 0.01).max(0.01)
    };
    (lo - pad, hi + pad)
}

/// Room under the plot for vertically drawn date labels plus the axis title.
fn x_label_area(labels: &[String]) -> u32 {
    let longest = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0) as u32;
    longest * 9 + 40
}

fn draw_error<E: std::fmt::Display>(e: E) -> ChartError {
    ChartError::Draw(e.to_string())
}
