//! SVG line-chart generation.
//!
//! Writes the SVG by hand instead of pulling in a plotting crate:
//! - One polyline per series, colors cycled from a fixed palette
//! - Translucent polygon for spread bands
//! - Axes with evenly spaced ticks, legend in the upper right

use crate::aggregator::chart::ChartRequest;
use crate::aggregator::series::Series;
use crate::utils::config::{
    AXIS_TICKS, BAND_OPACITY, DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH, MARGIN_BOTTOM,
    MARGIN_LEFT, MARGIN_RIGHT, MARGIN_TOP, SERIES_PALETTE,
};
use crate::utils::error::RenderError;
use log::{debug, info};
use std::fmt::Write;

/// Rendering sink for chart requests
pub trait ChartRenderer {
    /// Render a chart into a document string
    fn render(&self, chart: &ChartRequest) -> Result<String, RenderError>;
}

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub width: usize,
    pub height: usize,
    pub legend: bool,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            legend: true,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_size(mut self, width: usize, height: usize) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_legend(mut self, legend: bool) -> Self {
        self.legend = legend;
        self
    }
}

/// Hand-written SVG renderer
#[derive(Debug, Clone, Default)]
pub struct SvgChartRenderer {
    pub config: ChartConfig,
}

impl SvgChartRenderer {
    pub fn new(config: ChartConfig) -> Self {
        Self { config }
    }
}

impl ChartRenderer for SvgChartRenderer {
    fn render(&self, chart: &ChartRequest) -> Result<String, RenderError> {
        generate_chart_svg(chart, &self.config)
    }
}

/// Data-space bounds of everything drawn
#[derive(Debug, Clone, Copy)]
struct Bounds {
    x_min: f64,
    x_max: f64,
    y_min: f64,
    y_max: f64,
}

impl Bounds {
    fn of(chart: &ChartRequest) -> Option<Self> {
        let xs = chart.series.iter().flat_map(|s| s.x.iter().map(|&x| x as f64));
        let ys = chart.series.iter().flat_map(|s| {
            let band = s.band.iter().flat_map(|b| b.lower.iter().chain(b.upper.iter()));
            s.y.iter().chain(band).copied()
        });

        let (x_min, x_max) = min_max(xs)?;
        let (y_min, y_max) = min_max(ys)?;

        // Flat data still needs a non-zero span
        let (x_min, x_max) = if x_min == x_max {
            (x_min - 1.0, x_max + 1.0)
        } else {
            (x_min, x_max)
        };
        let pad = if y_min == y_max { 1.0 } else { (y_max - y_min) * 0.05 };

        Some(Self {
            x_min,
            x_max,
            y_min: y_min - pad,
            y_max: y_max + pad,
        })
    }
}

fn min_max(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values
        .filter(|v| v.is_finite())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Pixel-space plot area
#[derive(Debug, Clone, Copy)]
struct Plot {
    left: f64,
    top: f64,
    right: f64,
    bottom: f64,
    bounds: Bounds,
}

impl Plot {
    fn px(&self, x: f64) -> f64 {
        let b = &self.bounds;
        self.left + (x - b.x_min) / (b.x_max - b.x_min) * (self.right - self.left)
    }

    fn py(&self, y: f64) -> f64 {
        let b = &self.bounds;
        self.bottom - (y - b.y_min) / (b.y_max - b.y_min) * (self.bottom - self.top)
    }
}

/// Generate an SVG line chart from a chart request
pub fn generate_chart_svg(
    chart: &ChartRequest,
    config: &ChartConfig,
) -> Result<String, RenderError> {
    if config.width <= MARGIN_LEFT + MARGIN_RIGHT || config.height <= MARGIN_TOP + MARGIN_BOTTOM {
        return Err(RenderError::InvalidDimensions {
            width: config.width,
            height: config.height,
        });
    }

    let bounds = Bounds::of(chart).ok_or(RenderError::EmptyChart)?;
    info!(
        "Rendering chart '{}' with {} series",
        chart.title,
        chart.series.len()
    );

    let plot = Plot {
        left: MARGIN_LEFT as f64,
        top: MARGIN_TOP as f64,
        right: (config.width - MARGIN_RIGHT) as f64,
        bottom: (config.height - MARGIN_BOTTOM) as f64,
        bounds,
    };

    let mut svg = String::new();

    // Header
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = config.width,
        h = config.height
    );
    svg.push_str(
        r#"<style>.axis { font: 12px sans-serif; } .label { font: 14px sans-serif; }</style>"#,
    );
    let _ = write!(
        svg,
        r#"<rect x="0" y="0" width="{}" height="{}" fill="white"/>"#,
        config.width, config.height
    );

    // Title
    let _ = write!(
        svg,
        r#"<text x="{}" y="30" font-size="16" text-anchor="middle" font-weight="bold">{}</text>"#,
        config.width / 2,
        escape(&chart.title)
    );

    render_axes(&mut svg, &plot, chart);

    // Bands first so lines stay on top
    for (i, series) in chart.series.iter().enumerate() {
        render_band(&mut svg, &plot, series, series_color(i));
    }
    for (i, series) in chart.series.iter().enumerate() {
        render_line(&mut svg, &plot, series, series_color(i));
    }

    if config.legend {
        render_legend(&mut svg, &plot, &chart.series);
    }

    svg.push_str("</svg>");

    info!("Chart generated successfully ({} bytes)", svg.len());
    Ok(svg)
}

fn series_color(index: usize) -> &'static str {
    SERIES_PALETTE[index % SERIES_PALETTE.len()]
}

fn render_axes(out: &mut String, plot: &Plot, chart: &ChartRequest) {
    let b = plot.bounds;

    let _ = write!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="none" stroke="black"/>"#,
        plot.left,
        plot.top,
        plot.right - plot.left,
        plot.bottom - plot.top
    );

    for t in 0..=AXIS_TICKS {
        let frac = t as f64 / AXIS_TICKS as f64;

        let x_value = b.x_min + frac * (b.x_max - b.x_min);
        let x = plot.px(x_value);
        let _ = write!(
            out,
            r#"<line x1="{x:.2}" y1="{y1:.2}" x2="{x:.2}" y2="{y2:.2}" stroke="black"/><text class="axis" x="{x:.2}" y="{ty:.2}" text-anchor="middle">{label}</text>"#,
            x = x,
            y1 = plot.bottom,
            y2 = plot.bottom + 5.0,
            ty = plot.bottom + 20.0,
            label = format_tick(x_value)
        );

        let y_value = b.y_min + frac * (b.y_max - b.y_min);
        let y = plot.py(y_value);
        let _ = write!(
            out,
            r#"<line x1="{x1:.2}" y1="{y:.2}" x2="{x2:.2}" y2="{y:.2}" stroke="black"/><text class="axis" x="{tx:.2}" y="{ty:.2}" text-anchor="end">{label}</text>"#,
            x1 = plot.left - 5.0,
            x2 = plot.left,
            y = y,
            tx = plot.left - 8.0,
            ty = y + 4.0,
            label = format_tick(y_value)
        );
    }

    let _ = write!(
        out,
        r#"<text class="label" x="{:.2}" y="{:.2}" text-anchor="middle">{}</text>"#,
        (plot.left + plot.right) / 2.0,
        plot.bottom + 45.0,
        escape(&chart.x_label)
    );
    let ly = (plot.top + plot.bottom) / 2.0;
    let _ = write!(
        out,
        r#"<text class="label" x="20" y="{ly:.2}" text-anchor="middle" transform="rotate(-90 20 {ly:.2})">{}</text>"#,
        escape(&chart.y_label),
        ly = ly
    );
}

fn render_band(out: &mut String, plot: &Plot, series: &Series, color: &str) {
    let Some(band) = &series.band else {
        return;
    };

    let upper = series.x.iter().zip(&band.upper);
    let lower = series.x.iter().zip(&band.lower).rev();
    let points: Vec<String> = upper
        .chain(lower)
        .filter(|(_, y)| y.is_finite())
        .map(|(&x, &y)| format!("{:.2},{:.2}", plot.px(x as f64), plot.py(y)))
        .collect();

    if points.len() < 3 {
        return;
    }

    let _ = write!(
        out,
        r#"<polygon points="{}" fill="{}" fill-opacity="{}" stroke="none"/>"#,
        points.join(" "),
        color,
        BAND_OPACITY
    );
}

fn render_line(out: &mut String, plot: &Plot, series: &Series, color: &str) {
    let points: Vec<String> = series
        .x
        .iter()
        .zip(&series.y)
        .filter(|(_, y)| y.is_finite())
        .map(|(&x, &y)| format!("{:.2},{:.2}", plot.px(x as f64), plot.py(y)))
        .collect();

    debug!("Series '{}': {} drawable points", series.label, points.len());

    let _ = write!(
        out,
        r#"<polyline points="{}" fill="none" stroke="{}" stroke-width="1.5"><title>{}</title></polyline>"#,
        points.join(" "),
        color,
        escape(&series.label)
    );
}

fn render_legend(out: &mut String, plot: &Plot, series: &[Series]) {
    if series.is_empty() {
        return;
    }

    let char_width = 7.0;
    let longest = series.iter().map(|s| s.label.chars().count()).max().unwrap_or(0);
    let box_width = 40.0 + longest as f64 * char_width;
    let row_height = 18.0;
    let box_height = 8.0 + series.len() as f64 * row_height;
    let x = plot.right - box_width - 10.0;
    let y = plot.top + 10.0;

    let _ = write!(
        out,
        r#"<rect x="{:.2}" y="{:.2}" width="{:.2}" height="{:.2}" fill="white" fill-opacity="0.8" stroke="lightgray" rx="3"/>"#,
        x, y, box_width, box_height
    );

    for (i, s) in series.iter().enumerate() {
        let row_y = y + 4.0 + (i as f64 + 0.5) * row_height;
        let _ = write!(
            out,
            r#"<line x1="{:.2}" y1="{:.2}" x2="{:.2}" y2="{:.2}" stroke="{}" stroke-width="2"/><text class="axis" x="{:.2}" y="{:.2}">{}</text>"#,
            x + 6.0,
            row_y,
            x + 30.0,
            row_y,
            series_color(i),
            x + 36.0,
            row_y + 4.0,
            escape(&s.label)
        );
    }
}

fn format_tick(value: f64) -> String {
    if value.abs() >= 1000.0 || value.fract() == 0.0 {
        format!("{:.0}", value)
    } else {
        format!("{:.3}", value)
    }
}

/// Escape text for use inside SVG elements and attributes
fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Create a plain-text summary table of a chart
pub fn generate_text_summary(chart: &ChartRequest) -> String {
    let mut lines = Vec::new();

    lines.push(format!("  {}", chart.title));
    lines.push(format!("  {}", "━".repeat(96)));
    lines.push(format!(
        "  {:<54} {:>7} {:>10} {:>10} {:>10}",
        "Series", "Points", "First", "Last", "Min"
    ));
    lines.push(format!("  {}", "━".repeat(96)));

    for series in &chart.series {
        let display_label = if series.label.chars().count() > 54 {
            let skip = series.label.chars().count() - 51;
            let tail: String = series.label.chars().skip(skip).collect();
            format!("...{}", tail)
        } else {
            series.label.clone()
        };

        let first = series.y.first().copied().unwrap_or(f64::NAN);
        let last = series.y.last().copied().unwrap_or(f64::NAN);
        let min = series.y.iter().copied().fold(f64::INFINITY, f64::min);

        lines.push(format!(
            "  {:<54} {:>7} {:>10.4} {:>10.4} {:>10.4}",
            display_label,
            series.len(),
            first,
            last,
            min
        ));
    }

    lines.push(format!("  {}", "━".repeat(96)));
    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::series::Band;

    fn chart(series: Vec<Series>) -> ChartRequest {
        ChartRequest {
            title: "Test <chart>".to_string(),
            x_label: "Generation".to_string(),
            y_label: "Fitness".to_string(),
            series,
        }
    }

    fn series(label: &str, y: Vec<f64>) -> Series {
        Series {
            label: label.to_string(),
            x: (0..y.len()).collect(),
            y,
            band: None,
        }
    }

    #[test]
    fn test_empty_chart_is_rejected() {
        let result = generate_chart_svg(&chart(vec![]), &ChartConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyChart)));

        let result = generate_chart_svg(&chart(vec![series("a", vec![])]), &ChartConfig::default());
        assert!(matches!(result, Err(RenderError::EmptyChart)));
    }

    #[test]
    fn test_invalid_dimensions() {
        let config = ChartConfig::new().with_size(50, 50);
        let result = generate_chart_svg(&chart(vec![series("a", vec![1.0])]), &config);
        assert!(matches!(result, Err(RenderError::InvalidDimensions { .. })));
    }

    #[test]
    fn test_title_is_escaped() {
        let request = chart(vec![series("a", vec![1.0, 2.0])]);
        let svg = generate_chart_svg(&request, &ChartConfig::default()).unwrap();
        assert!(svg.contains("Test &lt;chart&gt;"));
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
    }

    #[test]
    fn test_band_becomes_polygon() {
        let mut s = series("a", vec![1.0, 2.0, 3.0]);
        s.band = Some(Band {
            lower: vec![0.5, 1.5, 2.5],
            upper: vec![1.5, 2.5, 3.5],
        });
        let svg = generate_chart_svg(&chart(vec![s]), &ChartConfig::default()).unwrap();
        assert_eq!(svg.matches("<polygon").count(), 1);
    }

    #[test]
    fn test_legend_toggle() {
        let c = chart(vec![series("alpha", vec![1.0, 2.0])]);
        let with = generate_chart_svg(&c, &ChartConfig::default()).unwrap();
        let without = generate_chart_svg(&c, &ChartConfig::new().with_legend(false)).unwrap();
        assert!(with.matches("alpha").count() > without.matches("alpha").count());
    }

    #[test]
    fn test_text_summary_columns() {
        let summary = generate_text_summary(&chart(vec![series("run", vec![3.0, 1.0, 2.0])]));
        assert!(summary.contains("run"));
        assert!(summary.contains("1.0000"));
        assert!(summary.contains("2.0000"));
    }
}
