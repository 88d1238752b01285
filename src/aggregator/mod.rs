//! Aggregation of result records into plottable series.
//!
//! This module transforms decoded result records into:
//! - Labeled (x, y) series, optionally with spread bands
//! - The best record of a batch
//! - Complete chart requests (series plus axis labels and title)

pub mod chart;
pub mod selection;
pub mod series;
pub mod stats;

// Re-export main types and functions
pub use chart::{
    build_chart_request, build_detail_chart, ChartOptions, ChartRequest, MetricFamily,
};
pub use selection::{select_best, select_best_index};
pub use series::{
    extract_repeated_series, extract_series, extract_spread_series, Band, IterationMetric, Metric,
    Phase, Series, StepStart,
};
