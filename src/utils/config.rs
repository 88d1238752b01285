//! Configuration and constants for the CLI.

/// Current chart export schema version
pub const SCHEMA_VERSION: &str = "1.0.0";

/// Default chart canvas size in pixels
pub const DEFAULT_CHART_WIDTH: usize = 1200;
pub const DEFAULT_CHART_HEIGHT: usize = 720;

// Plot area margins (title on top, tick labels left/bottom)
pub const MARGIN_TOP: usize = 50;
pub const MARGIN_RIGHT: usize = 30;
pub const MARGIN_BOTTOM: usize = 60;
pub const MARGIN_LEFT: usize = 90;

/// Number of ticks drawn on each axis
pub const AXIS_TICKS: usize = 5;

/// Fill opacity of spread bands
pub const BAND_OPACITY: f64 = 0.2;

/// Line colors, cycled per series (matplotlib's default cycle)
pub const SERIES_PALETTE: &[&str] = &[
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

// Axis labels
pub const GENERATION_AXIS_LABEL: &str = "Generation";
pub const ITERATION_AXIS_LABEL: &str = "Iteration";
pub const FITNESS_AXIS_LABEL: &str = "Fitness";

/// File extension that selects JSON decoding of result records
pub const JSON_EXTENSION: &str = "json";
