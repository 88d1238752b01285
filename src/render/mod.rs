//! Chart rendering.
//!
//! This module converts chart requests into SVG line charts and
//! plain-text summaries. Rendering is kept apart from aggregation so the
//! same request can be drawn, exported, or printed.

pub mod generator;

// Re-export main types
pub use generator::{
    generate_chart_svg,
    generate_text_summary,
    ChartConfig,
    ChartRenderer,
    SvgChartRenderer,
};
