use crate::aggregator::{ChartOptions, Phase};
use crate::render::ChartConfig;
use std::path::PathBuf;

/// Arguments for the compare command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct CompareArgs {
    /// Result files, one record each
    pub files: Vec<PathBuf>,

    /// Metric family, phase and title
    pub options: ChartOptions,

    /// Output path for the SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Output path for the JSON chart export (optional)
    pub output_json: Option<PathBuf>,

    /// Chart canvas configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for CompareArgs {
    fn default() -> Self {
        Self {
            files: Vec::new(),
            options: ChartOptions::default(),
            output_svg: Some(PathBuf::from("chart.svg")),
            output_json: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

/// Arguments for the detail command
#[derive(Debug, Clone)]
pub struct DetailArgs {
    /// Single result file
    pub file: PathBuf,

    /// Train or test stats (generation-indexed results only)
    pub phase: Phase,

    /// Chart title override
    pub title: Option<String>,

    /// Output path for the SVG chart (optional)
    pub output_svg: Option<PathBuf>,

    /// Output path for the JSON chart export (optional)
    pub output_json: Option<PathBuf>,

    /// Chart canvas configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for DetailArgs {
    fn default() -> Self {
        Self {
            file: PathBuf::new(),
            phase: Phase::Train,
            title: None,
            output_svg: Some(PathBuf::from("detail.svg")),
            output_json: None,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}
