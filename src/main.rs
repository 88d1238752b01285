//! Result Charts CLI
//!
//! Reads experiment result files, prints the best run and renders
//! comparison or detail charts.

use anyhow::Result;
use clap::{Parser, Subcommand};
use env_logger::Env;
use std::path::PathBuf;

use result_charts::aggregator::{ChartOptions, MetricFamily, Phase};
use result_charts::commands::{
    display_best, display_version, execute_compare, execute_detail, validate_args,
    validate_detail_args, CompareArgs, DetailArgs,
};
use result_charts::render::ChartConfig;
use result_charts::utils::config::{DEFAULT_CHART_HEIGHT, DEFAULT_CHART_WIDTH};

/// Result Charts - statistics and charts for experiment results
#[derive(Parser, Debug)]
#[command(name = "result-charts")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,
}

/// Chart output options shared by compare and detail
#[derive(clap::Args, Debug)]
struct OutputOpts {
    /// Output path for the SVG chart
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Output path for the JSON chart export
    #[arg(long)]
    json: Option<PathBuf>,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: usize,

    /// Chart height in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_HEIGHT)]
    height: usize,

    /// Hide the legend
    #[arg(long)]
    no_legend: bool,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,
}

impl OutputOpts {
    fn chart_config(&self) -> ChartConfig {
        ChartConfig::new()
            .with_size(self.width, self.height)
            .with_legend(!self.no_legend)
    }

    /// Default to an SVG file when no output was asked for
    fn svg_path(&self, fallback: &str) -> Option<PathBuf> {
        match (&self.output, &self.json, self.summary) {
            (Some(path), _, _) => Some(path.clone()),
            (None, None, false) => Some(PathBuf::from(fallback)),
            _ => None,
        }
    }
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the best run among result files
    Best {
        /// Result files
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Chart one metric across several result files
    Compare {
        /// Result files
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Metric family to plot
        #[arg(short, long, value_enum, default_value_t = MetricFamily::Fitness)]
        metric: MetricFamily,

        /// Train or test statistics
        #[arg(short, long, value_enum, default_value_t = Phase::Train)]
        phase: Phase,

        #[command(flatten)]
        out: OutputOpts,
    },

    /// Chart the spread of a single result file
    Detail {
        /// Result file
        file: PathBuf,

        /// Train or test statistics
        #[arg(short, long, value_enum, default_value_t = Phase::Train)]
        phase: Phase,

        #[command(flatten)]
        out: OutputOpts,
    },

    /// Display version information
    Version,
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    match cli.command {
        Commands::Best { files } => {
            display_best(&files)?;
        }

        Commands::Compare {
            files,
            metric,
            phase,
            out,
        } => {
            let args = CompareArgs {
                files,
                options: ChartOptions {
                    family: metric,
                    phase,
                    title: out.title.clone(),
                },
                output_svg: out.svg_path("chart.svg"),
                output_json: out.json.clone(),
                chart_config: out.chart_config(),
                print_summary: out.summary,
            };

            validate_args(&args)?;
            execute_compare(args)?;
        }

        Commands::Detail { file, phase, out } => {
            let args = DetailArgs {
                file,
                phase,
                title: out.title.clone(),
                output_svg: out.svg_path("detail.svg"),
                output_json: out.json.clone(),
                chart_config: out.chart_config(),
                print_summary: out.summary,
            };

            validate_detail_args(&args)?;
            execute_detail(args)?;
        }

        Commands::Version => {
            display_version();
        }
    }

    Ok(())
}
