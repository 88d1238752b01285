//! Compare and detail command implementations.
//!
//! The compare command:
//! 1. Reads and decodes every result file
//! 2. Selects and prints the best record
//! 3. Builds the chart request
//! 4. Renders the SVG chart
//! 5. Writes output files

use super::models::{CompareArgs, DetailArgs};
use super::utils::format_best_summary;
use crate::aggregator::{build_chart_request, build_detail_chart, ChartRequest};
use crate::output::{write_chart_json, write_svg};
use crate::parser::{read_record, read_records};
use crate::render::{generate_text_summary, ChartRenderer, SvgChartRenderer};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the compare command
///
/// **Public** - main entry point called from main.rs
///
/// # Errors
/// * No input files
/// * Malformed or truncated result files
/// * Metric family not available for the records
/// * File write errors
pub fn execute_compare(args: CompareArgs) -> Result<()> {
    let start_time = Instant::now();

    info!("Comparing {} result files", args.files.len());

    // Step 1: Decode records
    info!("Step 1/4: Reading result files...");
    let records = read_records(&args.files).context("Failed to read result files")?;

    // Step 2: Best record summary
    info!("Step 2/4: Selecting best record...");
    let summary = format_best_summary(&records).context("Failed to select best record")?;
    println!("{}", summary);

    // Step 3: Aggregate
    info!("Step 3/4: Building {:?} chart...", args.options.family);
    let chart = build_chart_request(&records, &args.options).context("Failed to build chart")?;

    for series in &chart.series {
        debug!("  {} ({} points)", series.label, series.len());
    }

    // Step 4: Render and write
    info!("Step 4/4: Writing outputs...");
    emit_chart(
        &chart,
        &SvgChartRenderer::new(args.chart_config.clone()),
        args.output_svg.as_ref(),
        args.output_json.as_ref(),
        args.print_summary,
    )?;

    info!("Compare completed in {:.2}s", start_time.elapsed().as_secs_f64());
    Ok(())
}

/// Execute the detail command on a single result file
pub fn execute_detail(args: DetailArgs) -> Result<()> {
    info!("Building detail chart for: {}", args.file.display());

    let record = read_record(&args.file)
        .with_context(|| format!("Failed to read result file {}", args.file.display()))?;

    let summary = format_best_summary(std::slice::from_ref(&record))
        .context("Failed to summarize record")?;
    println!("{}", summary);

    let chart = build_detail_chart(&record, args.phase, args.title.clone())
        .context("Failed to build detail chart")?;

    emit_chart(
        &chart,
        &SvgChartRenderer::new(args.chart_config.clone()),
        args.output_svg.as_ref(),
        args.output_json.as_ref(),
        args.print_summary,
    )
}

/// Render and write a chart to whichever outputs were requested
fn emit_chart(
    chart: &ChartRequest,
    renderer: &dyn ChartRenderer,
    output_svg: Option<&PathBuf>,
    output_json: Option<&PathBuf>,
    print_summary: bool,
) -> Result<()> {
    if let Some(svg_path) = output_svg {
        let svg = renderer.render(chart).context("Failed to render chart")?;
        write_svg(&svg, svg_path).context("Failed to write chart SVG")?;
        info!("✓ Chart written to: {}", svg_path.display());
    }

    if let Some(json_path) = output_json {
        write_chart_json(chart, json_path).context("Failed to write chart JSON")?;
        info!("✓ Chart data written to: {}", json_path.display());
    }

    if print_summary {
        println!("\n{}", generate_text_summary(chart));
    }

    Ok(())
}

/// Validate compare arguments
///
/// **Public** - can be called before execute_compare for early validation
pub fn validate_args(args: &CompareArgs) -> Result<()> {
    if args.files.is_empty() {
        anyhow::bail!("At least one result file is required");
    }

    validate_outputs(
        args.output_svg.is_some(),
        args.output_json.is_some(),
        args.print_summary,
    )?;
    validate_size(args.chart_config.width, args.chart_config.height)
}

/// Validate detail arguments
pub fn validate_detail_args(args: &DetailArgs) -> Result<()> {
    if args.file.as_os_str().is_empty() {
        anyhow::bail!("A result file is required");
    }

    validate_outputs(
        args.output_svg.is_some(),
        args.output_json.is_some(),
        args.print_summary,
    )?;
    validate_size(args.chart_config.width, args.chart_config.height)
}

fn validate_outputs(svg: bool, json: bool, summary: bool) -> Result<()> {
    if !svg && !json && !summary {
        anyhow::bail!("Nothing to output: enable an SVG, JSON or text summary output");
    }
    Ok(())
}

fn validate_size(width: usize, height: usize) -> Result<()> {
    if width == 0 || height == 0 {
        anyhow::bail!("Chart width and height must be greater than 0");
    }

    if width > 10_000 || height > 10_000 {
        anyhow::bail!("Chart is too large (max 10000x10000)");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_args_valid() {
        let args = CompareArgs {
            files: vec![PathBuf::from("a.bin")],
            ..Default::default()
        };

        assert!(validate_args(&args).is_ok());
    }

    #[test]
    fn test_validate_args_no_files() {
        let args = CompareArgs::default();
        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_no_outputs() {
        let args = CompareArgs {
            files: vec![PathBuf::from("a.bin")],
            output_svg: None,
            ..Default::default()
        };

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_args_zero_width() {
        let mut args = CompareArgs {
            files: vec![PathBuf::from("a.bin")],
            ..Default::default()
        };
        args.chart_config.width = 0;

        assert!(validate_args(&args).is_err());
    }

    #[test]
    fn test_validate_detail_args_no_file() {
        assert!(validate_detail_args(&DetailArgs::default()).is_err());
    }
}
