//! JSON chart export.
//!
//! Writes the series data of a chart request so it can be re-plotted
//! elsewhere. Exports are versioned and timestamped.

use super::{ensure_parent_dir, validate_path};
use crate::aggregator::chart::ChartRequest;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

/// Top-level structure written to JSON
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartExport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Timestamp when the export was generated
    pub generated_at: String,

    /// The chart itself
    pub chart: ChartRequest,
}

impl ChartExport {
    pub fn new(chart: ChartRequest) -> Self {
        Self {
            version: SCHEMA_VERSION.to_string(),
            generated_at: chrono::Utc::now().to_rfc3339(),
            chart,
        }
    }
}

/// Write a chart to a JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_chart_json(
    chart: &ChartRequest,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing chart data to: {}", output_path.display());

    validate_path(output_path)?;
    ensure_parent_dir(output_path)?;

    let file = File::create(output_path).map_err(OutputError::WriteFailed)?;
    let writer = BufWriter::new(file);

    let export = ChartExport::new(chart.clone());
    serde_json::to_writer_pretty(writer, &export).map_err(OutputError::SerializationFailed)?;

    info!(
        "Chart data written successfully ({} bytes)",
        calculate_file_size(output_path)
    );

    Ok(())
}

/// Read a chart export from a JSON file
///
/// # Errors
/// * `OutputError::WriteFailed` - File read error (reusing WriteFailed for I/O)
/// * `OutputError::SerializationFailed` - JSON parse error
pub fn read_chart_json(input_path: impl AsRef<Path>) -> Result<ChartExport, OutputError> {
    let input_path = input_path.as_ref();

    debug!("Reading chart data from: {}", input_path.display());

    let file = File::open(input_path).map_err(OutputError::WriteFailed)?;
    let export: ChartExport =
        serde_json::from_reader(file).map_err(OutputError::SerializationFailed)?;

    debug!(
        "Chart export loaded: version {}, {} series",
        export.version,
        export.chart.series.len()
    );

    Ok(export)
}

fn calculate_file_size(path: &Path) -> u64 {
    std::fs::metadata(path).map(|m| m.len()).unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::series::{Band, Series};
    use tempfile::NamedTempFile;

    fn create_test_chart() -> ChartRequest {
        ChartRequest {
            title: "Test".to_string(),
            x_label: "Iteration".to_string(),
            y_label: "Fitness".to_string(),
            series: vec![Series {
                label: "numAnts: 10 | numIterations: 3 | decay: 0.10".to_string(),
                x: vec![1, 2],
                y: vec![4.0, 3.5],
                band: Some(Band {
                    lower: vec![3.0, 3.0],
                    upper: vec![5.0, 4.0],
                }),
            }],
        }
    }

    #[test]
    fn test_write_and_read_chart() {
        let chart = create_test_chart();
        let temp_file = NamedTempFile::new().unwrap();

        write_chart_json(&chart, temp_file.path()).unwrap();
        let loaded = read_chart_json(temp_file.path()).unwrap();

        assert_eq!(loaded.version, SCHEMA_VERSION);
        assert_eq!(loaded.chart, chart);
    }

    #[test]
    fn test_band_omitted_when_absent() {
        let mut chart = create_test_chart();
        chart.series[0].band = None;
        let json = serde_json::to_string(&ChartExport::new(chart)).unwrap();
        assert!(!json.contains("band"));
    }

    #[test]
    fn test_write_empty_path() {
        let result = write_chart_json(&create_test_chart(), "");
        assert!(matches!(result, Err(OutputError::InvalidPath(_))));
    }
}
