use std::path::Path;
use result_charts::aggregator::{Band, ChartRequest, Series};
use result_charts::output::validate_path;
use result_charts::output::{read_chart_json, write_chart_json, write_svg};
use result_charts::utils::config::SCHEMA_VERSION;
use tempfile::NamedTempFile;

fn create_test_chart() -> ChartRequest {
    ChartRequest {
        title: "Keijzer-10 number of repeated individuals".to_string(),
        x_label: "Generation".to_string(),
        y_label: "Normalized number of repeated individuals".to_string(),
        series: vec![Series {
            label: "numGens: 100 | popSize: 50 | tourSize: 3 | crossProb: 0.90 | elitism: True"
                .to_string(),
            x: vec![0, 1, 2],
            y: vec![0.5, 0.25, 0.125],
            band: Some(Band {
                lower: vec![0.25, 0.125, 0.0625],
                upper: vec![0.75, 0.375, 0.1875],
            }),
        }],
    }
}

#[test]
fn test_write_and_read_chart_json() {
    let chart = create_test_chart();
    let temp_file = NamedTempFile::new().unwrap();
    let path = temp_file.path();

    write_chart_json(&chart, path).unwrap();
    let loaded = read_chart_json(path).unwrap();

    assert_eq!(loaded.version, SCHEMA_VERSION);
    assert_eq!(loaded.chart, chart);
    assert!(chrono::DateTime::parse_from_rfc3339(&loaded.generated_at).is_ok());
}

#[test]
fn test_validate_output_path_empty() {
    let result = validate_path(Path::new(""));
    assert!(result.is_err());
}

#[test]
fn test_validate_output_path_directory() {
    let temp_dir = tempfile::tempdir().unwrap();
    let result = validate_path(temp_dir.path());
    assert!(result.is_err());
}

#[test]
fn test_json_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/chart.json");

    write_chart_json(&create_test_chart(), &nested_path).unwrap();

    assert!(nested_path.exists());
}

#[test]
fn test_svg_write_creates_parent_dirs() {
    let temp_dir = tempfile::tempdir().unwrap();
    let nested_path = temp_dir.path().join("nested/dirs/chart.svg");
    let valid_svg = r#"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100"></svg>"#;

    write_svg(valid_svg, &nested_path).unwrap();

    assert!(nested_path.exists());
}
