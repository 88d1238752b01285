use crate::aggregator::select_best_index;
use crate::parser::read_records;
use crate::parser::schema::ResultRecord;
use crate::utils::config::SCHEMA_VERSION;
use crate::utils::error::AnalysisError;
use anyhow::{Context, Result};
use std::path::PathBuf;

/// Summary of the best record among `records`
///
/// Colony records have no individual size or textual form, so those
/// lines are left out for them.
pub fn format_best_summary(records: &[ResultRecord]) -> Result<String, AnalysisError> {
    let index = select_best_index(records)?;
    let best = &records[index];
    let stats = best
        .final_stats()
        .ok_or(AnalysisError::MissingFinalStats { index })?;

    let mut lines = vec![
        format!("Best individual: {}", best.label()),
        format!(
            "  Average Fitness: {} +/- {}",
            stats.best_fitness.mean, stats.best_fitness.stddev
        ),
        format!("  Fitness: {}", stats.best_individual_fitness),
    ];

    if let ResultRecord::Evolution(_) = best {
        lines.push(format!("  Size: {}", stats.best_individual_size));
        lines.push(format!("  Str: {}", stats.best_individual_str));
    }

    Ok(lines.join("\n"))
}

/// Print the best record among the given files
pub fn display_best(files: &[PathBuf]) -> Result<()> {
    if files.is_empty() {
        anyhow::bail!("At least one result file is required");
    }

    let records = read_records(files).context("Failed to read result files")?;
    let summary = format_best_summary(&records).context("Failed to select best record")?;
    println!("{}", summary);

    Ok(())
}

/// Display version information
pub fn display_version() {
    println!("Result Charts v{}", env!("CARGO_PKG_VERSION"));
    println!("Chart Export Schema: v{}", SCHEMA_VERSION);
    println!();
    println!("Statistics and charts for genetic-programming and ant-colony results.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_best_requires_files() {
        assert!(display_best(&[]).is_err());
    }

    #[test]
    fn test_summary_of_nothing() {
        assert_eq!(format_best_summary(&[]).unwrap_err(), AnalysisError::EmptyInput);
    }
}
