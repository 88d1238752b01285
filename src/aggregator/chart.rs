//! Assembly of chart requests from batches of records.
//!
//! A chart request is everything the renderer needs: the series, both
//! axis labels and a title. Nothing here draws.

use super::series::{
    extract_repeated_series, extract_series, extract_spread_series, IterationMetric, Metric, Phase,
    Series, StepStart,
};
use crate::parser::schema::ResultRecord;
use crate::utils::config::{FITNESS_AXIS_LABEL, GENERATION_AXIS_LABEL, ITERATION_AXIS_LABEL};
use crate::utils::error::AnalysisError;
use log::{debug, info};
use serde::{Deserialize, Serialize};

/// Metric family plotted by a comparison chart
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum MetricFamily {
    #[default]
    Fitness,
    Size,
    NumRepeated,
    NumCrossBetter,
    NumMutBetter,
}

impl MetricFamily {
    /// Per-step metric backing this family
    pub fn metric(self) -> Metric {
        match self {
            MetricFamily::Fitness => Metric::BestFitness,
            MetricFamily::Size => Metric::BestSize,
            MetricFamily::NumRepeated => Metric::NumRepeated,
            MetricFamily::NumCrossBetter => Metric::NumCrossBetter,
            MetricFamily::NumMutBetter => Metric::NumMutBetter,
        }
    }

    /// Y axis label for this family
    pub fn y_label(self) -> &'static str {
        match self {
            MetricFamily::Fitness => FITNESS_AXIS_LABEL,
            MetricFamily::Size => "Number of elements of the best individual",
            MetricFamily::NumRepeated => "Normalized number of repeated individuals",
            MetricFamily::NumCrossBetter => {
                "Normalized number of crossover children better than parents"
            }
            MetricFamily::NumMutBetter => {
                "Normalized number of mutated children better than parents"
            }
        }
    }

    fn description(self) -> &'static str {
        match self {
            MetricFamily::Fitness => "Best fitness",
            MetricFamily::Size => "Best individual size",
            MetricFamily::NumRepeated => "Repeated individuals",
            MetricFamily::NumCrossBetter => "Crossover improvements",
            MetricFamily::NumMutBetter => "Mutation improvements",
        }
    }
}

/// What a comparison chart should show
#[derive(Debug, Clone, Default)]
pub struct ChartOptions {
    pub family: MetricFamily,
    pub phase: Phase,
    /// Overrides the generated title
    pub title: Option<String>,
}

/// Series plus axis metadata, handed to a renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub series: Vec<Series>,
}

impl ChartRequest {
    /// Total number of points across all series
    pub fn point_count(&self) -> usize {
        self.series.iter().map(Series::len).sum()
    }
}

/// Build a comparison chart with one curve per record
///
/// **Public** - main entry point for multi-file charts
///
/// Series keep the input order of `records`. Generation-indexed records
/// yield one series each. Iteration-indexed records only support the
/// fitness family and yield two series each: the mean of global bests with
/// a stddev band, and the best-of-executions curve.
///
/// # Errors
/// * `AnalysisError::EmptyInput` - no records
/// * `AnalysisError::MixedVariants` - records from both runner variants
/// * `AnalysisError::UnknownMetric` - family not available for the variant
pub fn build_chart_request(
    records: &[ResultRecord],
    options: &ChartOptions,
) -> Result<ChartRequest, AnalysisError> {
    let first = records.first().ok_or(AnalysisError::EmptyInput)?;
    ensure_same_variant(first, records)?;

    info!(
        "Building {:?} chart for {} {} records",
        options.family,
        records.len(),
        first.variant_name()
    );

    let chart = match first {
        ResultRecord::Evolution(_) => {
            let metric = options.family.metric();
            let start = match metric.first_defined_step() {
                0 => StepStart::Zero,
                _ => StepStart::One,
            };

            let series = records
                .iter()
                .map(|record| extract_series(record, metric, options.phase, start))
                .collect::<Result<Vec<_>, _>>()?;

            let phase = match options.phase {
                Phase::Train => "train",
                Phase::Test => "test",
            };

            ChartRequest {
                title: options.title.clone().unwrap_or_else(|| {
                    format!("{} per generation ({})", options.family.description(), phase)
                }),
                x_label: GENERATION_AXIS_LABEL.to_string(),
                y_label: options.family.y_label().to_string(),
                series,
            }
        }
        ResultRecord::Colony(_) => {
            if options.family != MetricFamily::Fitness {
                return Err(AnalysisError::UnknownMetric {
                    metric: options.family.metric().to_string(),
                    variant: first.variant_name(),
                });
            }

            let mut series = Vec::with_capacity(records.len() * 2);
            for record in records {
                let ResultRecord::Colony(colony) = record else {
                    return Err(mixed(first, record));
                };
                let global_bests = IterationMetric::GlobalBests;

                let mean = extract_repeated_series(
                    colony,
                    |it| global_bests.values(it),
                    true,
                    StepStart::One,
                )?;
                let best = extract_repeated_series(
                    colony,
                    |it| global_bests.values(it),
                    false,
                    StepStart::One,
                )?;
                let best_label = format!("{} | best solution", mean.label);

                series.push(mean);
                series.push(best.with_label(best_label));
            }

            ChartRequest {
                title: options
                    .title
                    .clone()
                    .unwrap_or_else(|| "Global best per iteration".to_string()),
                x_label: ITERATION_AXIS_LABEL.to_string(),
                y_label: FITNESS_AXIS_LABEL.to_string(),
                series,
            }
        }
    };

    debug!("Chart holds {} series, {} points", chart.series.len(), chart.point_count());
    Ok(chart)
}

/// Build the single-record detail chart
///
/// Generation-indexed: best fitness mean with a stddev band.
/// Iteration-indexed: best-of-executions global and local bests.
/// Both start at step 1.
pub fn build_detail_chart(
    record: &ResultRecord,
    phase: Phase,
    title: Option<String>,
) -> Result<ChartRequest, AnalysisError> {
    let chart = match record {
        ResultRecord::Evolution(_) => {
            let series = extract_spread_series(record, Metric::BestFitness, phase, StepStart::One)?;
            ChartRequest {
                title: title.unwrap_or_else(|| "Best fitness across executions".to_string()),
                x_label: GENERATION_AXIS_LABEL.to_string(),
                y_label: FITNESS_AXIS_LABEL.to_string(),
                series: vec![series],
            }
        }
        ResultRecord::Colony(colony) => {
            let global = extract_repeated_series(
                colony,
                |it| IterationMetric::GlobalBests.values(it),
                false,
                StepStart::One,
            )?;
            let local = extract_repeated_series(
                colony,
                |it| IterationMetric::LocalBests.values(it),
                false,
                StepStart::One,
            )?;
            ChartRequest {
                title: title
                    .unwrap_or_else(|| "Global best and local best results, best".to_string()),
                x_label: ITERATION_AXIS_LABEL.to_string(),
                y_label: FITNESS_AXIS_LABEL.to_string(),
                series: vec![global.with_label("Global best"), local.with_label("Local best")],
            }
        }
    };

    Ok(chart)
}

fn ensure_same_variant(
    first: &ResultRecord,
    records: &[ResultRecord],
) -> Result<(), AnalysisError> {
    match records
        .iter()
        .find(|r| r.variant_name() != first.variant_name())
    {
        Some(other) => Err(mixed(first, other)),
        None => Ok(()),
    }
}

fn mixed(first: &ResultRecord, other: &ResultRecord) -> AnalysisError {
    AnalysisError::MixedVariants {
        first: first.variant_name(),
        other: other.variant_name(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_y_labels() {
        assert_eq!(MetricFamily::Fitness.y_label(), "Fitness");
        assert_eq!(
            MetricFamily::NumRepeated.y_label(),
            "Normalized number of repeated individuals"
        );
        assert_eq!(
            MetricFamily::Size.y_label(),
            "Number of elements of the best individual"
        );
    }

    #[test]
    fn test_family_metric_mapping() {
        assert_eq!(MetricFamily::Fitness.metric(), Metric::BestFitness);
        assert_eq!(MetricFamily::NumMutBetter.metric(), Metric::NumMutBetter);
    }

    #[test]
    fn test_empty_records() {
        let err = build_chart_request(&[], &ChartOptions::default()).unwrap_err();
        assert_eq!(err, AnalysisError::EmptyInput);
    }
}
