//! Extraction of labeled (x, y) series from result records.
//!
//! Generation-indexed records already store mean/stddev per generation,
//! so extraction is a field read plus optional normalization. Iteration-indexed
//! records store one raw value per execution, which is reduced here either
//! to mean ± stddev or to the best (minimum) value.

use super::stats::{mean_stddev, minimum};
use crate::parser::schema::{
    execution_values, ColonyRecord, EvolutionRecord, GenerationStat, IterationStat, MeanStddev,
    ResultRecord, RunParameters,
};
use crate::utils::error::AnalysisError;
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which value to extract from each step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Metric {
    BestFitness,
    AvgFitness,
    WorstFitness,
    BestSize,
    AvgSize,
    WorstSize,
    NumRepeated,
    NumCrossBetter,
    NumCrossWorse,
    NumMutBetter,
    NumMutWorse,
    GlobalBests,
    LocalBests,
    LocalWorsts,
}

type GenerationAccessor = fn(&GenerationStat) -> MeanStddev;

impl Metric {
    /// Counts that must be divided by population size to compare runs
    pub fn is_normalized(self) -> bool {
        matches!(
            self,
            Metric::NumRepeated
                | Metric::NumCrossBetter
                | Metric::NumCrossWorse
                | Metric::NumMutBetter
                | Metric::NumMutWorse
        )
    }

    /// First step at which the metric is defined
    ///
    /// Improvement counts compare children to parents, and generation 0
    /// has no parents.
    pub fn first_defined_step(self) -> usize {
        match self {
            Metric::NumCrossBetter
            | Metric::NumCrossWorse
            | Metric::NumMutBetter
            | Metric::NumMutWorse => 1,
            _ => 0,
        }
    }

    /// Per-execution accessor for iteration-indexed metrics
    pub fn iteration_metric(self) -> Option<IterationMetric> {
        match self {
            Metric::GlobalBests => Some(IterationMetric::GlobalBests),
            Metric::LocalBests => Some(IterationMetric::LocalBests),
            Metric::LocalWorsts => Some(IterationMetric::LocalWorsts),
            _ => None,
        }
    }

    fn generation_accessor(self) -> Option<GenerationAccessor> {
        let accessor: GenerationAccessor = match self {
            Metric::BestFitness => |s: &GenerationStat| s.best_fitness,
            Metric::AvgFitness => |s: &GenerationStat| s.avg_fitness,
            Metric::WorstFitness => |s: &GenerationStat| s.worst_fitness,
            Metric::BestSize => |s: &GenerationStat| s.best_size,
            Metric::AvgSize => |s: &GenerationStat| s.avg_size,
            Metric::WorstSize => |s: &GenerationStat| s.worst_size,
            Metric::NumRepeated => |s: &GenerationStat| s.num_repeated,
            Metric::NumCrossBetter => |s: &GenerationStat| s.num_cross_better,
            Metric::NumCrossWorse => |s: &GenerationStat| s.num_cross_worse,
            Metric::NumMutBetter => |s: &GenerationStat| s.num_mut_better,
            Metric::NumMutWorse => |s: &GenerationStat| s.num_mut_worse,
            Metric::GlobalBests | Metric::LocalBests | Metric::LocalWorsts => return None,
        };
        Some(accessor)
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Metric::BestFitness => "best_fitness",
            Metric::AvgFitness => "avg_fitness",
            Metric::WorstFitness => "worst_fitness",
            Metric::BestSize => "best_size",
            Metric::AvgSize => "avg_size",
            Metric::WorstSize => "worst_size",
            Metric::NumRepeated => "num_repeated",
            Metric::NumCrossBetter => "num_cross_better",
            Metric::NumCrossWorse => "num_cross_worse",
            Metric::NumMutBetter => "num_mut_better",
            Metric::NumMutWorse => "num_mut_worse",
            Metric::GlobalBests => "global_bests",
            Metric::LocalBests => "local_bests",
            Metric::LocalWorsts => "local_worsts",
        };
        f.write_str(name)
    }
}

/// Raw per-execution arrays of an iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IterationMetric {
    GlobalBests,
    LocalBests,
    LocalWorsts,
}

impl IterationMetric {
    pub fn values(self, iteration: &IterationStat) -> &[f32] {
        match self {
            IterationMetric::GlobalBests => &iteration.global_bests,
            IterationMetric::LocalBests => &iteration.local_bests,
            IterationMetric::LocalWorsts => &iteration.local_worsts,
        }
    }
}

/// Train-time or held-out test statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, clap::ValueEnum)]
pub enum Phase {
    #[default]
    Train,
    Test,
}

impl Phase {
    /// Stat sequence of an evolution record for this phase
    pub fn select(self, record: &EvolutionRecord) -> &[GenerationStat] {
        match self {
            Phase::Train => &record.train_stats,
            Phase::Test => &record.test_stats,
        }
    }
}

/// First step index included in a series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StepStart {
    #[default]
    Zero,
    One,
}

impl StepStart {
    pub fn index(self) -> usize {
        match self {
            StepStart::Zero => 0,
            StepStart::One => 1,
        }
    }
}

/// Lower/upper bound around a mean curve
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Band {
    pub lower: Vec<f64>,
    pub upper: Vec<f64>,
}

/// One labeled curve, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub label: String,
    pub x: Vec<usize>,
    pub y: Vec<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub band: Option<Band>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            x: Vec::new(),
            y: Vec::new(),
            band: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

/// Extract one series of mean values from a record
///
/// **Public** - main entry point for series extraction
///
/// # Arguments
/// * `record` - Decoded result record
/// * `metric` - Value to read from each step
/// * `phase` - Train or test stats (evolution records only)
/// * `start` - First step; raised to 1 for metrics undefined at step 0
///
/// # Errors
/// * `AnalysisError::UnknownMetric` - metric belongs to the other record variant
/// * `AnalysisError::ExecutionOutOfRange` - colony iteration shorter than the execution count
pub fn extract_series(
    record: &ResultRecord,
    metric: Metric,
    phase: Phase,
    start: StepStart,
) -> Result<Series, AnalysisError> {
    match record {
        ResultRecord::Evolution(r) => generation_series(r, metric, phase, start, false),
        ResultRecord::Colony(r) => {
            let iteration_metric = metric
                .iteration_metric()
                .ok_or_else(|| unknown_metric(metric, record))?;
            let mut series =
                extract_repeated_series(r, |it| iteration_metric.values(it), true, start)?;
            series.band = None;
            Ok(series)
        }
    }
}

/// Like [`extract_series`], with a band of one stored stddev around the mean
///
/// Only generation-indexed records carry a stored stddev.
pub fn extract_spread_series(
    record: &ResultRecord,
    metric: Metric,
    phase: Phase,
    start: StepStart,
) -> Result<Series, AnalysisError> {
    match record {
        ResultRecord::Evolution(r) => generation_series(r, metric, phase, start, true),
        ResultRecord::Colony(_) => Err(unknown_metric(metric, record)),
    }
}

fn generation_series(
    record: &EvolutionRecord,
    metric: Metric,
    phase: Phase,
    start: StepStart,
    with_band: bool,
) -> Result<Series, AnalysisError> {
    let accessor = metric
        .generation_accessor()
        .ok_or_else(|| AnalysisError::UnknownMetric {
            metric: metric.to_string(),
            variant: "evolution",
        })?;

    let stats = phase.select(record);
    if stats.is_empty() {
        warn!("No {:?} stats in record ({})", phase, record_label(record));
    }

    let first = start.index().max(metric.first_defined_step());
    let scale = match (metric.is_normalized(), record.params.population_size) {
        (false, _) => 1.0,
        (true, 0) => {
            return Err(AnalysisError::InvalidPopulation {
                metric: metric.to_string(),
            })
        }
        (true, size) => f64::from(size),
    };

    let mut series = Series::new(record_label(record));
    let mut lower = Vec::new();
    let mut upper = Vec::new();

    for (step, stat) in stats.iter().enumerate().skip(first) {
        let value = accessor(stat);
        series.x.push(step);
        series.y.push(value.mean / scale);
        if with_band {
            lower.push((value.mean - value.stddev) / scale);
            upper.push((value.mean + value.stddev) / scale);
        }
    }

    if with_band {
        series.band = Some(Band { lower, upper });
    }

    debug!("Extracted {} points of {} from {}", series.len(), metric, series.label);
    Ok(series)
}

/// Reduce per-execution raw values of each iteration into one series
///
/// **Public** - used for iteration-indexed records
///
/// # Arguments
/// * `record` - Colony record
/// * `accessor` - Selects the per-execution array of an iteration
/// * `use_spread` - `true`: mean across executions with a ±stddev band;
///   `false`: minimum across executions (best-of-run curve)
/// * `start` - First iteration to include
///
/// The execution count comes from the run parameters, or from the first
/// included iteration when the parameters do not record it. An iteration
/// holding fewer values than that is an error, never silently truncated.
pub fn extract_repeated_series<F>(
    record: &ColonyRecord,
    accessor: F,
    use_spread: bool,
    start: StepStart,
) -> Result<Series, AnalysisError>
where
    F: Fn(&IterationStat) -> &[f32],
{
    let first = start.index();
    let first_len = record.iterations.get(first).map_or(0, |it| accessor(it).len());
    let executions = record.params.execution_count(first_len);

    let mut series = Series::new(RunParameters::Colony(&record.params).label());
    let mut lower = Vec::new();
    let mut upper = Vec::new();

    for (step, iteration) in record.iterations.iter().enumerate().skip(first) {
        let raw = accessor(iteration);
        let Some(raw) = execution_values(raw, executions) else {
            return Err(AnalysisError::ExecutionOutOfRange {
                iteration: step,
                execution: raw.len().min(executions.saturating_sub(1)),
                len: raw.len(),
            });
        };

        let values: Vec<f64> = raw.iter().map(|&v| f64::from(v)).collect();
        series.x.push(step);

        if use_spread {
            let (mean, stddev) = mean_stddev(&values);
            series.y.push(mean);
            lower.push(mean - stddev);
            upper.push(mean + stddev);
        } else {
            series.y.push(minimum(&values));
        }
    }

    if use_spread {
        series.band = Some(Band { lower, upper });
    }

    debug!(
        "Reduced {} iterations over {} executions ({})",
        series.len(),
        executions,
        if use_spread { "mean" } else { "min" }
    );
    Ok(series)
}

fn record_label(record: &EvolutionRecord) -> String {
    RunParameters::Evolution(&record.params).label()
}

fn unknown_metric(metric: Metric, record: &ResultRecord) -> AnalysisError {
    AnalysisError::UnknownMetric {
        metric: metric.to_string(),
        variant: record.variant_name(),
    }
}
