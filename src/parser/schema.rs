//! Result record schema definitions.
//!
//! These types mirror what the experiment runners write to disk.
//! Two variants exist: generation-indexed genetic-programming results and
//! iteration-indexed ant-colony results.

use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Mean and standard deviation of a value across repeated executions
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct MeanStddev {
    pub mean: f64,
    pub stddev: f64,
}

impl MeanStddev {
    pub fn new(mean: f64, stddev: f64) -> Self {
        Self { mean, stddev }
    }
}

/// Top-level result record, one per input file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ResultRecord {
    /// Genetic-programming run, indexed by generation
    Evolution(EvolutionRecord),

    /// Ant-colony run, indexed by iteration
    Colony(ColonyRecord),
}

impl ResultRecord {
    /// Parameters that produced this record
    pub fn params(&self) -> RunParameters<'_> {
        match self {
            ResultRecord::Evolution(r) => RunParameters::Evolution(&r.params),
            ResultRecord::Colony(r) => RunParameters::Colony(&r.params),
        }
    }

    /// Human-readable variant name, used in error messages
    pub fn variant_name(&self) -> &'static str {
        match self {
            ResultRecord::Evolution(_) => "evolution",
            ResultRecord::Colony(_) => "colony",
        }
    }

    /// Number of per-step entries (generations or iterations)
    pub fn step_count(&self) -> usize {
        match self {
            ResultRecord::Evolution(r) => r.train_stats.len(),
            ResultRecord::Colony(r) => r.iterations.len(),
        }
    }

    /// Final statistics; derived from the last iteration for colony runs
    pub fn final_stats(&self) -> Option<Cow<'_, FinalStats>> {
        match self {
            ResultRecord::Evolution(r) => Some(Cow::Borrowed(&r.final_stats)),
            ResultRecord::Colony(r) => r.derived_final_stats().map(Cow::Owned),
        }
    }

    /// Deterministic label built from the run parameters
    pub fn label(&self) -> String {
        self.params().label()
    }
}

/// Borrowed view over either parameter set
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RunParameters<'a> {
    Evolution(&'a EvolutionParams),
    Colony(&'a ColonyParams),
}

impl RunParameters<'_> {
    /// Build the legend label for this parameter set
    ///
    /// **Public** - used for series labels and the best-record summary
    pub fn label(&self) -> String {
        match self {
            RunParameters::Evolution(p) => format!(
                "numGens: {} | popSize: {} | tourSize: {} | crossProb: {:.2} | elitism: {}",
                p.num_generations,
                p.population_size,
                p.tournament_size,
                p.crossover_prob,
                if p.elitism { "True" } else { "False" }
            ),
            RunParameters::Colony(p) => format!(
                "numAnts: {} | numIterations: {} | decay: {:.2}",
                p.num_ants, p.num_iterations, p.decay
            ),
        }
    }
}

/// Parameters of a genetic-programming run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionParams {
    pub seed: u32,
    pub num_instances: u32,
    pub num_generations: u32,
    pub population_size: u32,
    pub tournament_size: u32,
    pub max_height: u32,
    pub crossover_prob: f64,
    pub elitism: bool,
    /// Whether test stats were collected every generation
    pub always_test: bool,
}

/// Per-generation statistics aggregated over repeated executions
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenerationStat {
    pub best_fitness: MeanStddev,
    pub best_size: MeanStddev,
    pub worst_fitness: MeanStddev,
    pub worst_size: MeanStddev,
    pub avg_fitness: MeanStddev,
    pub avg_size: MeanStddev,
    pub num_repeated: MeanStddev,
    pub num_cross_better: MeanStddev,
    pub num_cross_worse: MeanStddev,
    pub num_mut_better: MeanStddev,
    pub num_mut_worse: MeanStddev,
    pub best_individual_str: String,
    pub best_individual_fitness: f64,
    pub best_individual_size: u64,
}

/// Summary of the best individual found across a whole run
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FinalStats {
    pub best_fitness: MeanStddev,
    pub best_individual_fitness: f64,
    pub best_individual_size: u64,
    pub best_individual_str: String,
}

/// Genetic-programming result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionRecord {
    pub params: EvolutionParams,
    pub train_stats: Vec<GenerationStat>,
    /// Empty unless the run tested every generation
    pub test_stats: Vec<GenerationStat>,
    pub final_stats: FinalStats,
}

/// Parameters of an ant-colony run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyParams {
    pub seed: u32,
    pub num_executions: u32,
    pub num_iterations: u32,
    pub num_ants: u32,
    pub decay: f32,
}

impl ColonyParams {
    /// Executions per iteration, or `fallback` when the run did not record it
    pub fn execution_count(&self, fallback: usize) -> usize {
        match self.num_executions {
            0 => fallback,
            n => n as usize,
        }
    }
}

/// The first `count` per-execution values, or `None` if the array is shorter
///
/// Values past the execution count are never read.
pub fn execution_values(raw: &[f32], count: usize) -> Option<&[f32]> {
    if count == 0 {
        return None;
    }
    raw.get(..count)
}

/// Raw per-execution values for one iteration
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct IterationStat {
    /// Global bests, one float for each execution
    pub global_bests: Vec<f32>,
    /// Local bests, one float for each execution
    pub local_bests: Vec<f32>,
    /// Local worsts, one float for each execution
    pub local_worsts: Vec<f32>,
}

/// Ant-colony result record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColonyRecord {
    pub params: ColonyParams,
    pub iterations: Vec<IterationStat>,
}

impl ColonyRecord {
    /// Final stats computed from the global bests of the last iteration
    ///
    /// Only the first `num_executions` values count, matching the plotted series.
    ///
    /// The colony runner does not write final stats. Size and textual
    /// form have no meaning here and stay at their defaults.
    pub fn derived_final_stats(&self) -> Option<FinalStats> {
        let last = self.iterations.last()?;
        let count = self.params.execution_count(last.global_bests.len());
        let raw = execution_values(&last.global_bests, count)?;

        let values: Vec<f64> = raw.iter().map(|&v| f64::from(v)).collect();
        let (mean, stddev) = crate::aggregator::stats::mean_stddev(&values);
        let best = crate::aggregator::stats::minimum(&values);

        Some(FinalStats {
            best_fitness: MeanStddev::new(mean, stddev),
            best_individual_fitness: best,
            ..FinalStats::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn colony(num_executions: u32, last: Vec<f32>) -> ColonyRecord {
        ColonyRecord {
            params: ColonyParams {
                seed: 3,
                num_executions,
                num_iterations: 1,
                num_ants: 4,
                decay: 0.2,
            },
            iterations: vec![IterationStat {
                global_bests: last,
                ..IterationStat::default()
            }],
        }
    }

    #[test]
    fn test_final_stats_ignore_values_past_execution_count() {
        let stats = colony(2, vec![4.0, 6.0, -100.0]).derived_final_stats().unwrap();

        assert_eq!(stats.best_individual_fitness, 4.0);
        assert_eq!(stats.best_fitness, MeanStddev::new(5.0, 1.0));
    }

    #[test]
    fn test_final_stats_use_whole_row_without_execution_count() {
        let stats = colony(0, vec![4.0, 6.0, 2.0]).derived_final_stats().unwrap();
        assert_eq!(stats.best_individual_fitness, 2.0);
    }

    #[test]
    fn test_final_stats_missing_for_short_row() {
        assert!(colony(3, vec![4.0, 6.0]).derived_final_stats().is_none());
        assert!(colony(0, Vec::new()).derived_final_stats().is_none());
    }

    #[test]
    fn test_execution_values() {
        assert_eq!(execution_values(&[1.0, 2.0, 3.0], 2), Some(&[1.0, 2.0][..]));
        assert_eq!(execution_values(&[1.0], 2), None);
        assert_eq!(execution_values(&[1.0], 0), None);
    }
}
