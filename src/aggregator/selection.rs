//! Selection of the best record among a batch.

use crate::parser::schema::ResultRecord;
use crate::utils::error::AnalysisError;
use log::debug;

/// Pick the record whose best individual has the smallest fitness
///
/// **Public** - used by the best-record summary
///
/// Fitness is minimized. Ties keep the earliest record in input order.
///
/// # Errors
/// * `AnalysisError::EmptyInput` - no records
/// * `AnalysisError::MissingFinalStats` - a colony record without iterations
pub fn select_best(records: &[ResultRecord]) -> Result<&ResultRecord, AnalysisError> {
    select_best_index(records).map(|index| &records[index])
}

/// Position of the best record in `records`, see [`select_best`]
pub fn select_best_index(records: &[ResultRecord]) -> Result<usize, AnalysisError> {
    let mut best: Option<(usize, f64)> = None;

    for (index, record) in records.iter().enumerate() {
        let fitness = record
            .final_stats()
            .ok_or(AnalysisError::MissingFinalStats { index })?
            .best_individual_fitness;

        // Strict comparison: the first minimum wins ties
        let improves = match best {
            Some((_, best_fitness)) => fitness < best_fitness,
            None => true,
        };
        if improves {
            best = Some((index, fitness));
        }
    }

    let (index, fitness) = best.ok_or(AnalysisError::EmptyInput)?;
    debug!("Best record is #{} with fitness {}", index, fitness);
    Ok(index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{ColonyParams, ColonyRecord};

    fn colony(num_ants: u32, last: Vec<f32>) -> ResultRecord {
        ResultRecord::Colony(ColonyRecord {
            params: ColonyParams {
                seed: 0,
                num_executions: last.len() as u32,
                num_iterations: 1,
                num_ants,
                decay: 0.1,
            },
            iterations: vec![crate::parser::schema::IterationStat {
                global_bests: last,
                ..Default::default()
            }],
        })
    }

    #[test]
    fn test_empty_input() {
        assert_eq!(select_best(&[]).unwrap_err(), AnalysisError::EmptyInput);
    }

    #[test]
    fn test_colony_records_use_last_iteration_minimum() {
        let records = vec![colony(1, vec![5.0, 4.0]), colony(2, vec![6.0, 3.0])];
        let best = select_best(&records).unwrap();
        assert_eq!(best, &records[1]);
        assert_eq!(select_best_index(&records).unwrap(), 1);
    }

    #[test]
    fn test_colony_without_iterations() {
        let mut record = colony(1, vec![1.0]);
        if let ResultRecord::Colony(r) = &mut record {
            r.iterations.clear();
        }
        let records = vec![colony(2, vec![1.0]), record];
        assert_eq!(
            select_best(&records).unwrap_err(),
            AnalysisError::MissingFinalStats { index: 1 }
        );
    }
}
