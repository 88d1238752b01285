#![allow(dead_code)]

use result_charts::parser::schema::{
    ColonyParams, ColonyRecord, EvolutionParams, EvolutionRecord, FinalStats, GenerationStat,
    IterationStat, MeanStddev, ResultRecord,
};

pub fn evolution_params() -> EvolutionParams {
    EvolutionParams {
        seed: 42,
        num_instances: 30,
        num_generations: 100,
        population_size: 50,
        tournament_size: 3,
        max_height: 7,
        crossover_prob: 0.9,
        elitism: true,
        always_test: false,
    }
}

/// Evolution record whose best fitness mean at generation `g` is `base - g`
pub fn evolution_record(best_individual_fitness: f64, generations: usize) -> ResultRecord {
    let stats: Vec<GenerationStat> = (0..generations)
        .map(|g| GenerationStat {
            best_fitness: MeanStddev::new(100.0 - g as f64, 1.0),
            num_repeated: MeanStddev::new(10.0, 2.0),
            num_cross_better: MeanStddev::new(5.0, 1.0),
            best_size: MeanStddev::new(12.0 + g as f64, 0.5),
            ..GenerationStat::default()
        })
        .collect();

    ResultRecord::Evolution(EvolutionRecord {
        params: evolution_params(),
        train_stats: stats,
        test_stats: Vec::new(),
        final_stats: FinalStats {
            best_fitness: MeanStddev::new(best_individual_fitness + 1.0, 0.25),
            best_individual_fitness,
            best_individual_size: 9,
            best_individual_str: "(+ x (* x x))".to_string(),
        },
    })
}

pub fn colony_record(num_ants: u32, rows: Vec<Vec<f32>>) -> ResultRecord {
    ResultRecord::Colony(ColonyRecord {
        params: ColonyParams {
            seed: 7,
            num_executions: rows.first().map(|r| r.len() as u32).unwrap_or(0),
            num_iterations: rows.len() as u32,
            num_ants,
            decay: 0.01,
        },
        iterations: rows
            .into_iter()
            .map(|row| IterationStat {
                local_bests: row.iter().map(|v| v + 1.0).collect(),
                local_worsts: row.iter().map(|v| v + 10.0).collect(),
                global_bests: row,
            })
            .collect(),
    })
}
