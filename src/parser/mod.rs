//! Result record decoding and schema definitions.
//!
//! This module handles:
//! - Defining the result record schema for both runner variants
//! - Decoding records from bincode or JSON buffers
//! - Reading record files from disk

pub mod record;
pub mod schema;

// Re-export main types
pub use record::{
    decode_record, encode_record, read_record, read_records, write_record, RecordFormat,
};
pub use schema::{
    execution_values, ColonyParams, ColonyRecord, EvolutionParams, EvolutionRecord, FinalStats,
    GenerationStat, IterationStat, MeanStddev, ResultRecord, RunParameters,
};
