//! Decoding of result record files.
//!
//! Records are stored as bincode by default. Files with a `.json`
//! extension are decoded with serde_json instead, which is handy for
//! hand-written fixtures.

use super::schema::ResultRecord;
use crate::utils::config::JSON_EXTENSION;
use crate::utils::error::ParseError;
use log::{debug, info};
use std::path::Path;

/// On-disk encoding of a result record
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordFormat {
    Binary,
    Json,
}

impl RecordFormat {
    /// Pick the format from a file extension
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case(JSON_EXTENSION) => RecordFormat::Json,
            _ => RecordFormat::Binary,
        }
    }
}

/// Decode a single result record from a byte buffer
///
/// **Public** - main entry point for decoding
///
/// # Errors
/// * `ParseError::EmptyBuffer` - zero-length input
/// * `ParseError::Binary` / `ParseError::JsonError` - malformed or truncated input
pub fn decode_record(buf: &[u8], format: RecordFormat) -> Result<ResultRecord, ParseError> {
    if buf.is_empty() {
        return Err(ParseError::EmptyBuffer);
    }

    let record = match format {
        RecordFormat::Binary => bincode::deserialize(buf)?,
        RecordFormat::Json => serde_json::from_slice(buf)?,
    };

    Ok(record)
}

/// Encode a result record into a byte buffer
pub fn encode_record(record: &ResultRecord, format: RecordFormat) -> Result<Vec<u8>, ParseError> {
    let buf = match format {
        RecordFormat::Binary => bincode::serialize(record)?,
        RecordFormat::Json => serde_json::to_vec_pretty(record)?,
    };
    Ok(buf)
}

/// Read and decode a result record file
///
/// The whole file is read before decoding; no partial records.
pub fn read_record(path: impl AsRef<Path>) -> Result<ResultRecord, ParseError> {
    let path = path.as_ref();
    let format = RecordFormat::from_path(path);

    debug!("Reading {:?} record from: {}", format, path.display());

    let buf = std::fs::read(path)?;
    let record = decode_record(&buf, format)?;

    debug!(
        "Decoded {} record with {} steps ({})",
        record.variant_name(),
        record.step_count(),
        record.label()
    );

    Ok(record)
}

/// Read every file in order, failing on the first malformed one
pub fn read_records<P: AsRef<Path>>(paths: &[P]) -> Result<Vec<ResultRecord>, ParseError> {
    info!("Reading {} result files", paths.len());
    paths.iter().map(read_record).collect()
}

/// Encode a record and write it to disk
pub fn write_record(record: &ResultRecord, path: impl AsRef<Path>) -> Result<(), ParseError> {
    let path = path.as_ref();
    let buf = encode_record(record, RecordFormat::from_path(path))?;
    std::fs::write(path, buf)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{ColonyParams, ColonyRecord, IterationStat};

    fn colony_record() -> ResultRecord {
        ResultRecord::Colony(ColonyRecord {
            params: ColonyParams {
                seed: 1,
                num_executions: 2,
                num_iterations: 1,
                num_ants: 10,
                decay: 0.05,
            },
            iterations: vec![IterationStat {
                global_bests: vec![3.0, 4.0],
                local_bests: vec![3.5, 4.5],
                local_worsts: vec![9.0, 8.0],
            }],
        })
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(RecordFormat::from_path(Path::new("a.json")), RecordFormat::Json);
        assert_eq!(RecordFormat::from_path(Path::new("a.JSON")), RecordFormat::Json);
        assert_eq!(RecordFormat::from_path(Path::new("a.bin")), RecordFormat::Binary);
        assert_eq!(RecordFormat::from_path(Path::new("results")), RecordFormat::Binary);
    }

    #[test]
    fn test_decode_empty_buffer() {
        let result = decode_record(&[], RecordFormat::Binary);
        assert!(matches!(result, Err(ParseError::EmptyBuffer)));
    }

    #[test]
    fn test_decode_truncated_buffer() {
        let buf = encode_record(&colony_record(), RecordFormat::Binary).unwrap();
        let result = decode_record(&buf[..buf.len() / 2], RecordFormat::Binary);
        assert!(matches!(result, Err(ParseError::Binary(_))));
    }

    #[test]
    fn test_binary_and_json_agree() {
        let record = colony_record();
        let bin = encode_record(&record, RecordFormat::Binary).unwrap();
        let json = encode_record(&record, RecordFormat::Json).unwrap();

        let from_bin = decode_record(&bin, RecordFormat::Binary).unwrap();
        let from_json = decode_record(&json, RecordFormat::Json).unwrap();

        assert_eq!(from_bin, record);
        assert_eq!(from_json, from_bin);
    }

    #[test]
    fn test_read_missing_file() {
        let result = read_record("/definitely/not/here.bin");
        assert!(matches!(result, Err(ParseError::Io(_))));
    }
}
