//! Result Charts
//!
//! Statistics extraction and chart rendering for the result files of
//! genetic-programming and ant-colony experiment runners.
//!
//! This crate provides the core implementation for the
//! `result-charts` CLI tool.
//!
//! ## Getting Started
//!
//! ```bash
//! result-charts compare run-a.bin run-b.bin --metric num-repeated --output repeated.svg
//! result-charts detail run-a.bin --output detail.svg
//! ```

pub mod aggregator;
pub mod commands;
pub mod output;
pub mod parser;
pub mod render;
pub mod utils;
