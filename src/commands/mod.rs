//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod compare;
pub mod models;
pub mod utils;

// Re-export main command functions
pub use compare::{execute_compare, execute_detail, validate_args, validate_detail_args};
pub use models::{CompareArgs, DetailArgs};
pub use utils::{display_best, display_version, format_best_summary};
