//! Terminal output formatting
//!
//! Display utilities for CLI results and share grids.

pub mod display;
pub mod formatters;

pub use display::{print_check_report, print_populate_report};
