//! Command implementations

pub mod check;
pub mod populate;

pub use check::{CheckReport, run_check};
pub use populate::{PopulateReport, run_populate};
