//! Command-line front end for the dividend income simulator
//!
//! Loads a YAML plan, runs `divsim_core::simulate`, and renders the monthly
//! dividend calendar and yearly return table as text or JSON.

pub mod logging;
pub mod plan;
pub mod report;
pub mod util;

pub use logging::init_logging;
pub use report::OutputFormat;
