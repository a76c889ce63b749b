//! Dividend income simulation library
//!
//! Projects month-by-month dividend income for a small portfolio of
//! income-paying securities from a year-by-year purchase plan:
//! - Cumulative holdings per security (purchases only, no disposals)
//! - Monthly payouts on each security's payout calendar
//! - Monthly totals with in-year and all-time running sums
//! - Yearly cumulative investment, dividend income and return rate
//!
//! # Builder DSL
//!
//! ```ignore
//! use divsim_core::config::{SecurityBuilder, SimulationBuilder};
//! use divsim_core::simulation::simulate;
//!
//! let config = SimulationBuilder::new()
//!     .years(2024, 2025)
//!     .security(
//!         SecurityBuilder::new("A")
//!             .dividend(1_000.0)
//!             .quarterly()
//!             .buy(2024, 10, 5_000.0)
//!             .buy(2025, 5, 6_000.0),
//!     )
//!     .build();
//!
//! let result = simulate(&config)?;
//! assert_eq!(result.summary_for(2024).unwrap().yearly_return_rate_percent, 80.0);
//! ```

#![warn(clippy::all)]

// ============================================================================
// Core modules
// ============================================================================

pub mod aggregate;
pub mod error;
pub mod projection;
pub mod simulation;

// ============================================================================
// Type definition modules
// ============================================================================

pub mod config;
pub mod model;

// ============================================================================
// Test modules
// ============================================================================

#[cfg(test)]
mod tests;

// ============================================================================
// Public re-exports for convenience
// ============================================================================

pub use config::{SecurityBuilder, SimulationBuilder, SimulationConfig};
pub use error::ValidationError;
pub use simulation::simulate;
