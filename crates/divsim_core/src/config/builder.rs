//! Simulation Builder
//!
//! Fluent API for assembling a `SimulationConfig`.
//!
//! ```ignore
//! use divsim_core::config::{SecurityBuilder, SimulationBuilder};
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
//! ```

use super::SimulationConfig;
use super::security_builder::SecurityBuilder;

/// Builder for creating simulation configurations
pub struct SimulationBuilder {
    config: SimulationConfig,
}

impl Default for SimulationBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self {
            config: SimulationConfig::default(),
        }
    }

    /// Simulate `start..=end`
    #[must_use]
    pub fn years(mut self, start: i32, end: i32) -> Self {
        self.config.start_year = start;
        self.config.end_year = end;
        self
    }

    #[must_use]
    pub fn start_year(mut self, year: i32) -> Self {
        self.config.start_year = year;
        self
    }

    #[must_use]
    pub fn end_year(mut self, year: i32) -> Self {
        self.config.end_year = year;
        self
    }

    /// Simulate `count` years starting at the configured start year.
    ///
    /// An end year past `i32::MAX` is pinned there and rejected on validation.
    #[must_use]
    pub fn duration_years(mut self, count: u16) -> Self {
        self.config.end_year = self
            .config
            .start_year
            .checked_add(i32::from(count) - 1)
            .unwrap_or(i32::MAX);
        self
    }

    /// Add a security (in declaration order)
    #[must_use]
    pub fn security(mut self, builder: SecurityBuilder) -> Self {
        self.config.securities.push(builder.build());
        self
    }

    /// Finish building. The configuration is validated when simulated.
    #[must_use]
    pub fn build(self) -> SimulationConfig {
        self.config
    }
}
