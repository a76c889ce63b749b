//! Simulation configuration
//!
//! `SimulationConfig` is the single object the presentation layer hands to the
//! engine: the simulated years plus, per security, its payout calendar and
//! purchase plan. It is plain data (serde) so it can come from a file, a form
//! or the builder DSL:
//!
//! ```ignore
//! use divsim_core::config::{SecurityBuilder, SimulationBuilder};
//!
//! let config = SimulationBuilder::new()
//!     .years(2024, 2027)
//!     .security(
//!         SecurityBuilder::new("ESR Kendall Square")
//!             .dividend(150.0)
//!             .semi_annual(6)
//!             .buy(2024, 100, 4_500.0)
//!             .buy(2026, 50, 4_800.0),
//!     )
//!     .build();
//! ```

use serde::{Deserialize, Serialize};

use crate::aggregate::check_purchases;
use crate::error::{Result, ValidationError};
use crate::model::{ByName, PayoutMonths, Security, YearRange, YearlyPurchase};

pub mod builder;
pub mod security_builder;

pub use builder::SimulationBuilder;
pub use security_builder::SecurityBuilder;

/// One security and its purchase plan, as entered
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityPlan {
    pub name: String,
    pub dividend_per_share: f64,
    /// Calendar months (1-12) with a payout
    pub payout_months: Vec<u8>,
    /// At most one entry per year; years left out buy nothing
    #[serde(default)]
    pub purchases: Vec<YearlyPurchase>,
}

impl SecurityPlan {
    /// Cash invested per simulated year, zero for years without a purchase
    pub fn invested_by_year(&self, years: YearRange) -> Vec<(i32, f64)> {
        years
            .iter()
            .map(|year| {
                let invested: f64 = self
                    .purchases
                    .iter()
                    .filter(|p| p.year == year)
                    .map(YearlyPurchase::invested_amount)
                    .sum();
                (year, invested)
            })
            .collect()
    }
}

/// Complete simulation configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub start_year: i32,
    pub end_year: i32,
    #[serde(default)]
    pub securities: Vec<SecurityPlan>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            start_year: 2024,
            end_year: 2027,
            securities: Vec::new(),
        }
    }
}

impl SimulationConfig {
    pub fn year_range(&self) -> Result<YearRange> {
        YearRange::new(self.start_year, self.end_year)
    }

    pub fn security(&self, name: &str) -> Option<&SecurityPlan> {
        self.securities.iter().find(|s| s.name == name)
    }

    /// Check every input invariant and produce the plan the engine runs on.
    ///
    /// Stops at the first problem found.
    pub fn validate(&self) -> Result<ValidatedPlan> {
        let years = self.year_range()?;
        if self.securities.is_empty() {
            return Err(ValidationError::NoSecurities);
        }

        let mut securities = Vec::with_capacity(self.securities.len());
        let mut purchases: ByName<Vec<YearlyPurchase>> = ByName::default();

        for plan in &self.securities {
            let months = PayoutMonths::from_months(plan.payout_months.iter().copied()).map_err(
                |invalid| ValidationError::PayoutMonthOutOfRange {
                    security: plan.name.clone(),
                    month: invalid.0,
                },
            )?;
            let security = Security::new(plan.name.clone(), plan.dividend_per_share, months)?;

            if purchases.contains_key(&security.name) {
                return Err(ValidationError::DuplicateSecurity(security.name));
            }
            check_purchases(&security.name, &plan.purchases, years)?;

            purchases.insert(security.name.clone(), plan.purchases.clone());
            securities.push(security);
        }

        Ok(ValidatedPlan {
            years,
            securities,
            purchases,
        })
    }
}

/// A configuration that passed validation. Only `SimulationConfig::validate`
/// builds one, so the engine never sees partially entered input.
#[derive(Debug, Clone)]
pub struct ValidatedPlan {
    years: YearRange,
    securities: Vec<Security>,
    purchases: ByName<Vec<YearlyPurchase>>,
}

impl ValidatedPlan {
    pub fn years(&self) -> YearRange {
        self.years
    }

    /// Securities in declaration order
    pub fn securities(&self) -> &[Security] {
        &self.securities
    }

    pub fn purchases(&self) -> &ByName<Vec<YearlyPurchase>> {
        &self.purchases
    }

    pub fn purchases_for(&self, security: &str) -> &[YearlyPurchase] {
        self.purchases
            .get(security)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}
