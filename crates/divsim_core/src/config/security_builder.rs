//! Security Builder DSL
//!
//! Fluent API for defining a security, its payout calendar and its
//! purchase plan.
//!
//! ```ignore
//! use divsim_core::config::SecurityBuilder;
//!
//! let reit = SecurityBuilder::new("Shinhan Alpha REIT")
//!     .dividend(155.0)
//!     .semi_annual(6)
//!     .buy(2024, 200, 5_100.0)
//!     .buy(2025, 100, 5_300.0);
//! ```

use super::SecurityPlan;
use crate::model::YearlyPurchase;

/// Builder for one security's definition and purchase plan
#[derive(Debug, Clone)]
pub struct SecurityBuilder {
    pub(crate) name: String,
    pub(crate) dividend_per_share: f64,
    pub(crate) payout_months: Vec<u8>,
    pub(crate) purchases: Vec<YearlyPurchase>,
}

impl SecurityBuilder {
    /// Create a new security builder with the given name/ticker
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dividend_per_share: 0.0,
            payout_months: Vec::new(),
            purchases: Vec::new(),
        }
    }

    // =========================================================================
    // Dividend
    // =========================================================================

    /// Cash paid per share on each payout month
    #[must_use]
    pub fn dividend(mut self, per_share: f64) -> Self {
        self.dividend_per_share = per_share;
        self
    }

    // =========================================================================
    // Payout Calendar Presets
    // =========================================================================

    /// Pay out on the given months (1-12)
    #[must_use]
    pub fn months(mut self, months: impl IntoIterator<Item = u8>) -> Self {
        self.payout_months = months.into_iter().collect();
        self
    }

    /// Pay out every month
    #[must_use]
    pub fn monthly(self) -> Self {
        self.months(1..=12)
    }

    /// Pay out in March, June, September and December
    #[must_use]
    pub fn quarterly(self) -> Self {
        self.months([3, 6, 9, 12])
    }

    /// Pay out in `first_month` and six months later
    #[must_use]
    pub fn semi_annual(self, first_month: u8) -> Self {
        let second = first_month.saturating_add(5) % 12 + 1;
        self.months([first_month, second])
    }

    /// Pay out once a year in `month`
    #[must_use]
    pub fn annual(self, month: u8) -> Self {
        self.months([month])
    }

    // =========================================================================
    // Purchase Plan
    // =========================================================================

    /// Buy `quantity` shares at `price_per_share` during `year`
    #[must_use]
    pub fn buy(mut self, year: i32, quantity: u64, price_per_share: f64) -> Self {
        self.purchases
            .push(YearlyPurchase::new(year, quantity, price_per_share));
        self
    }

    #[must_use]
    pub fn build(self) -> SecurityPlan {
        SecurityPlan {
            name: self.name,
            dividend_per_share: self.dividend_per_share,
            payout_months: self.payout_months,
            purchases: self.purchases,
        }
    }
}
