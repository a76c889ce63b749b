//! Simulation results
//!
//! The monthly dividend table and the yearly investment/return summary,
//! plus lookups used when rendering them.

use serde::{Deserialize, Serialize};

use super::years::YearRange;

/// Dividend paid by one security
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SecurityDividend {
    pub security: String,
    pub amount: f64,
}

/// Dividends received in one (year, month)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub year: i32,
    pub month: u8,
    /// One entry per security, in declaration order
    pub dividend_by_security: Vec<SecurityDividend>,
    pub total_dividend: f64,
    /// Running total since January of `year`
    pub cumulative_dividend_in_year: f64,
    /// Running total since the first simulated month
    pub cumulative_dividend_all_time: f64,
}

impl MonthlyRecord {
    /// Dividend paid by `security` this month
    pub fn dividend_for(&self, security: &str) -> Option<f64> {
        self.dividend_by_security
            .iter()
            .find(|d| d.security == security)
            .map(|d| d.amount)
    }

    /// `YYYY-MM` label for this month
    pub fn period_label(&self) -> String {
        format!("{}-{:02}", self.year, self.month)
    }
}

/// Investment and dividend totals for one year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySummary {
    pub year: i32,
    /// Everything invested across all securities up to and including `year`
    pub cumulative_investment: f64,
    pub yearly_dividend: f64,
    /// `yearly_dividend / cumulative_investment * 100`, or 0 with nothing invested
    pub yearly_return_rate_percent: f64,
}

/// Complete results from a single simulation run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationResult {
    pub years: YearRange,
    /// Security names in declaration order
    pub securities: Vec<String>,
    /// Exactly 12 records per year, ordered by (year, month)
    pub monthly: Vec<MonthlyRecord>,
    pub yearly: Vec<YearlySummary>,
}

impl SimulationResult {
    /// The twelve monthly records of `year` (empty if out of range)
    pub fn months_for_year(&self, year: i32) -> &[MonthlyRecord] {
        match self.years.index_of(year) {
            Some(idx) => self.monthly.get(idx * 12..idx * 12 + 12).unwrap_or(&[]),
            None => &[],
        }
    }

    pub fn summary_for(&self, year: i32) -> Option<&YearlySummary> {
        self.years
            .index_of(year)
            .and_then(|idx| self.yearly.get(idx))
    }

    /// Per-security dividend totals for `year`, in declaration order
    pub fn security_dividends_for_year(&self, year: i32) -> Vec<SecurityDividend> {
        let months = self.months_for_year(year);
        self.securities
            .iter()
            .map(|name| SecurityDividend {
                security: name.clone(),
                amount: months
                    .iter()
                    .filter_map(|record| record.dividend_for(name))
                    .sum(),
            })
            .collect()
    }

    /// All dividends received over the whole simulation
    pub fn total_dividends(&self) -> f64 {
        self.monthly
            .last()
            .map_or(0.0, |record| record.cumulative_dividend_all_time)
    }

    /// Everything invested by the final simulated year
    pub fn total_investment(&self) -> f64 {
        self.yearly
            .last()
            .map_or(0.0, |summary| summary.cumulative_investment)
    }
}
