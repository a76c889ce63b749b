use serde::{Deserialize, Serialize};

/// Shares of one security bought during a given year
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyPurchase {
    pub year: i32,
    #[serde(default)]
    pub quantity: u64,
    #[serde(default)]
    pub price_per_share: f64,
}

impl YearlyPurchase {
    #[must_use]
    pub fn new(year: i32, quantity: u64, price_per_share: f64) -> Self {
        Self {
            year,
            quantity,
            price_per_share,
        }
    }

    /// A year with nothing bought
    #[must_use]
    pub fn none(year: i32) -> Self {
        Self::new(year, 0, 0.0)
    }

    /// Cash spent on this purchase (`quantity * price_per_share`)
    #[must_use]
    pub fn invested_amount(&self) -> f64 {
        self.quantity as f64 * self.price_per_share
    }
}
