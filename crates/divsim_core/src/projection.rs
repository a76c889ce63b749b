//! Holdings and dividend projection for a single security
//!
//! Holdings in a year are the running total of every quantity bought up to and
//! including that year. A payout month pays `holdings * dividend_per_share`;
//! every other month pays nothing. All purchases in a year are treated as
//! settled before that year's first payout, whatever month they happened in.

use serde::Serialize;

use crate::error::{Result, ValidationError};
use crate::model::{PayoutMonths, Security, YearRange, YearlyPurchase, is_valid_amount};

/// Cumulative shares held at the end of each simulated year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HoldingsSeries {
    years: YearRange,
    holdings: Vec<u64>,
}

impl HoldingsSeries {
    pub fn get(&self, year: i32) -> Option<u64> {
        self.years
            .index_of(year)
            .and_then(|idx| self.holdings.get(idx).copied())
    }

    /// `(year, holdings)` pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, u64)> + '_ {
        self.years.iter().zip(self.holdings.iter().copied())
    }

    /// Holdings at the end of the last simulated year
    pub fn last(&self) -> u64 {
        self.holdings.last().copied().unwrap_or(0)
    }
}

/// Dividends paid by one security, twelve months per simulated year
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DividendSeries {
    years: YearRange,
    monthly: Vec<[f64; 12]>,
}

impl DividendSeries {
    /// Dividend paid in `month` (1-12) of `year`
    pub fn get(&self, year: i32, month: u8) -> Option<f64> {
        let months = self.year(year)?;
        let idx = usize::from(month).checked_sub(1)?;
        months.get(idx).copied()
    }

    /// All twelve months of `year`
    pub fn year(&self, year: i32) -> Option<&[f64; 12]> {
        self.years
            .index_of(year)
            .and_then(|idx| self.monthly.get(idx))
    }

    pub fn yearly_total(&self, year: i32) -> Option<f64> {
        self.year(year).map(|months| months.iter().sum())
    }

    pub fn years(&self) -> YearRange {
        self.years
    }

    pub(crate) fn by_index(&self, year_idx: usize) -> &[f64; 12] {
        &self.monthly[year_idx]
    }
}

/// Projection of one security over the simulated years
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Projection {
    pub security: String,
    pub holdings: HoldingsSeries,
    pub dividends: DividendSeries,
}

impl Projection {
    pub fn years(&self) -> YearRange {
        self.holdings.years
    }
}

/// Dividend received in `month` from `holdings` shares
#[must_use]
pub fn monthly_payout(
    holdings: u64,
    dividend_per_share: f64,
    payout_months: &PayoutMonths,
    month: u8,
) -> f64 {
    if payout_months.contains(month) {
        holdings as f64 * dividend_per_share
    } else {
        0.0
    }
}

/// Project holdings and monthly dividends for one security.
///
/// `purchases` may skip years (they count as buying nothing) but must not
/// repeat a year or name one outside `years`.
pub fn project(
    security: &Security,
    purchases: &[YearlyPurchase],
    years: YearRange,
) -> Result<Projection> {
    if !is_valid_amount(security.dividend_per_share) {
        return Err(ValidationError::InvalidDividend {
            security: security.name.clone(),
            value: security.dividend_per_share,
        });
    }

    let quantities = quantities_by_year(&security.name, purchases, years)?;

    let mut held = 0u64;
    let holdings: Vec<u64> = years
        .iter()
        .zip(quantities)
        .map(|(year, quantity)| -> Result<u64> {
            held = held
                .checked_add(quantity)
                .ok_or_else(|| ValidationError::HoldingsOverflow {
                    security: security.name.clone(),
                    year,
                })?;
            Ok(held)
        })
        .collect::<Result<_>>()?;

    let monthly: Vec<[f64; 12]> = holdings
        .iter()
        .map(|&held| {
            std::array::from_fn(|idx| {
                monthly_payout(
                    held,
                    security.dividend_per_share,
                    &security.payout_months,
                    idx as u8 + 1,
                )
            })
        })
        .collect();

    let holdings = HoldingsSeries { years, holdings };
    tracing::debug!(
        security = %security.name,
        start = years.start(),
        end = years.end(),
        final_holdings = holdings.last(),
        "projected security"
    );

    Ok(Projection {
        security: security.name.clone(),
        holdings,
        dividends: DividendSeries { years, monthly },
    })
}

/// One quantity per year in `years`, zero where nothing was bought
fn quantities_by_year(
    security: &str,
    purchases: &[YearlyPurchase],
    years: YearRange,
) -> Result<Vec<u64>> {
    let mut quantities: Vec<Option<u64>> = vec![None; years.len()];

    for purchase in purchases {
        let idx = years
            .index_of(purchase.year)
            .ok_or_else(|| ValidationError::PurchaseOutsideRange {
                security: security.to_string(),
                year: purchase.year,
            })?;
        if quantities[idx].replace(purchase.quantity).is_some() {
            return Err(ValidationError::DuplicatePurchaseYear {
                security: security.to_string(),
                year: purchase.year,
            });
        }
    }

    Ok(quantities.into_iter().map(Option::unwrap_or_default).collect())
}
