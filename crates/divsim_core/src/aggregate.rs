//! Portfolio aggregation
//!
//! Merges per-security projections into the monthly dividend table and the
//! yearly investment/return summary. Every running total is a scan over the
//! (year, month) ordering, so the cumulative columns can only grow.

use rustc_hash::FxHashSet;

use crate::error::{Result, ValidationError};
use crate::model::{
    ByName, MonthlyRecord, Security, SecurityDividend, YearRange, YearlyPurchase, YearlySummary,
    is_valid_amount,
};
use crate::projection::Projection;

const MONTHS: std::ops::RangeInclusive<u8> = 1..=12;

/// Yearly return as a percentage of everything invested so far.
///
/// Nothing invested yields 0 rather than a division error.
#[must_use]
pub fn return_rate_percent(yearly_dividend: f64, cumulative_investment: f64) -> f64 {
    if cumulative_investment > 0.0 {
        yearly_dividend / cumulative_investment * 100.0
    } else {
        0.0
    }
}

/// Combine per-security projections into monthly records and yearly summaries.
///
/// `securities`, `projections` and `purchases` must describe the same set of
/// securities, and every projection must cover exactly `years`.
pub fn aggregate(
    securities: &[Security],
    projections: &ByName<Projection>,
    purchases: &ByName<Vec<YearlyPurchase>>,
    years: YearRange,
) -> Result<(Vec<MonthlyRecord>, Vec<YearlySummary>)> {
    check_universe(securities, projections, purchases)?;

    let mut columns = Vec::with_capacity(securities.len());
    for security in securities {
        let name = &security.name;
        let (Some(projection), Some(bought)) = (projections.get(name), purchases.get(name)) else {
            return Err(ValidationError::UnknownSecurity(name.clone()));
        };
        // Holdings and dividends are indexed by position in `years`
        for found in [projection.years(), projection.dividends.years()] {
            if found != years {
                return Err(ValidationError::YearRangeMismatch {
                    security: name.clone(),
                    expected: years.bounds(),
                    found: found.bounds(),
                });
            }
        }
        check_purchases(name, bought, years)?;
        columns.push((name, projection, bought.as_slice()));
    }

    let monthly: Vec<MonthlyRecord> = years
        .iter()
        .enumerate()
        .flat_map(|(year_idx, year)| MONTHS.map(move |month| (year_idx, year, month)))
        .scan((0.0_f64, 0.0_f64), |(in_year, all_time), (year_idx, year, month)| {
            let dividend_by_security: Vec<SecurityDividend> = columns
                .iter()
                .map(|(name, projection, _)| SecurityDividend {
                    security: (*name).clone(),
                    amount: projection.dividends.by_index(year_idx)[usize::from(month) - 1],
                })
                .collect();
            let total_dividend: f64 = dividend_by_security.iter().map(|d| d.amount).sum();

            if month == 1 {
                *in_year = 0.0;
            }
            *in_year += total_dividend;
            *all_time += total_dividend;

            Some(MonthlyRecord {
                year,
                month,
                dividend_by_security,
                total_dividend,
                cumulative_dividend_in_year: *in_year,
                cumulative_dividend_all_time: *all_time,
            })
        })
        .collect();

    let yearly: Vec<YearlySummary> = years
        .iter()
        .zip(monthly.chunks_exact(12))
        .scan(0.0_f64, |invested, (year, months)| {
            *invested += columns
                .iter()
                .flat_map(|(_, _, bought)| bought.iter())
                .filter(|purchase| purchase.year == year)
                .map(YearlyPurchase::invested_amount)
                .sum::<f64>();
            let yearly_dividend: f64 = months.iter().map(|record| record.total_dividend).sum();

            Some(YearlySummary {
                year,
                cumulative_investment: *invested,
                yearly_dividend,
                yearly_return_rate_percent: return_rate_percent(yearly_dividend, *invested),
            })
        })
        .collect();

    tracing::debug!(
        securities = securities.len(),
        months = monthly.len(),
        total_dividends = monthly.last().map_or(0.0, |r| r.cumulative_dividend_all_time),
        "aggregated portfolio"
    );

    Ok((monthly, yearly))
}

/// Every name in either map must be a declared security, and vice versa
fn check_universe(
    securities: &[Security],
    projections: &ByName<Projection>,
    purchases: &ByName<Vec<YearlyPurchase>>,
) -> Result<()> {
    let mut declared = FxHashSet::default();
    for security in securities {
        if !declared.insert(security.name.as_str()) {
            return Err(ValidationError::DuplicateSecurity(security.name.clone()));
        }
    }

    let mut strays: Vec<&String> = projections
        .keys()
        .chain(purchases.keys())
        .filter(|name| !declared.contains(name.as_str()))
        .collect();
    strays.sort();

    match strays.first() {
        Some(name) => Err(ValidationError::UnknownSecurity((*name).clone())),
        None => Ok(()),
    }
}

/// Purchase years must fall in range and not repeat; prices must be valid amounts
pub(crate) fn check_purchases(
    security: &str,
    purchases: &[YearlyPurchase],
    years: YearRange,
) -> Result<()> {
    let mut seen = FxHashSet::default();
    for purchase in purchases {
        if !years.contains(purchase.year) {
            return Err(ValidationError::PurchaseOutsideRange {
                security: security.to_string(),
                year: purchase.year,
            });
        }
        if !seen.insert(purchase.year) {
            return Err(ValidationError::DuplicatePurchaseYear {
                security: security.to_string(),
                year: purchase.year,
            });
        }
        if !is_valid_amount(purchase.price_per_share) {
            return Err(ValidationError::InvalidPrice {
                security: security.to_string(),
                year: purchase.year,
                value: purchase.price_per_share,
            });
        }
    }
    Ok(())
}
