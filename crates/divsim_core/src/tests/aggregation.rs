//! Tests for portfolio aggregation
//!
//! These tests verify:
//! - One monthly record per (year, month), in order
//! - Monthly totals sum every security's contribution
//! - In-year running totals reset each January; all-time totals never reset
//! - Cumulative investment and the zero-safe return rate
//! - Consistency checks between securities, projections and purchases

use super::{assert_close, security};
use crate::aggregate::aggregate;
use crate::error::ValidationError;
use crate::model::{ByName, Security, YearRange, YearlyPurchase};
use crate::projection::{Projection, project};

struct Portfolio {
    securities: Vec<Security>,
    projections: ByName<Projection>,
    purchases: ByName<Vec<YearlyPurchase>>,
    years: YearRange,
}

fn portfolio(years: YearRange, entries: Vec<(Security, Vec<YearlyPurchase>)>) -> Portfolio {
    let mut projections = ByName::default();
    let mut purchases = ByName::default();
    let mut securities = Vec::new();
    for (security, bought) in entries {
        projections.insert(
            security.name.clone(),
            project(&security, &bought, years).unwrap(),
        );
        purchases.insert(security.name.clone(), bought);
        securities.push(security);
    }
    Portfolio {
        securities,
        projections,
        purchases,
        years,
    }
}

fn two_security_portfolio() -> Portfolio {
    portfolio(
        YearRange::new(2024, 2026).unwrap(),
        vec![
            (
                security("A", 100.0, &[3, 6, 9, 12]),
                vec![
                    YearlyPurchase::new(2024, 10, 2_000.0),
                    YearlyPurchase::new(2026, 10, 2_500.0),
                ],
            ),
            (
                security("B", 30.0, &[1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12]),
                vec![YearlyPurchase::new(2025, 50, 800.0)],
            ),
        ],
    )
}

#[test]
fn test_one_record_per_year_month_in_order() {
    let p = two_security_portfolio();
    let (monthly, yearly) =
        aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    assert_eq!(monthly.len(), p.years.len() * 12);
    assert_eq!(yearly.len(), p.years.len());

    let keys: Vec<(i32, u8)> = monthly.iter().map(|r| (r.year, r.month)).collect();
    let expected: Vec<(i32, u8)> = p
        .years
        .iter()
        .flat_map(|year| (1..=12).map(move |month| (year, month)))
        .collect();
    assert_eq!(keys, expected);
}

#[test]
fn test_total_is_sum_of_securities() {
    let p = two_security_portfolio();
    let (monthly, _) = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    for record in &monthly {
        let sum: f64 = record.dividend_by_security.iter().map(|d| d.amount).sum();
        assert_close(record.total_dividend, sum);
        assert!(record.total_dividend >= 0.0);
    }

    // March 2025: A pays 10 * 100, B pays 50 * 30 in the same month
    let march = monthly
        .iter()
        .find(|r| r.year == 2025 && r.month == 3)
        .unwrap();
    assert_close(march.dividend_for("A").unwrap(), 1_000.0);
    assert_close(march.dividend_for("B").unwrap(), 1_500.0);
    assert_close(march.total_dividend, 2_500.0);
}

#[test]
fn test_security_columns_follow_declaration_order() {
    let p = two_security_portfolio();
    let (monthly, _) = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    let names: Vec<&str> = monthly[0]
        .dividend_by_security
        .iter()
        .map(|d| d.security.as_str())
        .collect();
    assert_eq!(names, vec!["A", "B"]);
}

#[test]
fn test_running_totals() {
    let p = two_security_portfolio();
    let (monthly, yearly) =
        aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    for (year_months, summary) in monthly.chunks(12).zip(&yearly) {
        assert_eq!(year_months[0].cumulative_dividend_in_year, year_months[0].total_dividend);
        assert_close(year_months[11].cumulative_dividend_in_year, summary.yearly_dividend);
        assert!(
            year_months
                .windows(2)
                .all(|w| w[0].cumulative_dividend_in_year <= w[1].cumulative_dividend_in_year)
        );
    }

    let grand_total: f64 = monthly.iter().map(|r| r.total_dividend).sum();
    assert_close(monthly.last().unwrap().cumulative_dividend_all_time, grand_total);
    assert!(
        monthly
            .windows(2)
            .all(|w| w[0].cumulative_dividend_all_time <= w[1].cumulative_dividend_all_time)
    );
}

#[test]
fn test_cumulative_investment_and_rate() {
    let p = two_security_portfolio();
    let (_, yearly) = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    // 2024: A 10 @ 2000
    assert_close(yearly[0].cumulative_investment, 20_000.0);
    assert_close(yearly[0].yearly_dividend, 4_000.0);
    assert_close(yearly[0].yearly_return_rate_percent, 20.0);

    // 2025: + B 50 @ 800
    assert_close(yearly[1].cumulative_investment, 60_000.0);
    assert_close(yearly[1].yearly_dividend, 4_000.0 + 18_000.0);

    // 2026: + A 10 @ 2500
    assert_close(yearly[2].cumulative_investment, 85_000.0);
    assert_close(yearly[2].yearly_dividend, 8_000.0 + 18_000.0);
    assert_close(yearly[2].yearly_return_rate_percent, 26_000.0 / 85_000.0 * 100.0);

    assert!(
        yearly
            .windows(2)
            .all(|w| w[0].cumulative_investment <= w[1].cumulative_investment)
    );
}

#[test]
fn test_free_shares_have_zero_rate_without_division_error() {
    // Shares bought at price 0: dividends flow but nothing was invested
    let p = portfolio(
        YearRange::single(2024),
        vec![(security("A", 5.0, &[6]), vec![YearlyPurchase::new(2024, 10, 0.0)])],
    );
    let (_, yearly) = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap();

    assert_close(yearly[0].yearly_dividend, 50.0);
    assert_eq!(yearly[0].cumulative_investment, 0.0);
    assert_eq!(yearly[0].yearly_return_rate_percent, 0.0);
}

#[test]
fn test_projection_without_purchase_plan_rejected() {
    let mut p = two_security_portfolio();
    p.purchases.remove("B");

    let err = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap_err();
    assert_eq!(err, ValidationError::UnknownSecurity("B".into()));
}

#[test]
fn test_purchase_plan_without_projection_rejected() {
    let mut p = two_security_portfolio();
    p.projections.remove("A");

    let err = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap_err();
    assert_eq!(err, ValidationError::UnknownSecurity("A".into()));
}

#[test]
fn test_undeclared_security_rejected() {
    let mut p = two_security_portfolio();
    let stray = security("C", 1.0, &[1]);
    p.projections
        .insert("C".into(), project(&stray, &[], p.years).unwrap());
    p.purchases.insert("C".into(), vec![]);

    let err = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap_err();
    assert_eq!(err, ValidationError::UnknownSecurity("C".into()));
}

#[test]
fn test_mismatched_year_range_rejected() {
    let p = two_security_portfolio();
    let wider = YearRange::new(2024, 2027).unwrap();

    let err = aggregate(&p.securities, &p.projections, &p.purchases, wider).unwrap_err();
    assert_eq!(
        err,
        ValidationError::YearRangeMismatch {
            security: "A".into(),
            expected: (2024, 2027),
            found: (2024, 2026),
        }
    );
}

#[test]
fn test_duplicate_security_rejected() {
    let mut p = two_security_portfolio();
    p.securities.push(security("A", 1.0, &[1]));

    let err = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap_err();
    assert_eq!(err, ValidationError::DuplicateSecurity("A".into()));
}

#[test]
fn test_spliced_projection_series_rejected() {
    let mut p = two_security_portfolio();
    let shorter = project(
        &security("A", 100.0, &[3, 6, 9, 12]),
        &[YearlyPurchase::new(2024, 10, 2_000.0)],
        YearRange::new(2024, 2025).unwrap(),
    )
    .unwrap();
    if let Some(a) = p.projections.get_mut("A") {
        a.dividends = shorter.dividends;
    }

    let err = aggregate(&p.securities, &p.projections, &p.purchases, p.years).unwrap_err();
    assert_eq!(
        err,
        ValidationError::YearRangeMismatch {
            security: "A".into(),
            expected: (2024, 2026),
            found: (2024, 2025),
        }
    );
}
