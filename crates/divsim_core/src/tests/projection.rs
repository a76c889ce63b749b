//! Tests for single-security projection
//!
//! These tests verify:
//! - Holdings accumulate purchases and never decrease
//! - Dividends appear only in payout months
//! - Same-year purchases count toward every payout of that year

use super::{assert_close, security};
use crate::error::ValidationError;
use crate::model::{YearRange, YearlyPurchase};
use crate::projection::project;

#[test]
fn test_holdings_accumulate_purchases() {
    let years = YearRange::new(2024, 2027).unwrap();
    let purchases = [
        YearlyPurchase::new(2024, 10, 5_000.0),
        YearlyPurchase::new(2025, 5, 6_000.0),
        YearlyPurchase::new(2027, 7, 6_500.0),
    ];

    let projection = project(&security("A", 1_000.0, &[3, 6, 9, 12]), &purchases, years).unwrap();

    let holdings: Vec<(i32, u64)> = projection.holdings.iter().collect();
    assert_eq!(holdings, vec![(2024, 10), (2025, 15), (2026, 15), (2027, 22)]);
}

#[test]
fn test_holdings_are_monotonic() {
    let years = YearRange::new(2020, 2029).unwrap();
    let purchases: Vec<YearlyPurchase> = years
        .iter()
        .map(|year| YearlyPurchase::new(year, (year % 3) as u64, 100.0))
        .collect();

    let projection = project(&security("A", 1.0, &[1]), &purchases, years).unwrap();

    let held: Vec<u64> = projection.holdings.iter().map(|(_, h)| h).collect();
    assert!(held.windows(2).all(|pair| pair[0] <= pair[1]));
}

#[test]
fn test_non_payout_months_pay_nothing() {
    let years = YearRange::new(2024, 2025).unwrap();
    let payout = [4, 10];
    let projection = project(
        &security("A", 250.0, &payout),
        &[YearlyPurchase::new(2024, 40, 9_000.0)],
        years,
    )
    .unwrap();

    for year in years.iter() {
        for month in 1..=12u8 {
            let dividend = projection.dividends.get(year, month).unwrap();
            if payout.contains(&month) {
                assert_close(dividend, 10_000.0);
            } else {
                assert_eq!(dividend, 0.0, "{year}-{month:02} should pay nothing");
            }
        }
    }
}

#[test]
fn test_same_year_purchase_counts_for_earlier_payouts() {
    // A purchase "made" late in the year still receives January's payout.
    let projection = project(
        &security("A", 10.0, &[1, 12]),
        &[YearlyPurchase::new(2024, 3, 1.0)],
        YearRange::single(2024),
    )
    .unwrap();

    assert_close(projection.dividends.get(2024, 1).unwrap(), 30.0);
    assert_close(projection.dividends.get(2024, 12).unwrap(), 30.0);
}

#[test]
fn test_unordered_purchases_are_accepted() {
    let years = YearRange::new(2024, 2026).unwrap();
    let purchases = [
        YearlyPurchase::new(2026, 1, 1.0),
        YearlyPurchase::new(2024, 2, 1.0),
    ];

    let projection = project(&security("A", 1.0, &[6]), &purchases, years).unwrap();

    assert_eq!(projection.holdings.get(2024), Some(2));
    assert_eq!(projection.holdings.get(2025), Some(2));
    assert_eq!(projection.holdings.get(2026), Some(3));
}

#[test]
fn test_negative_dividend_rejected() {
    let mut bad = security("A", 1.0, &[6]);
    bad.dividend_per_share = -0.5;

    let err = project(&bad, &[], YearRange::single(2024)).unwrap_err();
    assert!(matches!(err, ValidationError::InvalidDividend { .. }));
}

#[test]
fn test_purchase_outside_range_rejected() {
    let err = project(
        &security("A", 1.0, &[6]),
        &[YearlyPurchase::new(2030, 1, 1.0)],
        YearRange::new(2024, 2025).unwrap(),
    )
    .unwrap_err();

    assert_eq!(
        err,
        ValidationError::PurchaseOutsideRange {
            security: "A".into(),
            year: 2030
        }
    );
}

#[test]
fn test_duplicate_purchase_year_rejected() {
    let err = project(
        &security("A", 1.0, &[6]),
        &[
            YearlyPurchase::new(2024, 1, 1.0),
            YearlyPurchase::new(2024, 2, 1.0),
        ],
        YearRange::single(2024),
    )
    .unwrap_err();

    assert!(matches!(err, ValidationError::DuplicatePurchaseYear { year: 2024, .. }));
}
