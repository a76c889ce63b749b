//! Tests for the dividend simulation engine
//!
//! Tests are organized by topic:
//! - `projection` - Holdings and per-security dividend projection
//! - `aggregation` - Monthly/yearly merging and running totals
//! - `scenarios` - End-to-end portfolio scenarios
//! - `builder_dsl` - Builder DSL for fluent simulation setup
//! - `validation` - Rejection of invalid or inconsistent input

mod aggregation;
mod projection;

use crate::model::{PayoutMonths, Security};

/// Tolerance for comparing accumulated amounts
pub(crate) const EPSILON: f64 = 1e-6;

pub(crate) fn security(name: &str, dividend_per_share: f64, months: &[u8]) -> Security {
    Security::new(
        name,
        dividend_per_share,
        PayoutMonths::from_months(months.iter().copied()).unwrap(),
    )
    .unwrap()
}

pub(crate) fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < EPSILON,
        "expected {expected}, got {actual}"
    );
}
