use std::fmt;

/// Invalid or inconsistent simulation input.
///
/// The engine refuses to compute when any of these is hit; each variant names
/// the security and/or year that broke the invariant.
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    EmptySecurityName,
    DuplicateSecurity(String),
    NoSecurities,
    InvalidDividend {
        security: String,
        value: f64,
    },
    EmptyPayoutMonths(String),
    PayoutMonthOutOfRange {
        security: String,
        month: u8,
    },
    InvalidPrice {
        security: String,
        year: i32,
        value: f64,
    },
    PurchaseOutsideRange {
        security: String,
        year: i32,
    },
    DuplicatePurchaseYear {
        security: String,
        year: i32,
    },
    InvertedYearRange {
        start: i32,
        end: i32,
    },
    /// A simulated year outside `MIN_YEAR..=MAX_YEAR`
    YearOutOfRange(i32),
    /// Cumulative holdings no longer fit in a share count
    HoldingsOverflow {
        security: String,
        year: i32,
    },
    /// A security appears in one input map but not the other
    UnknownSecurity(String),
    YearRangeMismatch {
        security: String,
        expected: (i32, i32),
        found: (i32, i32),
    },
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ValidationError::EmptySecurityName => write!(f, "security name must not be empty"),
            ValidationError::DuplicateSecurity(name) => {
                write!(f, "security {name:?} is defined more than once")
            }
            ValidationError::NoSecurities => write!(f, "no securities to simulate"),
            ValidationError::InvalidDividend { security, value } => write!(
                f,
                "dividend per share for {security:?} must be a non-negative amount (got {value})"
            ),
            ValidationError::EmptyPayoutMonths(name) => {
                write!(f, "security {name:?} has no payout months")
            }
            ValidationError::PayoutMonthOutOfRange { security, month } => {
                write!(f, "payout month {month} for {security:?} is not in 1..=12")
            }
            ValidationError::InvalidPrice {
                security,
                year,
                value,
            } => write!(
                f,
                "price per share for {security:?} in {year} must be a non-negative amount (got {value})"
            ),
            ValidationError::PurchaseOutsideRange { security, year } => {
                write!(f, "purchase of {security:?} in {year} is outside the simulated years")
            }
            ValidationError::DuplicatePurchaseYear { security, year } => {
                write!(f, "{security:?} has more than one purchase entry for {year}")
            }
            ValidationError::InvertedYearRange { start, end } => {
                write!(f, "year range {start}..={end} is empty")
            }
            ValidationError::YearOutOfRange(year) => write!(
                f,
                "year {year} is outside the supported range {}..={}",
                crate::model::MIN_YEAR,
                crate::model::MAX_YEAR
            ),
            ValidationError::HoldingsOverflow { security, year } => {
                write!(f, "holdings of {security:?} overflow in {year}")
            }
            ValidationError::UnknownSecurity(name) => write!(
                f,
                "security {name:?} is missing from either the projections or the purchase plan"
            ),
            ValidationError::YearRangeMismatch {
                security,
                expected,
                found,
            } => write!(
                f,
                "projection for {security:?} covers {}..={} but the simulation covers {}..={}",
                found.0, found.1, expected.0, expected.1
            ),
        }
    }
}

impl std::error::Error for ValidationError {}

pub type Result<T> = std::result::Result<T, ValidationError>;
