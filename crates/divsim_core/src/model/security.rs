//! Dividend-paying securities and their payout calendars

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// A month number outside `1..=12`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidMonth(pub u8);

impl fmt::Display for InvalidMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "month {} is not in 1..=12", self.0)
    }
}

impl std::error::Error for InvalidMonth {}

/// Set of calendar months (1-12) on which a security pays out.
///
/// Stored as a bitmask; bit `m - 1` is set when month `m` is a payout month.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "Vec<u8>", into = "Vec<u8>")]
pub struct PayoutMonths(u16);

impl PayoutMonths {
    pub const NONE: PayoutMonths = PayoutMonths(0);
    pub const ALL: PayoutMonths = PayoutMonths(0x0FFF);

    /// Build a month set, rejecting the first month outside `1..=12`.
    /// Repeated months are collapsed.
    pub fn from_months(
        months: impl IntoIterator<Item = u8>,
    ) -> std::result::Result<Self, InvalidMonth> {
        months.into_iter().try_fold(Self::NONE, |set, month| {
            if (1..=12).contains(&month) {
                Ok(PayoutMonths(set.0 | 1 << (month - 1)))
            } else {
                Err(InvalidMonth(month))
            }
        })
    }

    /// March, June, September and December
    #[must_use]
    pub fn quarterly() -> Self {
        PayoutMonths(0b1001_0010_0100)
    }

    #[must_use]
    pub fn contains(&self, month: u8) -> bool {
        (1..=12).contains(&month) && self.0 & (1 << (month - 1)) != 0
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Payout months in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u8> + '_ {
        (1..=12).filter(|m| self.contains(*m))
    }
}

impl TryFrom<Vec<u8>> for PayoutMonths {
    type Error = InvalidMonth;

    fn try_from(months: Vec<u8>) -> std::result::Result<Self, Self::Error> {
        Self::from_months(months)
    }
}

impl From<PayoutMonths> for Vec<u8> {
    fn from(months: PayoutMonths) -> Self {
        months.iter().collect()
    }
}

/// A dividend-paying security, fixed for the duration of one simulation run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Security {
    pub name: String,
    /// Cash paid per share on every payout month
    pub dividend_per_share: f64,
    pub payout_months: PayoutMonths,
}

impl Security {
    /// Create a security, checking the name, dividend and calendar.
    pub fn new(
        name: impl Into<String>,
        dividend_per_share: f64,
        payout_months: PayoutMonths,
    ) -> Result<Self> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptySecurityName);
        }
        if !is_valid_amount(dividend_per_share) {
            return Err(ValidationError::InvalidDividend {
                security: name,
                value: dividend_per_share,
            });
        }
        if payout_months.is_empty() {
            return Err(ValidationError::EmptyPayoutMonths(name));
        }

        Ok(Self {
            name,
            dividend_per_share,
            payout_months,
        })
    }
}

/// Amounts (dividends, prices) must be finite and non-negative
pub(crate) fn is_valid_amount(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}
