use serde::{Deserialize, Serialize};

use crate::error::{Result, ValidationError};

/// Earliest simulated year accepted (same civil range as `jiff`)
pub const MIN_YEAR: i32 = -9999;
/// Latest simulated year accepted
pub const MAX_YEAR: i32 = 9999;

/// Contiguous, ascending, non-empty span of simulated years (inclusive)
///
/// Deserialization goes through [`YearRange::new`], so a range read from a
/// file holds the same invariants as one built in code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawYearRange")]
pub struct YearRange {
    start: i32,
    end: i32,
}

#[derive(Deserialize)]
struct RawYearRange {
    start: i32,
    end: i32,
}

impl TryFrom<RawYearRange> for YearRange {
    type Error = ValidationError;

    fn try_from(raw: RawYearRange) -> Result<Self> {
        Self::new(raw.start, raw.end)
    }
}

impl YearRange {
    /// Both bounds must lie in `MIN_YEAR..=MAX_YEAR` and `start <= end`.
    pub fn new(start: i32, end: i32) -> Result<Self> {
        for year in [start, end] {
            if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
                return Err(ValidationError::YearOutOfRange(year));
            }
        }
        if start > end {
            return Err(ValidationError::InvertedYearRange { start, end });
        }
        Ok(Self { start, end })
    }

    #[must_use]
    pub fn single(year: i32) -> Self {
        Self {
            start: year,
            end: year,
        }
    }

    #[must_use]
    pub fn start(&self) -> i32 {
        self.start
    }

    #[must_use]
    pub fn end(&self) -> i32 {
        self.end
    }

    /// Number of years in the range (always at least 1)
    #[must_use]
    pub fn len(&self) -> usize {
        offset(self.start, self.end) + 1
    }

    #[must_use]
    pub fn contains(&self, year: i32) -> bool {
        (self.start..=self.end).contains(&year)
    }

    /// Zero-based position of `year` within the range
    #[must_use]
    pub fn index_of(&self, year: i32) -> Option<usize> {
        self.contains(year).then(|| offset(self.start, year))
    }

    pub fn iter(&self) -> impl Iterator<Item = i32> + use<> {
        self.start..=self.end
    }

    pub(crate) fn bounds(&self) -> (i32, i32) {
        (self.start, self.end)
    }
}

/// Distance from `from` to `to`, with `from <= to`
fn offset(from: i32, to: i32) -> usize {
    usize::try_from(i64::from(to) - i64::from(from)).unwrap_or(0)
}
