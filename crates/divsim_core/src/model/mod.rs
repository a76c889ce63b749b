mod purchase;
mod results;
mod security;
mod years;

use rustc_hash::FxHashMap;

pub use purchase::YearlyPurchase;
pub use results::{MonthlyRecord, SecurityDividend, SimulationResult, YearlySummary};
pub use security::{InvalidMonth, PayoutMonths, Security};
pub(crate) use security::is_valid_amount;
pub use years::{MAX_YEAR, MIN_YEAR, YearRange};

/// Per-security values keyed by security name
pub type ByName<T> = FxHashMap<String, T>;
