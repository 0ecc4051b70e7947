//! Tax calculations on top of the apportionment engine.
//!
//! - `TaxRate` - basis-point tax rates
//! - `TaxBreakdown` - base / tax / total split of an amount
//! - `TaxSummaryService` - collected vs paid tax per configured tax

pub mod breakdown;
pub mod error;
pub mod rate;
pub mod summary;
pub mod types;


pub use breakdown::{TaxBreakdown, business_portion};
pub use error::TaxError;
pub use rate::TaxRate;
pub use summary::TaxSummaryService;
pub use types::{ReportPeriod, TaxSummary, TaxTotals, TaxedItem};
