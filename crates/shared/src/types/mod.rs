//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::TaxId;
pub use money::{Amount, Currency, Money};
