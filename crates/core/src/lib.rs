//! Core calculation logic for Ledgerly.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every function is deterministic and side-effect free, so it can be called
//! concurrently from any number of request handlers.
//!
//! # Modules
//!
//! - `apportion` - Percentage and basis-point splitting of minor-unit amounts
//! - `tax` - Tax rates, inclusive/exclusive breakdowns, and tax summaries

pub mod apportion;
pub mod tax;
