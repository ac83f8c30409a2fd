//! VibeShift Core - Portfolio valuation and allocation engine.
//!
//! This crate contains the computational heart of the VibeShift dashboard:
//! per-holding valuation, portfolio aggregation (totals, P&L, allocation
//! percentages, best/worst performer), time-series summary stats, and the
//! holdings/watchlist/settings services the UI layer drives. All derived
//! values are computed by pure calculators from an input snapshot; the only
//! mutable state lives in the in-memory stores.
//!
//! Market data arrives through the provider trait defined in the
//! `vibeshift-market-data` crate; the UI, charting and notification layers
//! are external consumers of the models exposed here.

pub mod constants;
pub mod errors;
pub mod holdings;
pub mod portfolio;
pub mod settings;
pub mod storage;
pub mod utils;
pub mod watchlist;

// Re-export common types from the holdings and portfolio modules
pub use holdings::*;
pub use portfolio::*;

// Re-export error types
pub use errors::Error;
pub use errors::Result;
