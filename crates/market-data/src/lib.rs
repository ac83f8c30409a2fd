//! VibeShift Market Data Crate
//!
//! This crate provides the market data surface the VibeShift core consumes
//! prices through:
//!
//! - Models for per-coin market snapshots, price history and discovery-feed
//!   listings
//! - The [`MarketDataProvider`] trait a price feed implements
//! - A [`SimulatedProvider`] that generates a random-walk feed, used during
//!   development and in tests
//! - Market overview aggregation (total cap, volume, BTC dominance)
//!
//! No real exchange or aggregator integration lives here; in a deployment
//! the same trait would be implemented against a price-history service.
//!
//! # Core Types
//!
//! - [`CoinProfile`] - Identity of a tracked asset
//! - [`CoinMarketData`] - One coin's snapshot as the dashboard consumes it
//! - [`PricePoint`] - A sample in a coin's price history
//! - [`MarketOverview`] - Aggregate figures across a snapshot
//! - [`NewListing`] - A discovery-feed entry

pub mod errors;
pub mod models;
pub mod provider;

pub use errors::MarketDataError;
pub use models::{
    compute_market_overview, CoinMarketData, CoinProfile, MarketOverview, NewListing, PricePoint,
    Quote,
};
pub use provider::{MarketDataProvider, SimulatedProvider};
