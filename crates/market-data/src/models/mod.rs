//! Market data models
//!
//! - `profile` - Coin identity (CoinProfile)
//! - `quote` - Quote and price-history samples (Quote, PricePoint)
//! - `market` - Per-coin snapshot and aggregate overview (CoinMarketData,
//!   MarketOverview, compute_market_overview)
//! - `listing` - Discovery-feed entries (NewListing)

mod listing;
mod market;
mod profile;
mod quote;

pub use listing::NewListing;
pub use market::{compute_market_overview, CoinMarketData, MarketOverview};
pub use profile::CoinProfile;
pub use quote::{PricePoint, Quote};
