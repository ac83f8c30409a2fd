//! Market data provider trait definitions.

use async_trait::async_trait;

use crate::errors::MarketDataError;
use crate::models::{CoinMarketData, NewListing, PricePoint, Quote};

/// Trait for market data providers.
///
/// Implement this trait to plug a price feed into the dashboard core. The
/// shipped implementation is [`SimulatedProvider`](crate::SimulatedProvider);
/// a deployment would implement the same trait against a real price-history
/// service.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Unique identifier for this provider, used in quote sources and logs.
    fn id(&self) -> &'static str;

    /// Fetch the current snapshot for every coin the provider tracks.
    async fn market_snapshot(&self) -> Result<Vec<CoinMarketData>, MarketDataError>;

    /// Fetch the latest quote for one coin.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the coin id is not
    /// part of the provider's universe.
    async fn latest_quote(&self, coin_id: &str) -> Result<Quote, MarketDataError>;

    /// Fetch `days` of trailing daily price history for one coin,
    /// chronological, oldest first.
    ///
    /// Returns [`MarketDataError::SymbolNotFound`] when the coin id is not
    /// part of the provider's universe.
    async fn price_history(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, MarketDataError>;

    /// Fetch up to `limit` discovery-feed listings, newest first.
    async fn new_listings(&self, limit: usize) -> Result<Vec<NewListing>, MarketDataError>;
}
