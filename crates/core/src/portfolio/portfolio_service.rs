//! Orchestration between the price feed and the pure calculators.

use std::sync::Arc;

use async_trait::async_trait;
use log::debug;

use vibeshift_market_data::MarketDataProvider;

use crate::errors::Result;
use crate::holdings::HoldingsServiceTrait;

use super::portfolio_model::PortfolioSnapshot;
use super::snapshot_calculator::aggregate_portfolio;

#[async_trait]
pub trait PortfolioServiceTrait: Send + Sync {
    /// Aggregates the current holdings without touching the price feed.
    fn snapshot(&self) -> PortfolioSnapshot;

    /// Pulls a fresh market snapshot from the provider, applies it to the
    /// holdings and aggregates. One call per refresh tick; each invocation
    /// is independent and the most recent snapshot wins.
    async fn refresh_and_snapshot(&self) -> Result<PortfolioSnapshot>;
}

pub struct PortfolioService {
    holdings_service: Arc<dyn HoldingsServiceTrait>,
    market_data_provider: Arc<dyn MarketDataProvider>,
}

impl PortfolioService {
    pub fn new(
        holdings_service: Arc<dyn HoldingsServiceTrait>,
        market_data_provider: Arc<dyn MarketDataProvider>,
    ) -> Self {
        Self {
            holdings_service,
            market_data_provider,
        }
    }
}

#[async_trait]
impl PortfolioServiceTrait for PortfolioService {
    fn snapshot(&self) -> PortfolioSnapshot {
        aggregate_portfolio(&self.holdings_service.get_holdings())
    }

    async fn refresh_and_snapshot(&self) -> Result<PortfolioSnapshot> {
        let market_snapshot = self.market_data_provider.market_snapshot().await?;
        let updated = self
            .holdings_service
            .apply_market_snapshot(&market_snapshot)
            .await;
        debug!(
            "Refreshed {} holdings from provider {}",
            updated,
            self.market_data_provider.id()
        );
        Ok(self.snapshot())
    }
}
