//! Holdings lifecycle service.
//!
//! Owns the only mutable state in the crate: the set of holdings the user
//! has entered. Holdings are created by the add-holding form, edited or
//! deleted explicitly, and have their `current_price` overwritten by each
//! price-refresh tick. Everything derived (valuation, totals, allocation)
//! is recomputed per call by the pure calculators.

use async_trait::async_trait;
use chrono::Utc;
use dashmap::DashMap;
use log::debug;
use rust_decimal::Decimal;
use uuid::Uuid;

use vibeshift_market_data::CoinMarketData;

use crate::errors::{Error, Result, ValidationError};

use super::holdings_model::{Holding, HoldingUpdate, NewHolding};

#[async_trait]
pub trait HoldingsServiceTrait: Send + Sync {
    /// Validates and stores a new holding, returning it with its generated
    /// id and creation timestamp.
    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding>;

    /// Applies an explicit edit to an existing holding.
    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding>;

    /// Removes a holding.
    async fn delete_holding(&self, id: &str) -> Result<()>;

    fn get_holding(&self, id: &str) -> Result<Holding>;

    /// Current snapshot of all holdings, ordered by `date_added` (then id,
    /// for a deterministic order between holdings added in the same
    /// instant).
    fn get_holdings(&self) -> Vec<Holding>;

    /// Price-refresh tick: overwrites `current_price` for every holding
    /// whose asset appears in the snapshot. Holdings without a matching
    /// coin keep their last known price. Returns the number of holdings
    /// updated.
    async fn apply_market_snapshot(&self, snapshot: &[CoinMarketData]) -> usize;
}

/// In-memory implementation of [`HoldingsServiceTrait`].
#[derive(Default)]
pub struct HoldingsService {
    holdings: DashMap<String, Holding>,
}

impl HoldingsService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl HoldingsServiceTrait for HoldingsService {
    async fn add_holding(&self, new_holding: NewHolding) -> Result<Holding> {
        new_holding.validate()?;

        let holding = Holding {
            id: Uuid::new_v4().to_string(),
            asset_id: new_holding.asset_id,
            symbol: new_holding.symbol,
            name: new_holding.name,
            amount: new_holding.amount,
            avg_buy_price: new_holding.avg_buy_price,
            current_price: new_holding.current_price,
            date_added: Utc::now(),
        };

        debug!("Adding holding {} ({})", holding.id, holding.symbol);
        self.holdings.insert(holding.id.clone(), holding.clone());
        Ok(holding)
    }

    async fn update_holding(&self, id: &str, update: HoldingUpdate) -> Result<Holding> {
        let mut entry = self
            .holdings
            .get_mut(id)
            .ok_or_else(|| Error::Holding(format!("Holding not found: {}", id)))?;

        if let Some(amount) = update.amount {
            if amount <= Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "amount must be positive, got {}",
                    amount
                ))
                .into());
            }
            entry.amount = amount;
        }
        if let Some(avg_buy_price) = update.avg_buy_price {
            if avg_buy_price <= Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "avgBuyPrice must be positive, got {}",
                    avg_buy_price
                ))
                .into());
            }
            entry.avg_buy_price = avg_buy_price;
        }
        if let Some(current_price) = update.current_price {
            if current_price < Decimal::ZERO {
                return Err(ValidationError::InvalidInput(format!(
                    "currentPrice must not be negative, got {}",
                    current_price
                ))
                .into());
            }
            entry.current_price = current_price;
        }

        Ok(entry.clone())
    }

    async fn delete_holding(&self, id: &str) -> Result<()> {
        self.holdings
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| Error::Holding(format!("Holding not found: {}", id)))
    }

    fn get_holding(&self, id: &str) -> Result<Holding> {
        self.holdings
            .get(id)
            .map(|entry| entry.clone())
            .ok_or_else(|| Error::Holding(format!("Holding not found: {}", id)))
    }

    fn get_holdings(&self) -> Vec<Holding> {
        let mut holdings: Vec<Holding> = self
            .holdings
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        holdings.sort_by(|a, b| a.date_added.cmp(&b.date_added).then(a.id.cmp(&b.id)));
        holdings
    }

    async fn apply_market_snapshot(&self, snapshot: &[CoinMarketData]) -> usize {
        let mut updated = 0;
        for mut entry in self.holdings.iter_mut() {
            if let Some(coin) = snapshot.iter().find(|coin| coin.id == entry.asset_id) {
                entry.current_price = coin.price;
                updated += 1;
            }
        }
        debug!(
            "Applied market snapshot: {} of {} holdings updated",
            updated,
            self.holdings.len()
        );
        updated
    }
}
