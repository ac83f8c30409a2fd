//! Watchlist store over the key-value boundary.

use std::sync::Arc;

use async_trait::async_trait;
use log::{debug, warn};

use vibeshift_market_data::CoinMarketData;

use crate::constants::{DEFAULT_WATCHLIST, WATCHLIST_STORAGE_KEY};
use crate::errors::Result;
use crate::storage::KvStoreTrait;

#[async_trait]
pub trait WatchlistServiceTrait: Send + Sync {
    /// The watched coin ids, in insertion order. A fresh store starts with
    /// the default list.
    fn get_watchlist(&self) -> Result<Vec<String>>;

    /// Adds a coin id. Idempotent; adding a watched coin changes nothing.
    async fn add_to_watchlist(&self, coin_id: &str) -> Result<Vec<String>>;

    /// Removes a coin id. Removing an unwatched coin changes nothing.
    async fn remove_from_watchlist(&self, coin_id: &str) -> Result<Vec<String>>;

    /// Restricts a market snapshot to the watched coins, preserving the
    /// snapshot's order.
    fn filter_market_data(&self, snapshot: &[CoinMarketData]) -> Result<Vec<CoinMarketData>>;
}

pub struct WatchlistService {
    store: Arc<dyn KvStoreTrait>,
}

impl WatchlistService {
    pub fn new(store: Arc<dyn KvStoreTrait>) -> Self {
        Self { store }
    }

    fn load(&self) -> Result<Vec<String>> {
        match self.store.get(WATCHLIST_STORAGE_KEY)? {
            Some(raw) => match serde_json::from_str(&raw) {
                Ok(list) => Ok(list),
                Err(e) => {
                    warn!("Stored watchlist is unreadable ({}), using defaults", e);
                    Ok(default_watchlist())
                }
            },
            None => Ok(default_watchlist()),
        }
    }

    fn save(&self, watchlist: &[String]) -> Result<()> {
        let raw = serde_json::to_string(watchlist)?;
        self.store.set(WATCHLIST_STORAGE_KEY, &raw)
    }
}

fn default_watchlist() -> Vec<String> {
    DEFAULT_WATCHLIST.iter().map(|id| id.to_string()).collect()
}

#[async_trait]
impl WatchlistServiceTrait for WatchlistService {
    fn get_watchlist(&self) -> Result<Vec<String>> {
        self.load()
    }

    async fn add_to_watchlist(&self, coin_id: &str) -> Result<Vec<String>> {
        let mut watchlist = self.load()?;
        if !watchlist.iter().any(|id| id == coin_id) {
            watchlist.push(coin_id.to_string());
            self.save(&watchlist)?;
            debug!("Added {} to watchlist", coin_id);
        }
        Ok(watchlist)
    }

    async fn remove_from_watchlist(&self, coin_id: &str) -> Result<Vec<String>> {
        let mut watchlist = self.load()?;
        let before = watchlist.len();
        watchlist.retain(|id| id != coin_id);
        if watchlist.len() != before {
            self.save(&watchlist)?;
            debug!("Removed {} from watchlist", coin_id);
        }
        Ok(watchlist)
    }

    fn filter_market_data(&self, snapshot: &[CoinMarketData]) -> Result<Vec<CoinMarketData>> {
        let watchlist = self.load()?;
        Ok(snapshot
            .iter()
            .filter(|coin| watchlist.iter().any(|id| *id == coin.id))
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryKvStore;
    use chrono::Utc;
    use rust_decimal::Decimal;
    use rust_decimal_macros::dec;

    fn service() -> WatchlistService {
        WatchlistService::new(Arc::new(MemoryKvStore::new()))
    }

    fn coin(id: &str) -> CoinMarketData {
        CoinMarketData {
            id: id.to_string(),
            symbol: id.to_uppercase(),
            name: id.to_string(),
            price: dec!(1),
            change_24h: Decimal::ZERO,
            volume_24h: Decimal::ZERO,
            market_cap: Decimal::ZERO,
            price_history: vec![],
            trend_score: 0,
            rsi: dec!(50),
            macd: Decimal::ZERO,
            last_updated: Utc::now(),
        }
    }

    #[tokio::test]
    async fn fresh_store_starts_with_defaults() {
        let service = service();
        assert_eq!(
            service.get_watchlist().unwrap(),
            vec!["bitcoin", "ethereum", "cardano"]
        );
    }

    #[tokio::test]
    async fn add_is_idempotent_and_persists() {
        let store = Arc::new(MemoryKvStore::new());
        let service = WatchlistService::new(store.clone());

        service.add_to_watchlist("solana").await.unwrap();
        let after_repeat = service.add_to_watchlist("solana").await.unwrap();
        assert_eq!(
            after_repeat,
            vec!["bitcoin", "ethereum", "cardano", "solana"]
        );

        // A second service over the same store sees the persisted list
        let reloaded = WatchlistService::new(store);
        assert_eq!(reloaded.get_watchlist().unwrap().len(), 4);
    }

    #[tokio::test]
    async fn remove_drops_only_the_named_coin() {
        let service = service();
        let remaining = service.remove_from_watchlist("ethereum").await.unwrap();
        assert_eq!(remaining, vec!["bitcoin", "cardano"]);

        let unchanged = service.remove_from_watchlist("dogecoin").await.unwrap();
        assert_eq!(unchanged, vec!["bitcoin", "cardano"]);
    }

    #[tokio::test]
    async fn corrupt_stored_value_falls_back_to_defaults() {
        let store = Arc::new(MemoryKvStore::new());
        store.set(WATCHLIST_STORAGE_KEY, "not-json").unwrap();

        let service = WatchlistService::new(store);
        assert_eq!(
            service.get_watchlist().unwrap(),
            vec!["bitcoin", "ethereum", "cardano"]
        );
    }

    #[tokio::test]
    async fn filter_keeps_snapshot_order() {
        let service = service();
        let snapshot = vec![coin("solana"), coin("cardano"), coin("bitcoin")];
        let filtered = service.filter_market_data(&snapshot).unwrap();

        let ids: Vec<&str> = filtered.iter().map(|coin| coin.id.as_str()).collect();
        assert_eq!(ids, vec!["cardano", "bitcoin"]);
    }
}
