//! Simulated market data provider.
//!
//! Generates a plausible-looking random feed for a fixed universe of major
//! coins: per-coin snapshot figures, a 30-day random-walk price history and
//! a discovery feed of fabricated recent listings. This is the development
//! and test stand-in for a real price-history service; the core only ever
//! sees it through the [`MarketDataProvider`] trait.

use async_trait::async_trait;
use chrono::{Duration, Utc};
use log::debug;
use rand::Rng;
use num_traits::FromPrimitive;
use rand_distr::{Distribution, Uniform};
use rust_decimal::Decimal;

use crate::errors::MarketDataError;
use crate::models::{CoinMarketData, CoinProfile, NewListing, PricePoint, Quote};
use crate::provider::traits::MarketDataProvider;

pub const PROVIDER_ID: &str = "SIMULATED";

/// Number of daily samples in a generated trailing history (30 days + today).
const DEFAULT_HISTORY_DAYS: u32 = 30;

const LISTING_NAMES: [(&str, &str); 12] = [
    ("MetaVerse Token", "META"),
    ("DeFi Protocol", "DEFI"),
    ("Green Energy Coin", "GREEN"),
    ("AI Network", "AINE"),
    ("Gaming Token", "GAME"),
    ("Social Media Coin", "SOCIAL"),
    ("Privacy Token", "PRIV"),
    ("Oracle Network", "ORACLE"),
    ("Cross-Chain Bridge", "BRIDGE"),
    ("NFT Marketplace", "NFTM"),
    ("Yield Farming", "YIELD"),
    ("Prediction Market", "PRED"),
];

/// Random-walk market data generator over a fixed coin universe.
pub struct SimulatedProvider {
    universe: Vec<CoinProfile>,
}

impl Default for SimulatedProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedProvider {
    /// Provider over the default universe of eight major coins.
    pub fn new() -> Self {
        Self {
            universe: vec![
                CoinProfile::new("bitcoin", "BTC", "Bitcoin"),
                CoinProfile::new("ethereum", "ETH", "Ethereum"),
                CoinProfile::new("cardano", "ADA", "Cardano"),
                CoinProfile::new("solana", "SOL", "Solana"),
                CoinProfile::new("polkadot", "DOT", "Polkadot"),
                CoinProfile::new("chainlink", "LINK", "Chainlink"),
                CoinProfile::new("polygon", "MATIC", "Polygon"),
                CoinProfile::new("avalanche", "AVAX", "Avalanche"),
            ],
        }
    }

    /// Provider over a caller-supplied universe.
    pub fn with_universe(universe: Vec<CoinProfile>) -> Self {
        Self { universe }
    }

    pub fn universe(&self) -> &[CoinProfile] {
        &self.universe
    }

    fn generate_coin(&self, profile: &CoinProfile) -> CoinMarketData {
        let mut rng = rand::thread_rng();

        let base_price = rng.gen_range(1_000.0..51_000.0);
        let change_24h = (rng.gen::<f64>() - 0.5) * 20.0;
        let volume_24h = rng.gen::<f64>() * 1_000_000_000.0;
        let market_cap = base_price * rng.gen_range(100_000.0..1_100_000.0);

        CoinMarketData {
            id: profile.id.clone(),
            symbol: profile.symbol.clone(),
            name: profile.name.clone(),
            price: decimal(base_price),
            change_24h: decimal(change_24h),
            volume_24h: decimal(volume_24h),
            market_cap: decimal(market_cap),
            price_history: generate_price_history(base_price, DEFAULT_HISTORY_DAYS),
            trend_score: rng.gen_range(-5..=5),
            rsi: decimal(rng.gen::<f64>() * 100.0),
            macd: decimal((rng.gen::<f64>() - 0.5) * 100.0),
            last_updated: Utc::now(),
        }
    }
}

#[async_trait]
impl MarketDataProvider for SimulatedProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn market_snapshot(&self) -> Result<Vec<CoinMarketData>, MarketDataError> {
        debug!("Generating simulated snapshot for {} coins", self.universe.len());
        Ok(self
            .universe
            .iter()
            .map(|profile| self.generate_coin(profile))
            .collect())
    }

    async fn latest_quote(&self, coin_id: &str) -> Result<Quote, MarketDataError> {
        if !self.universe.iter().any(|profile| profile.id == coin_id) {
            return Err(MarketDataError::SymbolNotFound(coin_id.to_string()));
        }
        let price = rand::thread_rng().gen_range(1_000.0..51_000.0);
        Ok(Quote::new(
            Utc::now(),
            decimal(price),
            "USD".to_string(),
            PROVIDER_ID.to_string(),
        ))
    }

    async fn price_history(
        &self,
        coin_id: &str,
        days: u32,
    ) -> Result<Vec<PricePoint>, MarketDataError> {
        if !self.universe.iter().any(|profile| profile.id == coin_id) {
            return Err(MarketDataError::SymbolNotFound(coin_id.to_string()));
        }
        let base_price = rand::thread_rng().gen_range(1_000.0..51_000.0);
        Ok(generate_price_history(base_price, days))
    }

    async fn new_listings(&self, limit: usize) -> Result<Vec<NewListing>, MarketDataError> {
        let mut rng = rand::thread_rng();
        let score = Uniform::new_inclusive(1u8, 10u8);
        let now = Utc::now();

        let mut listings: Vec<NewListing> = LISTING_NAMES
            .iter()
            .take(limit)
            .enumerate()
            .map(|(index, (name, symbol))| {
                let price = rng.gen::<f64>() * 10.0 + 0.1;
                let market_cap = price * rng.gen_range(1_000_000.0..11_000_000.0);
                let age_secs = rng.gen_range(0..7 * 24 * 60 * 60);
                NewListing {
                    id: format!("new-coin-{}", index),
                    name: (*name).to_string(),
                    symbol: (*symbol).to_string(),
                    price: decimal(price),
                    market_cap: decimal(market_cap),
                    launch_date: now - Duration::seconds(age_secs),
                    risk_score: score.sample(&mut rng),
                    potential_score: score.sample(&mut rng),
                    liquidity_score: score.sample(&mut rng),
                }
            })
            .collect();

        listings.sort_by(|a, b| b.launch_date.cmp(&a.launch_date));
        Ok(listings)
    }
}

/// Random walk around `base_price`, `days + 1` daily samples ending today,
/// clamped at zero.
fn generate_price_history(base_price: f64, days: u32) -> Vec<PricePoint> {
    let mut rng = rand::thread_rng();
    let now = Utc::now();
    let mut current = base_price;

    (0..=days)
        .rev()
        .map(|age| {
            current += (rng.gen::<f64>() - 0.5) * base_price * 0.1;
            current = current.max(0.0);
            PricePoint {
                timestamp: now - Duration::days(i64::from(age)),
                price: decimal(current),
                volume: decimal(rng.gen::<f64>() * 1_000_000_000.0),
            }
        })
        .collect()
}

fn decimal(value: f64) -> Decimal {
    Decimal::from_f64(value).unwrap_or(Decimal::ZERO)
}
