use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::quote::PricePoint;

/// One coin's market snapshot as the dashboard consumes it.
///
/// The pseudo-indicator fields (`trend_score`, `rsi`, `macd`) are carried as
/// opaque display data supplied by the feed; no indicator math is performed
/// on them anywhere in this workspace.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinMarketData {
    /// Stable identifier (e.g., "bitcoin")
    pub id: String,
    pub symbol: String,
    pub name: String,

    /// Latest price
    pub price: Decimal,

    /// 24h change, in percent
    pub change_24h: Decimal,

    /// 24h traded volume
    pub volume_24h: Decimal,

    /// Market capitalization
    pub market_cap: Decimal,

    /// Trailing price history, chronological
    pub price_history: Vec<PricePoint>,

    /// Feed-supplied trend score, -5..=5
    pub trend_score: i32,

    /// Feed-supplied RSI, 0..100
    pub rsi: Decimal,

    /// Feed-supplied MACD value
    pub macd: Decimal,

    pub last_updated: DateTime<Utc>,
}

/// Aggregate figures across a market snapshot.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketOverview {
    pub total_market_cap: Decimal,
    pub total_volume_24h: Decimal,
    /// Bitcoin's share of total market cap, in percent
    pub btc_dominance: Decimal,
    /// Number of coins in the snapshot
    pub active_coins: usize,
}

/// Reduces a market snapshot into the overview card figures.
///
/// Dominance is zero when the snapshot is empty, has no bitcoin entry, or
/// the total market cap is zero.
pub fn compute_market_overview(snapshot: &[CoinMarketData]) -> MarketOverview {
    let total_market_cap: Decimal = snapshot.iter().map(|coin| coin.market_cap).sum();
    let total_volume_24h: Decimal = snapshot.iter().map(|coin| coin.volume_24h).sum();

    let btc_dominance = snapshot
        .iter()
        .find(|coin| coin.id == "bitcoin")
        .filter(|_| total_market_cap > Decimal::ZERO)
        .map(|btc| btc.market_cap / total_market_cap * Decimal::ONE_HUNDRED)
        .unwrap_or(Decimal::ZERO);

    MarketOverview {
        total_market_cap,
        total_volume_24h,
        btc_dominance,
        active_coins: snapshot.len(),
    }
}
