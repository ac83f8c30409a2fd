use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A discovery-feed entry for a recently launched coin.
///
/// The three scores are feed-supplied heuristics in 1..=10.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewListing {
    pub id: String,
    pub name: String,
    pub symbol: String,
    pub price: Decimal,
    pub market_cap: Decimal,
    pub launch_date: DateTime<Utc>,
    pub risk_score: u8,
    pub potential_score: u8,
    pub liquidity_score: u8,
}
