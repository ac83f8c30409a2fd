use serde::{Deserialize, Serialize};

/// Identity of a tracked asset.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CoinProfile {
    /// Stable identifier (e.g., "bitcoin")
    pub id: String,

    /// Ticker symbol (e.g., "BTC")
    pub symbol: String,

    /// Display name (e.g., "Bitcoin")
    pub name: String,
}

impl CoinProfile {
    pub fn new(id: &str, symbol: &str, name: &str) -> Self {
        Self {
            id: id.to_string(),
            symbol: symbol.to_string(),
            name: name.to_string(),
        }
    }
}
