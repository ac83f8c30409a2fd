use serde::{Deserialize, Serialize};

/// User preferences persisted in the key-value store.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Display currency code (e.g. "USD", "EUR", "BTC")
    pub currency: String,

    /// UI theme name ("dark" or "light")
    pub theme: String,

    /// Seconds between price-refresh ticks
    pub refresh_interval_secs: u64,

    pub notifications_enabled: bool,

    pub sound_enabled: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            currency: "USD".to_string(),
            theme: "dark".to_string(),
            refresh_interval_secs: 30,
            notifications_enabled: true,
            sound_enabled: false,
        }
    }
}

/// Patch for a settings update. `None` fields are left untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub currency: Option<String>,
    pub theme: Option<String>,
    pub refresh_interval_secs: Option<u64>,
    pub notifications_enabled: Option<bool>,
    pub sound_enabled: Option<bool>,
}
