/// Number of allocation rows shown before the remainder collapses into an
/// "Others" bucket.
pub const ALLOCATION_DISPLAY_LIMIT: usize = 5;

/// Decimal precision for display
pub const DISPLAY_DECIMAL_PRECISION: u32 = 2;

/// Key-value store key for the persisted watchlist
pub const WATCHLIST_STORAGE_KEY: &str = "vibeshift-watchlist";

/// Key-value store key for the persisted settings
pub const SETTINGS_STORAGE_KEY: &str = "vibeshift-settings";

/// Coin ids a fresh watchlist starts with
pub const DEFAULT_WATCHLIST: [&str; 3] = ["bitcoin", "ethereum", "cardano"];
