//! Market data provider implementations.

pub mod simulated;
mod traits;

pub use simulated::SimulatedProvider;
pub use traits::MarketDataProvider;
