pub mod holdings_model;
pub mod holdings_service;
pub mod holdings_valuation;


pub use holdings_model::*;
pub use holdings_service::{HoldingsService, HoldingsServiceTrait};
pub use holdings_valuation::valuate_holding;
