//! Portfolio aggregation - snapshot totals, allocation and series stats.

pub mod portfolio_model;
pub mod portfolio_service;
pub mod series_stats;
pub mod snapshot_calculator;

pub use portfolio_model::*;
pub use portfolio_service::{PortfolioService, PortfolioServiceTrait};
pub use series_stats::summarize_series;
pub use snapshot_calculator::{aggregate_portfolio, condense_allocations};
