use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One holding's slice of the portfolio.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Allocation {
    pub holding_id: String,
    pub symbol: String,
    /// Current market value of the holding
    pub value: Decimal,
    /// Share of total portfolio value, in percent. Zero when the portfolio
    /// value is zero.
    pub percentage: Decimal,
}

/// Best/worst performer reference in a snapshot.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct PerformerSummary {
    pub holding_id: String,
    pub symbol: String,
    pub gain_loss_percent: Decimal,
}

/// Derived portfolio state at a point in time. Never stored; recomputed
/// from the holdings snapshot on every call.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioSnapshot {
    pub total_value: Decimal,
    pub total_invested: Decimal,
    pub total_gain_loss: Decimal,
    /// Percent; zero when nothing is invested
    pub total_gain_loss_percent: Decimal,
    /// Full allocation list, sorted descending by value. Consumers showing
    /// a limited number of rows condense the tail with
    /// [`condense_allocations`](crate::portfolio::condense_allocations).
    pub allocations: Vec<Allocation>,
    /// `None` for an empty portfolio
    pub best_performer: Option<PerformerSummary>,
    pub worst_performer: Option<PerformerSummary>,
}

/// Summary of an ordered numeric sample series (portfolio value over time).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SeriesStats {
    pub delta: Decimal,
    /// Percent; zero when the series is empty, a singleton, or starts at or
    /// below zero
    pub delta_percent: Decimal,
}
