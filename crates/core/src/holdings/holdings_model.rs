use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Result, ValidationError};

/// One purchased position in one asset.
///
/// Invariant: `amount > 0` and `avg_buy_price > 0`, enforced once at
/// construction via [`NewHolding::validate`]. `current_price` is supplied
/// by the price feed and may be zero (a coin that lost all value remains a
/// valid position showing a 100% loss).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Holding {
    /// Opaque unique identifier
    pub id: String,

    // Identity of the underlying asset
    pub asset_id: String,
    pub symbol: String,
    pub name: String,

    /// Quantity held
    pub amount: Decimal,

    /// Average cost basis per unit
    pub avg_buy_price: Decimal,

    /// Latest known price per unit
    pub current_price: Decimal,

    /// Informational only, used for sorting and display
    pub date_added: DateTime<Utc>,
}

/// Payload for creating a holding, as submitted by the UI's add-holding
/// form. Validation happens here, never during aggregation.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewHolding {
    pub asset_id: String,
    pub symbol: String,
    pub name: String,
    pub amount: Decimal,
    pub avg_buy_price: Decimal,
    pub current_price: Decimal,
}

impl NewHolding {
    pub fn validate(&self) -> Result<()> {
        if self.asset_id.trim().is_empty() {
            return Err(ValidationError::MissingField("assetId".to_string()).into());
        }
        if self.symbol.trim().is_empty() {
            return Err(ValidationError::MissingField("symbol".to_string()).into());
        }
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "amount must be positive, got {}",
                self.amount
            ))
            .into());
        }
        if self.avg_buy_price <= Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "avgBuyPrice must be positive, got {}",
                self.avg_buy_price
            ))
            .into());
        }
        if self.current_price < Decimal::ZERO {
            return Err(ValidationError::InvalidInput(format!(
                "currentPrice must not be negative, got {}",
                self.current_price
            ))
            .into());
        }
        Ok(())
    }
}

/// Patch for an explicit edit of a holding. `None` fields are left
/// untouched.
#[derive(Serialize, Deserialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase")]
pub struct HoldingUpdate {
    pub amount: Option<Decimal>,
    pub avg_buy_price: Option<Decimal>,
    pub current_price: Option<Decimal>,
}

/// Derived per-holding metrics, produced by
/// [`valuate_holding`](crate::holdings::valuate_holding).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct HoldingValuation {
    pub current_value: Decimal,
    pub invested_value: Decimal,
    pub gain_loss: Decimal,
    /// Percent, e.g. 22.28 for +22.28%
    pub gain_loss_percent: Decimal,
}

impl HoldingValuation {
    pub fn zero() -> Self {
        HoldingValuation {
            current_value: Decimal::ZERO,
            invested_value: Decimal::ZERO,
            gain_loss: Decimal::ZERO,
            gain_loss_percent: Decimal::ZERO,
        }
    }
}
