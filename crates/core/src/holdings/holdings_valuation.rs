//! Pure per-holding valuation arithmetic.

use rust_decimal::Decimal;

use super::holdings_model::{Holding, HoldingValuation};

/// Computes the derived metrics for one holding.
///
/// Total by design: a malformed holding (`amount <= 0`) yields an all-zero
/// valuation instead of failing, so a transient bad data point can never
/// poison downstream aggregation. A zero `avg_buy_price` yields a zero
/// percentage rather than a division by zero.
pub fn valuate_holding(holding: &Holding) -> HoldingValuation {
    if holding.amount <= Decimal::ZERO {
        return HoldingValuation::zero();
    }

    let current_value = holding.amount * holding.current_price;
    let invested_value = holding.amount * holding.avg_buy_price;
    let gain_loss = current_value - invested_value;

    let gain_loss_percent = if holding.avg_buy_price > Decimal::ZERO {
        (holding.current_price - holding.avg_buy_price) / holding.avg_buy_price
            * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    HoldingValuation {
        current_value,
        invested_value,
        gain_loss,
        gain_loss_percent,
    }
}
