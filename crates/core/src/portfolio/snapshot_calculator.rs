//! Pure portfolio aggregation.
//!
//! Reduces a holdings snapshot into totals, P&L, allocation percentages and
//! best/worst performer. Total by design: degenerate inputs (empty list,
//! zero amounts, zero prices) produce zero-valued results, never errors.

use rust_decimal::Decimal;

use crate::holdings::{valuate_holding, Holding};

use super::portfolio_model::{Allocation, PerformerSummary, PortfolioSnapshot};

/// Reduces a list of holdings into a [`PortfolioSnapshot`].
///
/// Single accumulation pass via [`valuate_holding`], then a second pass
/// computing each holding's allocation percentage against the accumulated
/// total. Best/worst performer are found by linear scan over
/// `gain_loss_percent`; ties keep the first-encountered holding. Duplicate
/// ids are a caller error and are not deduplicated.
///
/// The full allocation list is returned sorted descending by value (ties
/// stable) so display layers can truncate consistently.
pub fn aggregate_portfolio(holdings: &[Holding]) -> PortfolioSnapshot {
    if holdings.is_empty() {
        return PortfolioSnapshot::default();
    }

    let valuations: Vec<_> = holdings.iter().map(valuate_holding).collect();

    let mut total_value = Decimal::ZERO;
    let mut total_invested = Decimal::ZERO;
    for valuation in &valuations {
        total_value += valuation.current_value;
        total_invested += valuation.invested_value;
    }

    let total_gain_loss = total_value - total_invested;
    let total_gain_loss_percent = if total_invested > Decimal::ZERO {
        total_gain_loss / total_invested * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    let mut allocations: Vec<Allocation> = holdings
        .iter()
        .zip(&valuations)
        .map(|(holding, valuation)| {
            let percentage = if total_value > Decimal::ZERO {
                valuation.current_value / total_value * Decimal::ONE_HUNDRED
            } else {
                Decimal::ZERO
            };
            Allocation {
                holding_id: holding.id.clone(),
                symbol: holding.symbol.clone(),
                value: valuation.current_value,
                percentage,
            }
        })
        .collect();
    allocations.sort_by(|a, b| b.value.cmp(&a.value));

    let mut best: Option<PerformerSummary> = None;
    let mut worst: Option<PerformerSummary> = None;
    for (holding, valuation) in holdings.iter().zip(&valuations) {
        let candidate = PerformerSummary {
            holding_id: holding.id.clone(),
            symbol: holding.symbol.clone(),
            gain_loss_percent: valuation.gain_loss_percent,
        };
        match &best {
            Some(current) if candidate.gain_loss_percent <= current.gain_loss_percent => {}
            _ => best = Some(candidate.clone()),
        }
        match &worst {
            Some(current) if candidate.gain_loss_percent >= current.gain_loss_percent => {}
            _ => worst = Some(candidate),
        }
    }

    PortfolioSnapshot {
        total_value,
        total_invested,
        total_gain_loss,
        total_gain_loss_percent,
        allocations,
        best_performer: best,
        worst_performer: worst,
    }
}

/// Condenses a sorted allocation list for display: the top `limit` entries
/// plus an "Others" bucket carrying the summed value and percentage of the
/// remainder. Returns no bucket when the list fits within `limit`.
pub fn condense_allocations(
    allocations: &[Allocation],
    limit: usize,
) -> (Vec<Allocation>, Option<Allocation>) {
    if allocations.len() <= limit {
        return (allocations.to_vec(), None);
    }

    let top = allocations[..limit].to_vec();
    let rest = &allocations[limit..];
    let others = Allocation {
        holding_id: "others".to_string(),
        symbol: format!("{} more", rest.len()),
        value: rest.iter().map(|allocation| allocation.value).sum(),
        percentage: rest.iter().map(|allocation| allocation.percentage).sum(),
    };
    (top, Some(others))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::ALLOCATION_DISPLAY_LIMIT;
    use chrono::Utc;
    use proptest::prelude::*;
    use rust_decimal::prelude::FromPrimitive;
    use rust_decimal_macros::dec;

    fn holding(
        id: &str,
        symbol: &str,
        amount: Decimal,
        avg_buy_price: Decimal,
        current_price: Decimal,
    ) -> Holding {
        Holding {
            id: id.to_string(),
            asset_id: symbol.to_lowercase(),
            symbol: symbol.to_string(),
            name: symbol.to_string(),
            amount,
            avg_buy_price,
            current_price,
            date_added: Utc::now(),
        }
    }

    #[test]
    fn empty_portfolio_is_defined_and_zero() {
        let snapshot = aggregate_portfolio(&[]);

        assert_eq!(snapshot.total_value, Decimal::ZERO);
        assert_eq!(snapshot.total_invested, Decimal::ZERO);
        assert_eq!(snapshot.total_gain_loss, Decimal::ZERO);
        assert_eq!(snapshot.total_gain_loss_percent, Decimal::ZERO);
        assert!(snapshot.allocations.is_empty());
        assert!(snapshot.best_performer.is_none());
        assert!(snapshot.worst_performer.is_none());
    }

    #[test]
    fn two_position_scenario_matches_hand_math() {
        let holdings = vec![
            holding("h-btc", "BTC", dec!(0.5), dec!(35000), dec!(43000)),
            holding("h-eth", "ETH", dec!(2.5), dec!(2200), dec!(2650)),
        ];
        let snapshot = aggregate_portfolio(&holdings);

        assert_eq!(snapshot.total_invested, dec!(23000));
        assert_eq!(snapshot.total_value, dec!(28125));
        assert_eq!(snapshot.total_gain_loss, dec!(5125));
        assert_eq!(snapshot.total_gain_loss_percent.round_dp(2), dec!(22.28));

        // BTC: +22.86%, ETH: +20.45%
        let best = snapshot.best_performer.unwrap();
        let worst = snapshot.worst_performer.unwrap();
        assert_eq!(best.symbol, "BTC");
        assert_eq!(worst.symbol, "ETH");

        // Allocations sorted descending by value: BTC 21500, ETH 6625
        assert_eq!(snapshot.allocations[0].symbol, "BTC");
        assert_eq!(snapshot.allocations[0].value, dec!(21500));
        assert_eq!(snapshot.allocations[1].value, dec!(6625));

        let percentage_sum: Decimal = snapshot
            .allocations
            .iter()
            .map(|allocation| allocation.percentage)
            .sum();
        assert!((percentage_sum - dec!(100)).abs() < dec!(0.000000001));
    }

    #[test]
    fn aggregation_is_idempotent() {
        let holdings = vec![
            holding("h-btc", "BTC", dec!(0.5), dec!(35000), dec!(43000)),
            holding("h-eth", "ETH", dec!(2.5), dec!(2200), dec!(2650)),
        ];
        assert_eq!(aggregate_portfolio(&holdings), aggregate_portfolio(&holdings));
    }

    #[test]
    fn zero_price_holding_is_the_worst_performer() {
        let holdings = vec![
            holding("h-a", "AAA", dec!(1), dec!(10), dec!(12)),
            holding("h-b", "BBB", dec!(1), dec!(10), Decimal::ZERO),
        ];
        let snapshot = aggregate_portfolio(&holdings);

        let worst = snapshot.worst_performer.unwrap();
        assert_eq!(worst.symbol, "BBB");
        assert_eq!(worst.gain_loss_percent, dec!(-100));
        assert_eq!(snapshot.best_performer.unwrap().symbol, "AAA");
    }

    #[test]
    fn performer_ties_keep_first_encountered() {
        let holdings = vec![
            holding("h-a", "AAA", dec!(1), dec!(10), dec!(20)),
            holding("h-b", "BBB", dec!(5), dec!(10), dec!(20)),
        ];
        let snapshot = aggregate_portfolio(&holdings);

        assert_eq!(snapshot.best_performer.unwrap().holding_id, "h-a");
        assert_eq!(snapshot.worst_performer.unwrap().holding_id, "h-a");
    }

    #[test]
    fn zero_amount_holding_contributes_nothing() {
        let holdings = vec![
            holding("h-a", "AAA", dec!(1), dec!(10), dec!(20)),
            holding("h-z", "ZZZ", Decimal::ZERO, dec!(10), dec!(20)),
        ];
        let snapshot = aggregate_portfolio(&holdings);

        assert_eq!(snapshot.total_value, dec!(20));
        assert_eq!(snapshot.total_invested, dec!(10));
        let zero_allocation = snapshot
            .allocations
            .iter()
            .find(|allocation| allocation.holding_id == "h-z")
            .unwrap();
        assert_eq!(zero_allocation.value, Decimal::ZERO);
        assert_eq!(zero_allocation.percentage, Decimal::ZERO);
    }

    #[test]
    fn worthless_portfolio_has_zero_percentages() {
        let holdings = vec![holding("h-a", "AAA", dec!(3), dec!(10), Decimal::ZERO)];
        let snapshot = aggregate_portfolio(&holdings);

        assert_eq!(snapshot.total_value, Decimal::ZERO);
        assert_eq!(snapshot.allocations[0].percentage, Decimal::ZERO);
        assert_eq!(snapshot.total_gain_loss_percent, dec!(-100));
    }

    #[test]
    fn condensed_allocations_are_consistent_with_the_full_list() {
        let holdings: Vec<Holding> = (0..7)
            .map(|i| {
                let price = Decimal::from(100 - i * 10);
                holding(
                    &format!("h-{}", i),
                    &format!("C{}", i),
                    dec!(1),
                    dec!(10),
                    price,
                )
            })
            .collect();
        let snapshot = aggregate_portfolio(&holdings);

        let (top, others) = condense_allocations(&snapshot.allocations, ALLOCATION_DISPLAY_LIMIT);
        assert_eq!(top.len(), ALLOCATION_DISPLAY_LIMIT);
        let others = others.unwrap();

        let expected_value: Decimal = snapshot.allocations[5..]
            .iter()
            .map(|allocation| allocation.value)
            .sum();
        let expected_percentage: Decimal = snapshot.allocations[5..]
            .iter()
            .map(|allocation| allocation.percentage)
            .sum();
        assert_eq!(others.value, expected_value);
        assert_eq!(others.percentage, expected_percentage);
        assert_eq!(others.symbol, "2 more");

        let total: Decimal = top
            .iter()
            .map(|allocation| allocation.percentage)
            .sum::<Decimal>()
            + others.percentage;
        assert!((total - dec!(100)).abs() < dec!(0.000000001));
    }

    #[test]
    fn short_allocation_lists_need_no_bucket() {
        let holdings = vec![holding("h-a", "AAA", dec!(1), dec!(10), dec!(20))];
        let snapshot = aggregate_portfolio(&holdings);

        let (top, others) = condense_allocations(&snapshot.allocations, 5);
        assert_eq!(top.len(), 1);
        assert!(others.is_none());
    }

    proptest! {
        /// Allocation percentages close to 100 whenever the portfolio has
        /// any value.
        #[test]
        fn allocation_percentages_sum_to_one_hundred(
            positions in prop::collection::vec((1u32..10_000, 1u32..1_000_000, 0u32..1_000_000), 1..20)
        ) {
            let holdings: Vec<Holding> = positions
                .iter()
                .enumerate()
                .map(|(i, (amount_mils, buy_cents, price_cents))| {
                    holding(
                        &format!("h-{}", i),
                        &format!("C{}", i),
                        Decimal::from_u32(*amount_mils).unwrap() / dec!(1000),
                        Decimal::from_u32(*buy_cents).unwrap() / dec!(100),
                        Decimal::from_u32(*price_cents).unwrap() / dec!(100),
                    )
                })
                .collect();

            let snapshot = aggregate_portfolio(&holdings);
            prop_assume!(snapshot.total_value > Decimal::ZERO);

            let sum: Decimal = snapshot
                .allocations
                .iter()
                .map(|allocation| allocation.percentage)
                .sum();
            prop_assert!((sum - dec!(100)).abs() < dec!(0.000000001));
        }
    }
}
