//! Summary stats over an ordered value series.

use rust_decimal::Decimal;

use super::portfolio_model::SeriesStats;

/// Summarizes an ordered sample series (e.g. portfolio value over time)
/// into the delta/percent pair the chart stat cards display.
///
/// The caller guarantees chronological order. Empty and singleton series
/// report zero for both fields (first == last); a first sample at or below
/// zero yields a zero percentage.
pub fn summarize_series(samples: &[Decimal]) -> SeriesStats {
    let (first, last) = match (samples.first(), samples.last()) {
        (Some(first), Some(last)) => (*first, *last),
        _ => return SeriesStats::default(),
    };

    let delta = last - first;
    let delta_percent = if first > Decimal::ZERO {
        delta / first * Decimal::ONE_HUNDRED
    } else {
        Decimal::ZERO
    };

    SeriesStats {
        delta,
        delta_percent,
    }
}
