//! Numeric helpers used by aggregation.
//!
//! Percentiles use linear interpolation between the two bracketing order
//! statistics at rank `q * (n - 1)`. Rounding is half-to-even on the value
//! scaled by 100.

/// Arithmetic mean. `None` for an empty slice.
///
/// Falls back to summing `v / n` when the plain sum overflows, so finite input
/// always yields a finite mean.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let n = values.len() as f64;
    let sum = values.iter().sum::<f64>();
    if sum.is_finite() {
        return Some(sum / n);
    }
    Some(values.iter().map(|v| v / n).sum())
}

/// Quantile `q` (0.0..=1.0) of an ascending slice. `None` for an empty slice.
pub fn quantile_sorted(sorted: &[f64], q: f64) -> Option<f64> {
    let (&first, &last) = (sorted.first()?, sorted.last()?);
    if q <= 0.0 {
        return Some(first);
    }
    if q >= 1.0 {
        return Some(last);
    }

    let rank = q * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let lo_v = *sorted.get(lo)?;
    let hi_v = *sorted.get(hi)?;
    let frac = rank - lo as f64;
    let span = hi_v - lo_v;
    if span.is_finite() {
        Some(lo_v + span * frac)
    } else {
        Some(lo_v * (1.0 - frac) + hi_v * frac)
    }
}

/// Round to 2 decimal places, ties to even.
///
/// Values too large to scale have no fractional digits and pass through.
pub fn round2(x: f64) -> f64 {
    let scaled = x * 100.0;
    if !scaled.is_finite() {
        return x;
    }
    scaled.round_ties_even() / 100.0
}

/// Number of values strictly greater than `threshold` in an ascending slice.
pub fn count_above_sorted(sorted: &[f64], threshold: f64) -> usize {
    sorted.len() - sorted.partition_point(|&v| v <= threshold)
}
