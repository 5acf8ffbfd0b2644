//! Small numeric helpers used by the metrics engine.
//!
//! Percentiles follow the "linear" definition (interpolate between the two
//! closest ranks of the sorted sample). Rounding is decimal-correct: the
//! exact binary value is rounded to the nearest decimal with ties to even,
//! so `1.005` (stored as 1.00499...) becomes `1.0`.

/// Arithmetic mean, `None` for an empty slice.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Percentile with linear interpolation between closest ranks.
///
/// `q` is a fraction in `[0, 1]` and is clamped. Returns `None` for an empty slice.
pub fn percentile_linear(values: &[f64], q: f64) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);

    let rank = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lo = rank.floor() as usize;
    let hi = rank.ceil() as usize;
    let (a, b) = (sorted.get(lo)?, sorted.get(hi)?);
    Some(lerp(*a, *b, rank - lo as f64))
}

// Two-sided form keeps the result exact at both ends and matches NumPy's
// `linear` method bit for bit.
fn lerp(a: f64, b: f64, t: f64) -> f64 {
    let diff = b - a;
    if t >= 0.5 {
        b - diff * (1.0 - t)
    } else {
        a + diff * t
    }
}

/// Round to `places` decimal digits (ties to even on the exact binary value).
pub fn round_to(value: f64, places: usize) -> f64 {
    if !value.is_finite() {
        return value;
    }
    // std float formatting is correctly rounded, parsing back is exact.
    format!("{value:.places$}").parse().unwrap_or(value)
}
