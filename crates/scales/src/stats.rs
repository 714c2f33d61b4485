//! Shared numeric helpers for scale derivation.

use foundation::StableF64;

/// Keep only finite values, dropping `None` and NaN/infinite entries.
pub fn finite_values(values: &[Option<f64>]) -> Vec<f64> {
    values
        .iter()
        .filter_map(|v| *v)
        .filter(|v| v.is_finite())
        .collect()
}

/// Finite values sorted ascending under the deterministic total order.
pub fn sorted_finite(values: &[Option<f64>]) -> Vec<f64> {
    let mut out = finite_values(values);
    out.sort_by_key(|v| StableF64(*v));
    out
}

/// Minimum and maximum of a finite-value slice.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    let mut iter = values.iter().copied();
    let first = iter.next()?;
    let mut min = first;
    let mut max = first;
    for v in iter {
        if v < min {
            min = v;
        }
        if v > max {
            max = v;
        }
    }
    Some((min, max))
}

/// Quantile of an ascending-sorted slice by linear interpolation between
/// closest order statistics (the common "R-7" definition).
pub fn quantile_sorted(sorted: &[f64], p: f64) -> Option<f64> {
    let n = sorted.len();
    if n == 0 {
        return None;
    }
    if p <= 0.0 || n < 2 {
        return Some(sorted[0]);
    }
    if p >= 1.0 {
        return Some(sorted[n - 1]);
    }
    let h = (n - 1) as f64 * p;
    let i = h.floor() as usize;
    let a = sorted[i];
    let b = sorted[i + 1];
    Some(a + (b - a) * (h - i as f64))
}
