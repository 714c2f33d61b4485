//! Deterministic float ordering.
//!
//! Scale domains are built by sorting data values, and identical inputs
//! must sort identically on every run. This module gives `f64` a
//! canonical form and a total order so that sorting never depends on
//! NaN payloads or the sign of zero.

use core::cmp::Ordering;

/// Canonical form of a value for ordering purposes: `-0.0` collapses to
/// `0.0`, and every NaN collapses to the one canonical NaN.
pub fn canonical_f64(v: f64) -> f64 {
    if v == 0.0 {
        // Handles +0.0 and -0.0.
        0.0
    } else if v.is_nan() {
        f64::NAN
    } else {
        v
    }
}

/// Total order over canonicalized values. Use this (or [`StableF64`])
/// anywhere floats are sorted or serve as ordered keys.
pub fn stable_total_cmp_f64(a: f64, b: f64) -> Ordering {
    canonical_f64(a).total_cmp(&canonical_f64(b))
}

/// Sort/key wrapper carrying the deterministic total order.
///
/// `Ord` is `f64::total_cmp` after canonicalization; `Eq` treats all
/// NaNs as one value, so the wrapper is safe in ordered structures.
#[derive(Debug, Copy, Clone, Default)]
pub struct StableF64(pub f64);

impl PartialEq for StableF64 {
    fn eq(&self, other: &Self) -> bool {
        stable_total_cmp_f64(self.0, other.0) == Ordering::Equal
    }
}

impl Eq for StableF64 {}

impl PartialOrd for StableF64 {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StableF64 {
    fn cmp(&self, other: &Self) -> Ordering {
        stable_total_cmp_f64(self.0, other.0)
    }
}
