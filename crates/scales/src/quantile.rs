//! Quantile color scale.
//!
//! Bucket boundaries are chosen from the full multiset of parsed values
//! (duplicates included) so each bucket holds roughly the same number of
//! data points, regardless of how the values cluster.

use foundation::Color;
use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::stats::{quantile_sorted, sorted_finite};

/// Value-to-color bucketing over an ordered palette.
///
/// With `n` palette entries there are `n - 1` thresholds; a value lands
/// in the bucket counting the thresholds at or below it. Values exactly
/// on a threshold belong to the upper bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuantileScale {
    thresholds: Vec<f64>,
    palette: Vec<Color>,
    domain_min: f64,
    domain_max: f64,
}

impl QuantileScale {
    /// Derive bucket thresholds for `palette` from the value multiset.
    ///
    /// `None` and non-finite entries are excluded from the domain. Fails
    /// with `EmptyDomain` when nothing remains.
    pub fn fit(values: &[Option<f64>], palette: &[Color]) -> Result<Self, ScaleError> {
        if palette.is_empty() {
            return Err(ScaleError::EmptyPalette);
        }
        let sorted = sorted_finite(values);
        if sorted.is_empty() {
            return Err(ScaleError::EmptyDomain);
        }

        let n = palette.len();
        let mut thresholds = Vec::with_capacity(n - 1);
        for k in 1..n {
            // Non-empty domain, so the quantile always exists.
            if let Some(t) = quantile_sorted(&sorted, k as f64 / n as f64) {
                thresholds.push(t);
            }
        }

        Ok(Self {
            thresholds,
            palette: palette.to_vec(),
            domain_min: sorted[0],
            domain_max: sorted[sorted.len() - 1],
        })
    }

    pub fn bucket_count(&self) -> usize {
        self.palette.len()
    }

    pub fn palette(&self) -> &[Color] {
        &self.palette
    }

    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Bucket index for a value; `None` for NaN.
    pub fn bucket(&self, value: f64) -> Option<usize> {
        if value.is_nan() {
            return None;
        }
        Some(self.thresholds.partition_point(|t| *t <= value))
    }

    /// Bucket color for a possibly-missing value; `None` means "no data"
    /// and is rendered with the neutral fill by callers.
    pub fn color(&self, value: Option<f64>) -> Option<Color> {
        let bucket = self.bucket(value?)?;
        self.palette.get(bucket).copied()
    }

    /// Value extent `[lo, hi]` covered by one bucket, for legends.
    pub fn invert_extent(&self, bucket: usize) -> Option<(f64, f64)> {
        if bucket >= self.palette.len() {
            return None;
        }
        let lo = if bucket == 0 {
            self.domain_min
        } else {
            self.thresholds[bucket - 1]
        };
        let hi = if bucket == self.thresholds.len() {
            self.domain_max
        } else {
            self.thresholds[bucket]
        };
        Some((lo, hi))
    }
}
