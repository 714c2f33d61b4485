//! Power-law radius scale for proportional symbols.
//!
//! Radius grows as a sub-linear power of the value ratio so that visual
//! area, not radius, tracks magnitude roughly linearly. The smallest
//! observed value anchors the baseline radius.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::stats::{finite_values, min_max};

/// Stand-in for zero when it would otherwise collapse the ratio.
///
/// Applied both to a zero reference minimum and to non-positive or
/// missing inputs, so no symbol ever degenerates to zero area.
pub const SIZE_FLOOR_VALUE: f64 = 0.1;

/// Tunable parts of the radius law.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeParams {
    /// Radius drawn for the reference minimum value.
    pub min_radius_px: f64,
    /// Exponent of the value ratio; just over a square root keeps area
    /// growth close to linear in the value.
    pub exponent: f64,
}

impl Default for SizeParams {
    fn default() -> Self {
        Self {
            min_radius_px: 5.0,
            exponent: 0.5715,
        }
    }
}

/// Value-to-radius mapping anchored at the dataset minimum.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizeScale {
    reference_min: f64,
    params: SizeParams,
}

impl SizeScale {
    /// Anchor the scale at the smallest finite value of the dataset.
    ///
    /// A non-positive minimum is replaced by the floor value. Fails with
    /// `EmptyDomain` when no finite values remain.
    pub fn fit(values: &[Option<f64>], params: SizeParams) -> Result<Self, ScaleError> {
        let finite = finite_values(values);
        let (min, _max) = min_max(&finite).ok_or(ScaleError::EmptyDomain)?;
        let reference_min = if min > 0.0 { min } else { SIZE_FLOOR_VALUE };
        Ok(Self {
            reference_min,
            params,
        })
    }

    pub fn reference_min(&self) -> f64 {
        self.reference_min
    }

    pub fn params(&self) -> SizeParams {
        self.params
    }

    /// Radius in pixels for a possibly-missing value.
    ///
    /// Non-positive and missing values are floored, never dropped: every
    /// record keeps a drawable, non-zero-area symbol.
    pub fn radius(&self, value: Option<f64>) -> f64 {
        let v = match value {
            Some(v) if v.is_finite() && v > 0.0 => v,
            _ => SIZE_FLOOR_VALUE,
        };
        (v / self.reference_min).powf(self.params.exponent) * self.params.min_radius_px
    }
}
