//! Linear position scales with padded domains.

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::stats::{finite_values, min_max};
use crate::ticks::ticks;

/// Screen axis a position scale feeds.
///
/// Vertical output is inverted: larger values map to smaller pixel
/// coordinates, consistent with screen-space Y growing downward.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// How far the domain extends past the observed extremes, keeping
/// extreme points off the plot edge.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainPadding {
    /// A quarter of the observed value range on each side.
    QuarterRange,
    /// One record's worth of range on each side (range divided by the
    /// total entry count, gaps included).
    PerRecord,
}

/// Linear mapping from a padded value domain to pixel coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    /// Derive a scale across `extent_px` pixels from the finite values.
    ///
    /// Fails with `EmptyDomain` when no finite values remain.
    pub fn fit(
        values: &[Option<f64>],
        padding: DomainPadding,
        extent_px: f64,
        orientation: Orientation,
    ) -> Result<Self, ScaleError> {
        let finite = finite_values(values);
        let (min, max) = min_max(&finite).ok_or(ScaleError::EmptyDomain)?;

        let spread = max - min;
        let buffer = match padding {
            DomainPadding::QuarterRange => spread / 4.0,
            DomainPadding::PerRecord => spread / values.len() as f64,
        };

        let range = match orientation {
            Orientation::Horizontal => (0.0, extent_px),
            Orientation::Vertical => (extent_px, 0.0),
        };

        Ok(Self {
            domain: (min - buffer, max + buffer),
            range,
        })
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixel coordinate for a value. Extrapolates linearly outside the
    /// domain; a zero-width domain maps everything to the range midpoint
    /// rather than dividing by zero.
    pub fn position(&self, value: f64) -> f64 {
        let (d0, d1) = self.domain;
        let (r0, r1) = self.range;
        if d0 == d1 {
            return (r0 + r1) / 2.0;
        }
        r0 + (value - d0) / (d1 - d0) * (r1 - r0)
    }

    /// Pixel coordinate of the padded domain's lower bound. Records with
    /// no value for the expressed attribute park here.
    pub fn lower_bound_px(&self) -> f64 {
        self.range.0
    }

    /// Tick values across the padded domain, aiming for `target` stops
    /// on a 1/2/5 progression.
    pub fn ticks(&self, target: usize) -> Vec<f64> {
        ticks(self.domain.0, self.domain.1, target)
    }
}
