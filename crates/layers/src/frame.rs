//! Chart frame geometry.

use serde::{Deserialize, Serialize};

/// Outer chart size and paddings, in pixels.
///
/// The inner plot area is the outer size minus the paddings; the left
/// strip holds the y axis, the bottom strip the x axis and legend.
/// Bubble coordinates are plot-relative and shift by the top-left
/// padding when placed in the outer frame.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartFrame {
    pub width_px: f64,
    pub height_px: f64,
    pub left_px: f64,
    pub right_px: f64,
    pub top_px: f64,
    pub bottom_px: f64,
}

impl ChartFrame {
    pub fn inner_width_px(&self) -> f64 {
        self.width_px - self.left_px - self.right_px
    }

    pub fn inner_height_px(&self) -> f64 {
        self.height_px - self.top_px - self.bottom_px
    }
}

impl Default for ChartFrame {
    /// Reference dashboard dimensions.
    fn default() -> Self {
        Self {
            width_px: 950.0,
            height_px: 600.0,
            left_px: 25.0,
            right_px: 5.0,
            top_px: 5.0,
            bottom_px: 100.0,
        }
    }
}
