//! Stroke styling shared by the views and the highlight protocol.

use foundation::Color;
use serde::{Deserialize, Serialize};

/// Outline style of a rendered element.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    pub width_px: f64,
}

impl StrokeStyle {
    pub const fn new(color: Color, width_px: f64) -> Self {
        Self { color, width_px }
    }
}
