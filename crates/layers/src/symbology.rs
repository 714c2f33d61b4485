//! Stroke and fill constants shared by both views.

use foundation::Color;
use scene::{StrokeStyle, ViewKind};

/// Fill for regions and bubbles whose expressed value is missing.
pub const NO_DATA_FILL: Color = Color::rgb(0xcc, 0xcc, 0xcc);

/// Resting stroke of map regions.
pub const MAP_BASE_STROKE: StrokeStyle = StrokeStyle::new(Color::rgb(0x00, 0x00, 0x00), 0.5);

/// Resting stroke of chart bubbles.
pub const BUBBLE_BASE_STROKE: StrokeStyle = StrokeStyle::new(Color::rgb(0x00, 0x00, 0x00), 1.0);

/// Emphasis stroke applied to every element of a hovered region.
pub const HIGHLIGHT_STROKE: StrokeStyle = StrokeStyle::new(Color::rgb(0x33, 0x99, 0xff), 2.0);

/// Resting stroke for elements of one view.
pub fn base_stroke(view: ViewKind) -> StrokeStyle {
    match view {
        ViewKind::Map => MAP_BASE_STROKE,
        ViewKind::Chart => BUBBLE_BASE_STROKE,
    }
}
