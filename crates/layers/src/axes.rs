//! Axis tick extraction.

use catalog::AttributeId;
use scales::{LinearScale, Orientation};
use serde::{Deserialize, Serialize};

/// Target stop count for both axes.
pub const AXIS_TICK_TARGET: usize = 10;

/// One tick: the domain value and its pixel offset along the axis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub offset_px: f64,
}

/// Ticks for one axis, ordered by value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisSnapshot {
    pub attribute: AttributeId,
    pub orientation: Orientation,
    pub ticks: Vec<AxisTick>,
}

pub fn extract_axis(
    attribute: &AttributeId,
    scale: &LinearScale,
    orientation: Orientation,
) -> AxisSnapshot {
    let ticks = scale
        .ticks(AXIS_TICK_TARGET)
        .into_iter()
        .map(|value| AxisTick {
            value,
            offset_px: scale.position(value),
        })
        .collect();

    AxisSnapshot {
        attribute: attribute.clone(),
        orientation,
        ticks,
    }
}
