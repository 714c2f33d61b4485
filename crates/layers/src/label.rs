//! Hover info label: content and flip-aware placement.

use catalog::{AttributeDef, AttributeId};
use scene::RegionKey;
use serde::{Deserialize, Serialize};

/// Content of the hover info label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InfoLabel {
    pub key: RegionKey,
    pub name: Option<String>,
    pub attribute: AttributeId,
    pub attribute_label: String,
    pub unit: String,
    /// Expressed value; `None` renders as a no-data marker.
    pub value: Option<f64>,
}

impl InfoLabel {
    pub fn new(
        key: RegionKey,
        name: Option<String>,
        def: &AttributeDef,
        value: Option<f64>,
    ) -> Self {
        Self {
            key,
            name,
            attribute: def.id.clone(),
            attribute_label: def.label.clone(),
            unit: def.unit.clone(),
            value,
        }
    }
}

/// Anchor position for the info label, in viewport pixels.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub x_px: f64,
    pub y_px: f64,
}

/// Place the label next to the cursor, flipping at the viewport edges.
///
/// The label leads the cursor by 10px, flipping to the left side once
/// the cursor is within the label width plus 20px of the right edge. It
/// floats 75px above the cursor unless the cursor is within 75px of the
/// top, then drops 25px below.
pub fn place_info_label(
    cursor_px: (f64, f64),
    label_width_px: f64,
    viewport_width_px: f64,
) -> LabelPlacement {
    let (cursor_x, cursor_y) = cursor_px;
    let x_px = if cursor_x > viewport_width_px - label_width_px - 20.0 {
        cursor_x - label_width_px - 10.0
    } else {
        cursor_x + 10.0
    };
    let y_px = if cursor_y < 75.0 {
        cursor_y + 25.0
    } else {
        cursor_y - 75.0
    };
    LabelPlacement { x_px, y_px }
}

#[cfg(test)]
mod tests {
    use super::{InfoLabel, place_info_label};
    use catalog::AttributeDef;
    use scene::RegionKey;

    #[test]
    fn label_carries_definition_metadata_and_value() {
        let def = AttributeDef::new("gas_twh", "Natural gas generation", "TWh");
        let label = InfoLabel::new(
            RegionKey::new("MI"),
            Some("Michigan".to_string()),
            &def,
            Some(31.79),
        );
        assert_eq!(label.attribute.as_str(), "gas_twh");
        assert_eq!(label.attribute_label, "Natural gas generation");
        assert_eq!(label.unit, "TWh");
        assert_eq!(label.value, Some(31.79));
    }

    #[test]
    fn interior_cursor_places_right_and_above() {
        let placement = place_info_label((400.0, 300.0), 120.0, 1000.0);
        assert_eq!(placement.x_px, 410.0);
        assert_eq!(placement.y_px, 225.0);
    }

    #[test]
    fn right_edge_flips_to_the_left_side() {
        // Threshold is viewport - width - 20 = 860.
        let placement = place_info_label((861.0, 300.0), 120.0, 1000.0);
        assert_eq!(placement.x_px, 861.0 - 120.0 - 10.0);

        let at_threshold = place_info_label((860.0, 300.0), 120.0, 1000.0);
        assert_eq!(at_threshold.x_px, 870.0);
    }

    #[test]
    fn top_edge_drops_below_the_cursor() {
        let placement = place_info_label((400.0, 74.0), 120.0, 1000.0);
        assert_eq!(placement.y_px, 99.0);

        let at_threshold = place_info_label((400.0, 75.0), 120.0, 1000.0);
        assert_eq!(at_threshold.y_px, 0.0);
    }
}
