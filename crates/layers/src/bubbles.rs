//! Bubble placement extraction for the chart view.

use catalog::AttributeId;
use foundation::Color;
use scales::{LinearScale, QuantileScale, SizeScale};
use scene::{Dataset, RegionKey, SelectionState, StrokeStyle};
use serde::{Deserialize, Serialize};

use crate::frame::ChartFrame;
use crate::symbology::{BUBBLE_BASE_STROKE, NO_DATA_FILL};

/// The fitted scales of one rendering pass.
///
/// Serializable so a renderer can re-evaluate positions without another
/// round trip through the engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartScales {
    pub x: LinearScale,
    pub y: LinearScale,
    pub size: SizeScale,
    pub color: QuantileScale,
}

/// One positioned chart bubble, in outer-frame pixel coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleMark {
    pub key: RegionKey,
    pub cx_px: f64,
    pub cy_px: f64,
    pub radius_px: f64,
    pub fill: Color,
    /// True when the color value was missing and the neutral fill
    /// stands in.
    pub no_data: bool,
}

/// Per-record bubbles for one rendering pass, in record order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BubbleSnapshot {
    pub stroke: StrokeStyle,
    pub bubbles: Vec<BubbleMark>,
}

/// Place one bubble per record.
///
/// Every record keeps a bubble. A record missing its x or y value parks
/// at the lower bound of that axis; one missing its color value keeps
/// the floor radius and the neutral fill. The color attribute drives
/// both fill and radius.
pub fn extract_bubbles(
    dataset: &Dataset,
    selection: &SelectionState,
    scales: &ChartScales,
    frame: &ChartFrame,
) -> BubbleSnapshot {
    let bubbles = dataset
        .records()
        .iter()
        .map(|record| {
            let x_value = record.value(selection.x());
            let y_value = record.value(selection.y());
            let color_value = record.value(selection.color());

            let cx_px = match x_value {
                Some(v) if v.is_finite() => scales.x.position(v),
                _ => scales.x.lower_bound_px(),
            } + frame.left_px;
            let cy_px = match y_value {
                Some(v) if v.is_finite() => scales.y.position(v),
                _ => scales.y.lower_bound_px(),
            } + frame.top_px;

            let fill = scales.color.color(color_value);
            BubbleMark {
                key: record.key.clone(),
                cx_px,
                cy_px,
                radius_px: scales.size.radius(color_value),
                fill: fill.unwrap_or(NO_DATA_FILL),
                no_data: fill.is_none(),
            }
        })
        .collect();

    BubbleSnapshot {
        stroke: BUBBLE_BASE_STROKE,
        bubbles,
    }
}

#[cfg(test)]
mod tests {
    use super::{ChartScales, extract_bubbles};
    use crate::frame::ChartFrame;
    use crate::symbology::NO_DATA_FILL;
    use catalog::{AttributeCatalog, AttributeDef};
    use foundation::Color;
    use scales::{
        DomainPadding, LinearScale, Orientation, QuantileScale, SizeParams, SizeScale,
    };
    use scene::{Dataset, Record, SelectionState};

    fn catalog() -> AttributeCatalog {
        AttributeCatalog::new(vec![
            AttributeDef::new("xa", "X attr", ""),
            AttributeDef::new("ya", "Y attr", ""),
            AttributeDef::new("ca", "Color attr", ""),
        ])
        .unwrap()
    }

    fn selection(catalog: &AttributeCatalog) -> SelectionState {
        SelectionState::new(catalog, "xa".into(), "ya".into(), "ca".into()).unwrap()
    }

    fn fit_scales(dataset: &Dataset, frame: &ChartFrame) -> ChartScales {
        let xs = dataset.record_values(&"xa".into());
        let ys = dataset.record_values(&"ya".into());
        let cs = dataset.record_values(&"ca".into());
        ChartScales {
            x: LinearScale::fit(
                &xs,
                DomainPadding::QuarterRange,
                frame.inner_width_px(),
                Orientation::Horizontal,
            )
            .unwrap(),
            y: LinearScale::fit(
                &ys,
                DomainPadding::QuarterRange,
                frame.inner_height_px(),
                Orientation::Vertical,
            )
            .unwrap(),
            size: SizeScale::fit(&cs, SizeParams::default()).unwrap(),
            color: QuantileScale::fit(&cs, &[Color::rgb(0x11, 0x11, 0x11)]).unwrap(),
        }
    }

    #[test]
    fn bubbles_shift_by_the_frame_paddings() {
        let records = vec![
            Record::new("MI", None)
                .with_value("xa", 10.0)
                .with_value("ya", 10.0)
                .with_value("ca", 5.0),
            Record::new("WI", None)
                .with_value("xa", 40.0)
                .with_value("ya", 40.0)
                .with_value("ca", 20.0),
        ];
        let (dataset, _) = Dataset::assemble(Vec::new(), records, &catalog());
        let frame = ChartFrame::default();
        let scales = fit_scales(&dataset, &frame);
        let selection = selection(&catalog());

        let snapshot = extract_bubbles(&dataset, &selection, &scales, &frame);

        let mi = &snapshot.bubbles[0];
        assert_eq!(mi.cx_px, scales.x.position(10.0) + 25.0);
        assert_eq!(mi.cy_px, scales.y.position(10.0) + 5.0);
        assert_eq!(mi.radius_px, 5.0);
        assert!(!mi.no_data);

        // Larger y value sits higher on screen.
        let wi = &snapshot.bubbles[1];
        assert!(wi.cy_px < mi.cy_px);
    }

    #[test]
    fn records_without_positions_park_at_the_lower_bounds() {
        let records = vec![
            Record::new("MI", None)
                .with_value("xa", 10.0)
                .with_value("ya", 10.0)
                .with_value("ca", 5.0),
            Record::new("ND", None).with_value("ca", 20.0),
        ];
        let (dataset, _) = Dataset::assemble(Vec::new(), records, &catalog());
        let frame = ChartFrame::default();
        let scales = fit_scales(&dataset, &frame);

        let snapshot = extract_bubbles(&dataset, &selection(&catalog()), &scales, &frame);

        let nd = &snapshot.bubbles[1];
        assert_eq!(nd.cx_px, scales.x.lower_bound_px() + 25.0);
        // Vertical lower bound is the bottom of the plot.
        assert_eq!(nd.cy_px, frame.inner_height_px() + 5.0);
        assert!(!nd.no_data);
    }

    #[test]
    fn records_without_a_color_value_stay_visible_and_neutral() {
        let records = vec![
            Record::new("MI", None)
                .with_value("xa", 10.0)
                .with_value("ya", 10.0)
                .with_value("ca", 5.0),
            Record::new("OH", None)
                .with_value("xa", 20.0)
                .with_value("ya", 20.0),
        ];
        let (dataset, _) = Dataset::assemble(Vec::new(), records, &catalog());
        let frame = ChartFrame::default();
        let scales = fit_scales(&dataset, &frame);

        let snapshot = extract_bubbles(&dataset, &selection(&catalog()), &scales, &frame);

        let oh = &snapshot.bubbles[1];
        assert!(oh.no_data);
        assert_eq!(oh.fill, NO_DATA_FILL);
        // Floor radius keeps the mark drawable.
        assert!(oh.radius_px > 0.0);
        assert!(oh.radius_px < snapshot.bubbles[0].radius_px);
    }
}
