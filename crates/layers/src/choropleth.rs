//! Choropleth fill extraction for the map view.

use catalog::AttributeId;
use foundation::Color;
use scales::QuantileScale;
use scene::{Dataset, RegionKey, StrokeStyle};
use serde::{Deserialize, Serialize};

use crate::symbology::{MAP_BASE_STROKE, NO_DATA_FILL};

/// Fill for one map region.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RegionFill {
    pub key: RegionKey,
    pub fill: Color,
    /// True when the expressed value was missing and the neutral fill
    /// stands in.
    pub no_data: bool,
}

/// Per-region fills for one rendering pass, in feature order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChoroplethSnapshot {
    pub attribute: AttributeId,
    pub stroke: StrokeStyle,
    pub regions: Vec<RegionFill>,
}

/// Extract one fill per region feature.
///
/// A feature without a joined value for the expressed attribute stays
/// on the map with the neutral fill; it is never dropped.
pub fn extract_choropleth(
    dataset: &Dataset,
    attribute: &AttributeId,
    scale: &QuantileScale,
) -> ChoroplethSnapshot {
    let regions = dataset
        .features()
        .iter()
        .map(|feature| {
            let fill = scale.color(feature.value(attribute));
            RegionFill {
                key: feature.key.clone(),
                fill: fill.unwrap_or(NO_DATA_FILL),
                no_data: fill.is_none(),
            }
        })
        .collect();

    ChoroplethSnapshot {
        attribute: attribute.clone(),
        stroke: MAP_BASE_STROKE,
        regions,
    }
}
