//! Legend swatch extraction for the color scale.

use catalog::AttributeId;
use foundation::Color;
use scales::QuantileScale;
use serde::{Deserialize, Serialize};

/// One legend entry: a palette color, the value extent it covers, and
/// how many records fell in it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSwatch {
    pub color: Color,
    pub min: f64,
    pub max: f64,
    pub count: usize,
}

/// Legend entries in bucket order, low to high.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegendSnapshot {
    pub attribute: AttributeId,
    pub swatches: Vec<LegendSwatch>,
    /// Records whose expressed value was missing.
    pub no_data_count: usize,
}

pub fn extract_legend(
    attribute: &AttributeId,
    scale: &QuantileScale,
    values: &[Option<f64>],
) -> LegendSnapshot {
    let mut counts = vec![0usize; scale.bucket_count()];
    let mut no_data_count = 0;
    for value in values {
        match value.and_then(|v| scale.bucket(v)) {
            Some(bucket) => counts[bucket] += 1,
            None => no_data_count += 1,
        }
    }

    let swatches = scale
        .palette()
        .iter()
        .enumerate()
        .filter_map(|(bucket, color)| {
            let (min, max) = scale.invert_extent(bucket)?;
            Some(LegendSwatch {
                color: *color,
                min,
                max,
                count: counts[bucket],
            })
        })
        .collect();

    LegendSnapshot {
        attribute: attribute.clone(),
        swatches,
        no_data_count,
    }
}
