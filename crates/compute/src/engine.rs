//! Scale fitting and view extraction for one rendering pass.

use catalog::AttributeId;
use layers::{
    extract_axis, extract_bubbles, extract_choropleth, extract_legend, AxisSnapshot,
    BubbleSnapshot, ChartFrame, ChartScales, ChoroplethSnapshot, LegendSnapshot,
};
use scales::{LinearScale, Orientation, QuantileScale, ScaleError, SizeScale};
use scene::{Dataset, SelectionState};
use serde::{Deserialize, Serialize};

use crate::error::ComputeError;
use crate::options::EngineOptions;

/// Everything one pass hands to the renderer.
///
/// The bundle is regenerated whole on every successful recompute; there
/// are no partial view updates. Both views read the same fitted scales,
/// so a bundle can never mix attributes across the map and the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ViewUpdate {
    pub selection: SelectionState,
    pub scales: ChartScales,
    pub choropleth: ChoroplethSnapshot,
    pub bubbles: BubbleSnapshot,
    pub x_axis: AxisSnapshot,
    pub y_axis: AxisSnapshot,
    pub legend: LegendSnapshot,
}

/// Fits scales to the expressed attributes and extracts the views.
///
/// The engine is pure: it holds only configuration, and `recompute`
/// reads the dataset and selection without mutating either. Identical
/// inputs produce an equal bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSyncEngine {
    frame: ChartFrame,
    options: EngineOptions,
}

impl Default for ViewSyncEngine {
    fn default() -> Self {
        Self::new(ChartFrame::default(), EngineOptions::default())
    }
}

impl ViewSyncEngine {
    pub fn new(frame: ChartFrame, options: EngineOptions) -> Self {
        Self { frame, options }
    }

    pub fn frame(&self) -> &ChartFrame {
        &self.frame
    }

    pub fn options(&self) -> &EngineOptions {
        &self.options
    }

    /// Derive the full view bundle for the current selection.
    ///
    /// The color attribute drives the choropleth fill, the bubble fill,
    /// the bubble radius and the legend. Fails with `ComputeError::Scale`
    /// when an expressed attribute has no finite values; the caller's
    /// selection is left untouched and may be recomputed again after a
    /// role change.
    pub fn recompute(
        &self,
        dataset: &Dataset,
        selection: &SelectionState,
    ) -> Result<ViewUpdate, ComputeError> {
        let x_values = dataset.record_values(selection.x());
        let y_values = dataset.record_values(selection.y());
        let color_values = dataset.record_values(selection.color());

        let x = LinearScale::fit(
            &x_values,
            self.options.domain_padding,
            self.frame.inner_width_px(),
            Orientation::Horizontal,
        )
        .map_err(|source| scale_error(selection.x(), source))?;
        let y = LinearScale::fit(
            &y_values,
            self.options.domain_padding,
            self.frame.inner_height_px(),
            Orientation::Vertical,
        )
        .map_err(|source| scale_error(selection.y(), source))?;
        let color = QuantileScale::fit(&color_values, &self.options.palette)
            .map_err(|source| scale_error(selection.color(), source))?;
        let size = SizeScale::fit(&color_values, self.options.size)
            .map_err(|source| scale_error(selection.color(), source))?;
        let scales = ChartScales { x, y, size, color };

        let choropleth = extract_choropleth(dataset, selection.color(), &scales.color);
        let bubbles = extract_bubbles(dataset, selection, &scales, &self.frame);
        let x_axis = extract_axis(selection.x(), &scales.x, Orientation::Horizontal);
        let y_axis = extract_axis(selection.y(), &scales.y, Orientation::Vertical);
        let legend = extract_legend(selection.color(), &scales.color, &color_values);

        Ok(ViewUpdate {
            selection: selection.clone(),
            scales,
            choropleth,
            bubbles,
            x_axis,
            y_axis,
            legend,
        })
    }
}

fn scale_error(attribute: &AttributeId, source: ScaleError) -> ComputeError {
    ComputeError::Scale {
        attribute: attribute.clone(),
        source,
    }
}
