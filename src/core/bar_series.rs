use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, Range};
use crate::error::ChartResult;

/// Projected bar rectangle in pixel coordinates.
///
/// `y_top..y_bottom` always spans from the zero baseline to the value,
/// whichever side of the baseline the value falls on.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub x_left: f64,
    pub x_right: f64,
    pub y_top: f64,
    pub y_bottom: f64,
    pub baseline_y: f64,
    pub is_negative: bool,
}

/// Bounds of a bar buffer widened to include zero; `None` when empty.
pub fn bars_range(values: &[f64]) -> ChartResult<Option<Range>> {
    if values.is_empty() {
        return Ok(None);
    }
    Range::enclosing(values.iter().copied().chain(std::iter::once(0.0)))
}

/// Projects bars from the zero baseline, each drawn from its leading edge
/// on the element grid.
#[must_use]
pub fn project_bars(
    values: &[f64],
    mapper: CoordinateMapper<'_>,
    range: Range,
    axis_height_px: f64,
) -> Vec<BarGeometry> {
    let geometry = mapper.geometry();
    let width = geometry.element_width_px;
    let baseline_y = CoordinateMapper::value_to_pixel(0.0, range, axis_height_px);

    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            let x_left = mapper.index_to_pixel(index) + geometry.adjustment_px() - width / 2.0;
            let value_y = CoordinateMapper::value_to_pixel(*value, range, axis_height_px);
            BarGeometry {
                x_left,
                x_right: x_left + width,
                y_top: value_y.min(baseline_y),
                y_bottom: value_y.max(baseline_y),
                baseline_y,
                is_negative: *value < 0.0,
            }
        })
        .collect()
}
