use serde::{Deserialize, Serialize};

use crate::core::{CoordinateMapper, DataPoint, Range};
use crate::error::{ChartError, ChartResult};

/// Projected line segment in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

/// Bounds of a value buffer; `None` when empty.
pub fn values_range(values: &[f64]) -> ChartResult<Option<Range>> {
    Range::enclosing(values.iter().copied())
}

/// Rejects non-finite samples before they reach range computation.
pub fn validate_values(values: &[f64]) -> ChartResult<()> {
    if values.iter().any(|value| !value.is_finite()) {
        return Err(ChartError::InvalidData(
            "series values must be finite".to_owned(),
        ));
    }
    Ok(())
}

/// Maps a value buffer to pixel points, one per element slot.
#[must_use]
pub fn project_line_points(
    values: &[f64],
    mapper: CoordinateMapper<'_>,
    range: Range,
    axis_height_px: f64,
) -> Vec<DataPoint> {
    values
        .iter()
        .enumerate()
        .map(|(index, value)| {
            DataPoint::new(
                mapper.index_to_pixel(index),
                CoordinateMapper::value_to_pixel(*value, range, axis_height_px),
            )
        })
        .collect()
}

/// Joins projected points into straight segments for unsmoothed line charts.
#[must_use]
pub fn project_line_segments(points: &[DataPoint]) -> Vec<LineSegment> {
    points
        .windows(2)
        .map(|pair| LineSegment {
            x1: pair[0].x,
            y1: pair[0].y,
            x2: pair[1].x,
            y2: pair[1].y,
        })
        .collect()
}
