use crate::core::{
    BarGeometry, CandleGeometry, CurveInterpolator, CurveSegment, DataPoint, LineSegment, Range,
    SeriesId, project_bars, project_candles, project_line_points, project_line_segments,
};
use crate::error::{ChartError, ChartResult};

use super::{ChartEngine, Series, SeriesData};

impl ChartEngine {
    /// Candle bodies and wicks in pixel space, one per buffer index.
    pub fn project_candles(&self, id: SeriesId) -> ChartResult<Vec<CandleGeometry>> {
        let series = self.series_ref(id)?;
        let SeriesData::Candles(candles) = &series.data else {
            return Err(ChartError::InvalidData(format!(
                "{id} holds {}, expected candles",
                series.data.kind()
            )));
        };
        Ok(project_candles(
            candles,
            self.time_mapper(),
            self.projection_range(series),
            self.price_axis_height_px(),
        ))
    }

    /// Bar rectangles hanging from the zero baseline, one per buffer index.
    pub fn project_bars(&self, id: SeriesId) -> ChartResult<Vec<BarGeometry>> {
        let series = self.series_ref(id)?;
        let SeriesData::Bars(values) = &series.data else {
            return Err(ChartError::InvalidData(format!(
                "{id} holds {}, expected bars",
                series.data.kind()
            )));
        };
        Ok(project_bars(
            values,
            self.time_mapper(),
            self.projection_range(series),
            self.price_axis_height_px(),
        ))
    }

    /// Line vertices in pixel space; candle series project their closes.
    pub fn project_points(&self, id: SeriesId) -> ChartResult<Vec<DataPoint>> {
        let series = self.series_ref(id)?;
        Ok(project_line_points(
            &series.data.line_values(),
            self.time_mapper(),
            self.projection_range(series),
            self.price_axis_height_px(),
        ))
    }

    pub fn project_line_segments(&self, id: SeriesId) -> ChartResult<Vec<LineSegment>> {
        Ok(project_line_segments(&self.project_points(id)?))
    }

    /// Bezier segments through the projected points of `id`.
    pub fn smoothed_curve(&self, id: SeriesId) -> ChartResult<Vec<CurveSegment>> {
        let points = self.project_points(id)?;
        let interpolator = CurveInterpolator::new(self.time_geometry.element_spacing_px)?;
        Ok(interpolator.interpolate(&points))
    }

    /// Range a series is drawn against.
    ///
    /// Every series shares the merged range while at least one series
    /// contributes; a chart holding only `Fixed` series falls back to the
    /// series' own bounds.
    pub(super) fn projection_range(&self, series: &Series) -> Range {
        self.display_range()
            .or(series.range)
            .unwrap_or_default()
    }

    /// Merged range, or `None` while no series contributes to it.
    #[must_use]
    pub fn display_range(&self) -> Option<Range> {
        (self.aggregator.merged_contributors() > 0).then(|| self.aggregator.merged())
    }

    pub(super) fn series_ref(&self, id: SeriesId) -> ChartResult<&Series> {
        self.series.get(&id).ok_or(ChartError::UnknownSeries(id))
    }
}
