use tracing::{debug, trace, warn};

use crate::core::{Candle, OverflowPolicy, Range, SeriesId};
use crate::error::{ChartError, ChartResult};

use super::{ChartEngine, Series, SeriesData};

impl ChartEngine {
    /// Adds a series and merges its bounds into the shared range.
    ///
    /// Empty series are kept but not registered with the aggregator until
    /// they receive data.
    pub fn add_series(
        &mut self,
        title: impl Into<String>,
        data: SeriesData,
        policy: OverflowPolicy,
    ) -> ChartResult<SeriesId> {
        let series = Series::new(title, data, policy)?;
        let id = SeriesId::new(self.next_series_id);
        self.next_series_id = self.next_series_id.wrapping_add(1);
        debug!(
            %id,
            kind = series.data.kind(),
            len = series.data.len(),
            ?policy,
            "add series"
        );
        self.series.insert(id, series);
        self.sync_series_range(id)?;
        Ok(id)
    }

    /// Removes a series and returns its state.
    pub fn remove_series(&mut self, id: SeriesId) -> ChartResult<Series> {
        let previous = self.aggregator.merged();
        let series = self
            .series
            .shift_remove(&id)
            .ok_or(ChartError::UnknownSeries(id))?;
        if self.aggregator.contains(id) {
            self.aggregator.unregister(id)?;
        }
        debug!(%id, remaining = self.series.len(), "remove series");
        self.emit_range_change(previous);
        Ok(series)
    }

    /// Replaces the whole buffer of a series; the kind may change.
    pub fn replace_series_data(&mut self, id: SeriesId, data: SeriesData) -> ChartResult<()> {
        data.validate()?;
        let range = data.compute_range()?;
        let series = self.series_mut(id)?;
        debug!(%id, kind = data.kind(), len = data.len(), "replace series data");
        series.data = data;
        series.range = range;
        self.sync_series_range(id)
    }

    pub fn replace_candles(&mut self, id: SeriesId, candles: Vec<Candle>) -> ChartResult<()> {
        self.replace_series_data(id, SeriesData::Candles(candles))
    }

    pub fn replace_values(&mut self, id: SeriesId, values: Vec<f64>) -> ChartResult<()> {
        self.replace_series_data(id, SeriesData::Values(values))
    }

    pub fn replace_bars(&mut self, id: SeriesId, values: Vec<f64>) -> ChartResult<()> {
        self.replace_series_data(id, SeriesData::Bars(values))
    }

    /// Appends one candle; the series must hold candles.
    pub fn append_candle(&mut self, id: SeriesId, candle: Candle) -> ChartResult<()> {
        candle.validate()?;
        let appended = Range::new(candle.high, candle.low)?;
        let series = self.series_mut(id)?;
        let kind = series.data.kind();
        let SeriesData::Candles(candles) = &mut series.data else {
            return Err(kind_mismatch(id, "candles", kind));
        };
        candles.push(candle);
        series.range = Some(series.range.map_or(appended, |range| range.merge(appended)));
        trace!(%id, len = candles.len(), "append candle");
        self.sync_series_range(id)
    }

    /// Appends one sample; the series must hold plain values or bars.
    pub fn append_value(&mut self, id: SeriesId, value: f64) -> ChartResult<()> {
        let point = Range::point(value).map_err(|_| {
            ChartError::InvalidData("series values must be finite".to_owned())
        })?;
        let series = self.series_mut(id)?;
        let kind = series.data.kind();
        let (values, appended) = match &mut series.data {
            SeriesData::Values(values) => (values, point),
            // The zero baseline stays inside a bar range.
            SeriesData::Bars(values) => (values, point.merge(Range::default())),
            SeriesData::Candles(_) => return Err(kind_mismatch(id, "values or bars", kind)),
        };
        values.push(value);
        series.range = Some(series.range.map_or(appended, |range| range.merge(appended)));
        trace!(%id, len = values.len(), "append value");
        self.sync_series_range(id)
    }

    /// Moves a series in or out of the shared range.
    pub fn set_overflow_policy(&mut self, id: SeriesId, policy: OverflowPolicy) -> ChartResult<()> {
        let series = self.series_mut(id)?;
        if series.policy == policy {
            return Ok(());
        }
        series.policy = policy;
        debug!(%id, ?policy, "set overflow policy");

        let previous = self.aggregator.merged();
        if self.aggregator.contains(id) {
            self.aggregator.set_policy(id, policy)?;
        }
        self.emit_range_change(previous);
        Ok(())
    }

    /// Pushes the cached range of `id` into the aggregator.
    ///
    /// Registers on first data, updates afterwards and unregisters when the
    /// buffer becomes empty.
    fn sync_series_range(&mut self, id: SeriesId) -> ChartResult<()> {
        let series = self.series.get(&id).ok_or(ChartError::UnknownSeries(id))?;
        let (range, policy) = (series.range, series.policy);
        let previous = self.aggregator.merged();

        match (range, self.aggregator.contains(id)) {
            (Some(range), true) => {
                self.aggregator.update(id, range)?;
            }
            (Some(range), false) => {
                self.aggregator.register(id, range, policy);
            }
            (None, true) => {
                self.aggregator.unregister(id)?;
            }
            (None, false) => {
                trace!(%id, "empty series stays unregistered");
            }
        }

        self.emit_range_change(previous);
        Ok(())
    }

    fn series_mut(&mut self, id: SeriesId) -> ChartResult<&mut Series> {
        self.series.get_mut(&id).ok_or_else(|| {
            warn!(%id, "ignoring operation on unknown series");
            ChartError::UnknownSeries(id)
        })
    }
}

fn kind_mismatch(id: SeriesId, expected: &str, actual: &str) -> ChartError {
    ChartError::InvalidData(format!("{id} holds {actual}, expected {expected}"))
}
