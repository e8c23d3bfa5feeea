use indexmap::IndexMap;
use tracing::debug;

use crate::core::{
    AxisDistribution, AxisGeometry, CoordinateMapper, Range, RangeAggregator, SeriesId, Viewport,
};
use crate::error::ChartResult;

use super::{EngineConfig, EngineEvent, Series};

/// Main orchestration facade consumed by host applications.
///
/// `ChartEngine` owns the series buffers, keeps the shared range aggregator
/// in sync with them and derives every pixel layout (ticks, candle geometry,
/// curves, cursor hits) from the current configuration.
#[derive(Debug, Clone)]
pub struct ChartEngine {
    pub(super) config: EngineConfig,
    pub(super) time_geometry: AxisGeometry,
    pub(super) time_axis: AxisDistribution,
    pub(super) price_axis: AxisDistribution,
    pub(super) series: IndexMap<SeriesId, Series>,
    pub(super) aggregator: RangeAggregator,
    pub(super) next_series_id: u32,
    pub(super) events: Vec<EngineEvent>,
}

impl ChartEngine {
    pub fn new(config: EngineConfig) -> ChartResult<Self> {
        let config = config.validate()?;
        let time_geometry = time_geometry_for(config)?;
        let time_axis = AxisDistribution::new(config.time_distribution, config.time_alignment)?;
        let price_axis = AxisDistribution::new(config.price_distribution, config.price_alignment)?;
        debug!(
            width = config.viewport.width,
            height = config.viewport.height,
            element_size = ?config.element_size,
            "create chart engine"
        );

        Ok(Self {
            config,
            time_geometry,
            time_axis,
            price_axis,
            series: IndexMap::new(),
            aggregator: RangeAggregator::new(),
            next_series_id: 0,
            events: Vec::new(),
        })
    }

    #[must_use]
    pub fn config(&self) -> EngineConfig {
        self.config
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    #[must_use]
    pub fn time_geometry(&self) -> AxisGeometry {
        self.time_geometry
    }

    #[must_use]
    pub fn time_mapper(&self) -> CoordinateMapper<'_> {
        CoordinateMapper::new(&self.time_geometry)
    }

    #[must_use]
    pub fn time_axis(&self) -> AxisDistribution {
        self.time_axis
    }

    #[must_use]
    pub fn price_axis(&self) -> AxisDistribution {
        self.price_axis
    }

    /// Shared visible range of every `Dynamic` series; `{0, 0}` when none.
    #[must_use]
    pub fn merged_range(&self) -> Range {
        self.aggregator.merged()
    }

    #[must_use]
    pub fn aggregator(&self) -> &RangeAggregator {
        &self.aggregator
    }

    #[must_use]
    pub fn series(&self, id: SeriesId) -> Option<&Series> {
        self.series.get(&id)
    }

    /// Series identifiers in insertion order.
    pub fn series_ids(&self) -> impl Iterator<Item = SeriesId> + '_ {
        self.series.keys().copied()
    }

    #[must_use]
    pub fn series_count(&self) -> usize {
        self.series.len()
    }

    /// Price axis length in pixels, as `f64` for value mapping.
    #[must_use]
    pub fn price_axis_height_px(&self) -> f64 {
        f64::from(self.config.viewport.height)
    }
}

pub(super) fn time_geometry_for(config: EngineConfig) -> ChartResult<AxisGeometry> {
    Ok(
        AxisGeometry::with_element_size(config.viewport.width, config.element_size)?
            .with_alignment(config.time_alignment)
            .with_anchor(config.element_anchor),
    )
}
