use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    AxisAlignment, AxisDistribution, DistributionSpec, ElementAnchor, ElementSize, Tick, Viewport,
};
use crate::error::ChartResult;

use super::engine::time_geometry_for;
use super::{ChartEngine, EngineConfig, EngineEvent, SeriesData};

/// Price tick with its formatted text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabel {
    pub pixel_position: f64,
    pub value: f64,
    pub text: String,
}

/// Time gridline with the element it falls on.
///
/// `index` is `None` when the gridline lies past the data; `text` is the
/// short time label of the first candle series holding that element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeLabel {
    pub pixel_position: f64,
    pub index: Option<usize>,
    pub text: Option<String>,
}

impl ChartEngine {
    pub fn set_viewport(&mut self, viewport: Viewport) -> ChartResult<()> {
        let viewport = viewport.validate()?;
        if viewport == self.config.viewport {
            return Ok(());
        }
        debug!(width = viewport.width, height = viewport.height, "set viewport");
        self.apply_config(|config| config.viewport = viewport)
    }

    pub fn set_element_size(&mut self, element_size: ElementSize) -> ChartResult<()> {
        if element_size == self.config.element_size {
            return Ok(());
        }
        debug!(?element_size, "set element size");
        self.apply_config(|config| config.element_size = element_size)
    }

    pub fn set_element_anchor(&mut self, anchor: ElementAnchor) -> ChartResult<()> {
        if anchor == self.config.element_anchor {
            return Ok(());
        }
        self.apply_config(|config| config.element_anchor = anchor)
    }

    /// Steps to the next larger element preset; returns the active preset.
    pub fn zoom_in(&mut self) -> ChartResult<ElementSize> {
        self.set_element_size(self.config.element_size.zoomed_in())?;
        Ok(self.config.element_size)
    }

    /// Steps to the next smaller element preset; returns the active preset.
    pub fn zoom_out(&mut self) -> ChartResult<ElementSize> {
        self.set_element_size(self.config.element_size.zoomed_out())?;
        Ok(self.config.element_size)
    }

    pub fn set_price_distribution(
        &mut self,
        spec: DistributionSpec,
        alignment: AxisAlignment,
    ) -> ChartResult<()> {
        debug!(?spec, ?alignment, "set price distribution");
        self.apply_config(|config| {
            config.price_distribution = spec;
            config.price_alignment = alignment;
        })
    }

    pub fn set_time_distribution(
        &mut self,
        spec: DistributionSpec,
        alignment: AxisAlignment,
    ) -> ChartResult<()> {
        debug!(?spec, ?alignment, "set time distribution");
        self.apply_config(|config| {
            config.time_distribution = spec;
            config.time_alignment = alignment;
        })
    }

    /// Price gridlines over the merged range.
    ///
    /// Values are omitted while no series contributes a range.
    #[must_use]
    pub fn price_ticks(&self) -> Vec<Tick> {
        self.price_axis
            .ticks(self.config.viewport.height, self.display_range())
    }

    #[must_use]
    pub fn price_labels(&self) -> Vec<AxisLabel> {
        let format = self.config.value_format;
        self.price_ticks()
            .into_iter()
            .filter_map(|tick| {
                tick.value.map(|value| AxisLabel {
                    pixel_position: tick.pixel_position,
                    value,
                    text: format.format(value),
                })
            })
            .collect()
    }

    #[must_use]
    pub fn time_ticks(&self) -> Vec<Tick> {
        self.time_axis.ticks(self.config.viewport.width, None)
    }

    #[must_use]
    pub fn time_labels(&self) -> Vec<TimeLabel> {
        self.time_ticks()
            .into_iter()
            .map(|tick| {
                let index = self.element_at(tick.pixel_position);
                let text = index.and_then(|index| {
                    self.series.values().find_map(|series| match &series.data {
                        SeriesData::Candles(candles) => {
                            candles.get(index).map(|candle| candle.info_label())
                        }
                        SeriesData::Values(_) | SeriesData::Bars(_) => None,
                    })
                });
                TimeLabel {
                    pixel_position: tick.pixel_position,
                    index,
                    text,
                }
            })
            .collect()
    }

    /// Element slots that fit the time axis at the current zoom.
    #[must_use]
    pub fn visible_elements(&self) -> usize {
        self.time_geometry.visible_elements()
    }

    /// Applies a config edit atomically: nothing changes unless the edited
    /// config validates and every derived layout can be rebuilt.
    fn apply_config<F>(&mut self, edit: F) -> ChartResult<()>
    where
        F: FnOnce(&mut EngineConfig),
    {
        let mut config = self.config;
        edit(&mut config);
        let config = config.validate()?;
        let time_geometry = time_geometry_for(config)?;
        let time_axis = AxisDistribution::new(config.time_distribution, config.time_alignment)?;
        let price_axis = AxisDistribution::new(config.price_distribution, config.price_alignment)?;

        self.config = config;
        self.time_geometry = time_geometry;
        self.time_axis = time_axis;
        self.price_axis = price_axis;
        self.emit_event(EngineEvent::GeometryChanged);
        Ok(())
    }
}
