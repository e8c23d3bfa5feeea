use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{CoordinateMapper, SeriesId};

use super::{ChartEngine, SeriesData};

/// Read-out of one series at the cursor element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesReadout {
    pub id: SeriesId,
    pub title: String,
    pub text: String,
}

/// Everything a crosshair overlay needs for one pointer position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CursorInfo {
    pub index: Option<usize>,
    pub value: Option<f64>,
    pub value_text: Option<String>,
    /// Short time label of the first candle series at `index`.
    pub time_label: Option<String>,
    pub series: Vec<SeriesReadout>,
}

impl ChartEngine {
    /// Element index under pixel `x`, bounded by the longest series.
    #[must_use]
    pub fn element_at(&self, x: f64) -> Option<usize> {
        let len = self
            .series
            .values()
            .map(|series| series.data.len())
            .max()
            .unwrap_or(0);
        self.time_mapper().element_at_pixel(x, len)
    }

    /// Value under pixel `y` on the price axis; `None` while nothing is plotted.
    #[must_use]
    pub fn value_at(&self, y: f64) -> Option<f64> {
        if !y.is_finite() {
            return None;
        }
        self.display_range()
            .map(|range| CoordinateMapper::pixel_to_value(y, range, self.price_axis_height_px()))
    }

    #[must_use]
    pub fn cursor_info(&self, x: f64, y: f64) -> CursorInfo {
        let index = self.element_at(x);
        let value = self.value_at(y);
        let format = self.config.value_format;

        let mut time_label = None;
        let mut series = Vec::new();
        if let Some(index) = index {
            for (id, entry) in &self.series {
                let text = match &entry.data {
                    SeriesData::Candles(candles) => candles.get(index).map(|candle| {
                        time_label.get_or_insert_with(|| candle.info_label());
                        candle.to_string()
                    }),
                    SeriesData::Values(values) | SeriesData::Bars(values) => {
                        values.get(index).map(|value| format.format(*value))
                    }
                };
                if let Some(text) = text {
                    series.push(SeriesReadout {
                        id: *id,
                        title: entry.title.clone(),
                        text,
                    });
                }
            }
        }

        trace!(x, y, ?index, ?value, readouts = series.len(), "cursor info");
        CursorInfo {
            index,
            value,
            value_text: value.map(|value| format.format(value)),
            time_label,
            series,
        }
    }
}
