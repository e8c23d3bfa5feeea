use serde::{Deserialize, Serialize};

use crate::core::{
    Candle, OverflowPolicy, Range, bars_range, candles_range, validate_candles, validate_values,
    values_range,
};
use crate::error::ChartResult;

/// Buffer of one plotted series.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "data", rename_all = "snake_case")]
pub enum SeriesData {
    Candles(Vec<Candle>),
    /// Plain samples drawn as a line or smoothed line.
    Values(Vec<f64>),
    /// Samples drawn as bars from a zero baseline; the range always holds 0.
    Bars(Vec<f64>),
}

impl SeriesData {
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::Candles(candles) => candles.len(),
            Self::Values(values) | Self::Bars(values) => values.len(),
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[must_use]
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Candles(_) => "candles",
            Self::Values(_) => "values",
            Self::Bars(_) => "bars",
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        match self {
            Self::Candles(candles) => validate_candles(candles),
            Self::Values(values) | Self::Bars(values) => validate_values(values),
        }
    }

    pub fn compute_range(&self) -> ChartResult<Option<Range>> {
        match self {
            Self::Candles(candles) => candles_range(candles),
            Self::Values(values) => values_range(values),
            Self::Bars(values) => bars_range(values),
        }
    }

    /// Value used for line projections: close for candles, the sample otherwise.
    #[must_use]
    pub fn line_values(&self) -> Vec<f64> {
        match self {
            Self::Candles(candles) => candles.iter().map(|candle| candle.close).collect(),
            Self::Values(values) | Self::Bars(values) => values.clone(),
        }
    }
}

/// Series state owned by the engine.
///
/// `range` is recomputed from the buffer on every mutation and only a copy
/// is handed to the aggregator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Series {
    pub title: String,
    pub data: SeriesData,
    pub policy: OverflowPolicy,
    pub range: Option<Range>,
}

impl Series {
    pub fn new(title: impl Into<String>, data: SeriesData, policy: OverflowPolicy) -> ChartResult<Self> {
        data.validate()?;
        let range = data.compute_range()?;
        Ok(Self {
            title: title.into(),
            data,
            policy,
            range,
        })
    }
}
