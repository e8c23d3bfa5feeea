use std::fmt;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[cfg(feature = "parallel-projection")]
use rayon::prelude::*;

use crate::core::primitives::{datetime_to_unix_seconds, decimal_to_f64, unix_seconds_to_datetime};
use crate::core::{CoordinateMapper, Range};
use crate::error::{ChartError, ChartResult};

/// OHLCV candle; `time` is in unix seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawCandle")]
pub struct Candle {
    pub time: f64,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

impl Candle {
    /// Builds a validated candle.
    pub fn new(
        time: f64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> ChartResult<Self> {
        let candle = Self {
            time,
            open,
            high,
            low,
            close,
            volume,
        };
        candle.validate()?;
        Ok(candle)
    }

    /// Checks the candle invariants.
    ///
    /// Fields are public, so candles built as literals must pass through
    /// here before they reach a series buffer.
    ///
    /// Invariants:
    /// - prices are finite and non-negative
    /// - `low <= high`
    /// - `open` and `close` are within `[low, high]`
    pub fn validate(&self) -> ChartResult<()> {
        let Self {
            time,
            open,
            high,
            low,
            close,
            ..
        } = *self;

        if !time.is_finite()
            || !open.is_finite()
            || !high.is_finite()
            || !low.is_finite()
            || !close.is_finite()
        {
            return Err(ChartError::InvalidData(
                "candle values must be finite".to_owned(),
            ));
        }

        if open < 0.0 || high < 0.0 || low < 0.0 || close < 0.0 {
            return Err(ChartError::InvalidData(
                "candle prices must be >= 0".to_owned(),
            ));
        }

        if low > high {
            return Err(ChartError::InvalidData(
                "candle low must be <= high".to_owned(),
            ));
        }

        if open < low || open > high || close < low || close > high {
            return Err(ChartError::InvalidData(
                "candle open/close must be within low/high range".to_owned(),
            ));
        }

        Ok(())
    }

    pub fn from_decimal_time(
        time: DateTime<Utc>,
        open: Decimal,
        high: Decimal,
        low: Decimal,
        close: Decimal,
        volume: u64,
    ) -> ChartResult<Self> {
        Self::new(
            datetime_to_unix_seconds(time),
            decimal_to_f64(open, "open")?,
            decimal_to_f64(high, "high")?,
            decimal_to_f64(low, "low")?,
            decimal_to_f64(close, "close")?,
            volume,
        )
    }

    #[must_use]
    pub fn is_bullish(self) -> bool {
        self.close >= self.open
    }

    #[must_use]
    pub fn datetime(self) -> Option<DateTime<Utc>> {
        unix_seconds_to_datetime(self.time)
    }

    /// Short time label, e.g. `05 Mar 14:30`.
    #[must_use]
    pub fn info_label(self) -> String {
        self.datetime()
            .map(|time| time.format("%d %b %H:%M").to_string())
            .unwrap_or_default()
    }
}

impl fmt::Display for Candle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let date = self
            .datetime()
            .map(|time| time.format("%Y.%-m.%d %H:%M").to_string())
            .unwrap_or_default();
        write!(
            f,
            "O: {:.5}  H: {:.5}  L: {:.5}  C: {:.5}  V: {}  D: {}",
            self.open, self.high, self.low, self.close, self.volume, date
        )
    }
}

#[derive(Deserialize)]
struct RawCandle {
    time: f64,
    open: f64,
    high: f64,
    low: f64,
    close: f64,
    volume: u64,
}

impl TryFrom<RawCandle> for Candle {
    type Error = ChartError;

    fn try_from(raw: RawCandle) -> ChartResult<Self> {
        Self::new(raw.time, raw.open, raw.high, raw.low, raw.close, raw.volume)
    }
}

/// Validates every candle of a buffer.
pub fn validate_candles(candles: &[Candle]) -> ChartResult<()> {
    candles.iter().try_for_each(Candle::validate)
}

/// Bounds of a candle buffer (`max high`, `min low`); `None` when empty.
pub fn candles_range(candles: &[Candle]) -> ChartResult<Option<Range>> {
    let Some(first) = candles.first() else {
        return Ok(None);
    };
    let (upper, lower) = candles
        .iter()
        .fold((first.high, first.low), |(upper, lower), candle| {
            (upper.max(candle.high), lower.min(candle.low))
        });
    Range::new(upper, lower).map(Some)
}

/// Projected candle geometry in pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CandleGeometry {
    pub center_x: f64,
    pub body_left: f64,
    pub body_right: f64,
    pub body_top: f64,
    pub body_bottom: f64,
    pub wick_top: f64,
    pub wick_bottom: f64,
    pub is_bullish: bool,
}

/// Projects candles by buffer index onto the element grid and `range` onto
/// a top-down axis of `axis_height_px` pixels.
#[must_use]
pub fn project_candles(
    candles: &[Candle],
    mapper: CoordinateMapper<'_>,
    range: Range,
    axis_height_px: f64,
) -> Vec<CandleGeometry> {
    #[cfg(feature = "parallel-projection")]
    {
        candles
            .par_iter()
            .enumerate()
            .map(|(index, candle)| project_single_candle(index, *candle, mapper, range, axis_height_px))
            .collect()
    }

    #[cfg(not(feature = "parallel-projection"))]
    {
        candles
            .iter()
            .enumerate()
            .map(|(index, candle)| {
                project_single_candle(index, *candle, mapper, range, axis_height_px)
            })
            .collect()
    }
}

fn project_single_candle(
    index: usize,
    candle: Candle,
    mapper: CoordinateMapper<'_>,
    range: Range,
    axis_height_px: f64,
) -> CandleGeometry {
    let half = mapper.geometry().element_width_px / 2.0;
    let slot = mapper.index_to_pixel(index);
    let center_x = slot + mapper.geometry().adjustment_px();
    let to_y = |value: f64| CoordinateMapper::value_to_pixel(value, range, axis_height_px);
    let open_y = to_y(candle.open);
    let close_y = to_y(candle.close);

    CandleGeometry {
        center_x,
        body_left: center_x - half,
        body_right: center_x + half,
        body_top: open_y.min(close_y),
        body_bottom: open_y.max(close_y),
        wick_top: to_y(candle.high),
        wick_bottom: to_y(candle.low),
        is_bullish: candle.is_bullish(),
    }
}
