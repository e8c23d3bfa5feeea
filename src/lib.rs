//! candle-chart: numeric engine for candlestick and line charts.
//!
//! The crate turns series buffers into everything a renderer needs: a shared
//! visible value range, tick positions for both axes, pixel geometry for
//! candles and lines, smoothed curves and cursor hit-testing. Drawing itself
//! is left to the host.

pub mod api;
pub mod core;
pub mod error;
pub mod telemetry;

pub use api::{ChartEngine, EngineConfig};
pub use error::{ChartError, ChartResult};
