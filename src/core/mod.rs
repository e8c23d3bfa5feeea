pub mod aggregator;
pub mod bar_series;
pub mod candle;
pub mod curve;
pub mod distribution;
pub mod element_size;
pub mod line_series;
pub mod mapper;
pub mod primitives;
pub mod range;
pub mod types;

pub use aggregator::{Contributor, RangeAggregator, SeriesId, merge_dynamic};
pub use bar_series::{BarGeometry, bars_range, project_bars};
pub use candle::{Candle, CandleGeometry, candles_range, project_candles, validate_candles};
pub use curve::{CurveInterpolator, CurveSegment, SlopeContinuity};
pub use distribution::{AxisAlignment, AxisDistribution, DistributionSpec, MAX_DIVISIONS, Tick};
pub use element_size::ElementSize;
pub use line_series::{
    LineSegment, project_line_points, project_line_segments, validate_values, values_range,
};
pub use mapper::{AxisGeometry, CoordinateMapper, ElementAnchor};
pub use range::{OverflowPolicy, Range};
pub use types::{DataPoint, Viewport};
