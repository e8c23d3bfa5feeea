mod axis_controller;
mod cursor_controller;
mod data_controller;
mod engine;
mod engine_config;
mod engine_snapshot;
mod events;
mod series;
mod series_projection;
mod shared_aggregator;
mod snapshot_controller;

pub use axis_controller::{AxisLabel, TimeLabel};
pub use cursor_controller::{CursorInfo, SeriesReadout};
pub use engine::ChartEngine;
pub use engine_config::{EngineConfig, ValueFormat};
pub use engine_snapshot::{EngineSnapshot, SeriesSnapshot};
pub use events::EngineEvent;
pub use series::{Series, SeriesData};
pub use shared_aggregator::SharedRangeAggregator;
