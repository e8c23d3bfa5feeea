use serde::{Deserialize, Serialize};

use crate::core::{OverflowPolicy, Range, SeriesId, Tick};

use super::EngineConfig;

/// Per-series entry of an [`EngineSnapshot`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SeriesSnapshot {
    pub id: SeriesId,
    pub title: String,
    pub kind: String,
    pub len: usize,
    pub policy: OverflowPolicy,
    pub range: Option<Range>,
}

/// Serializable deterministic state snapshot used by regression tests and
/// debugging tooling.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EngineSnapshot {
    pub config: EngineConfig,
    pub merged_range: Range,
    pub series: Vec<SeriesSnapshot>,
    pub price_ticks: Vec<Tick>,
    pub time_ticks: Vec<Tick>,
    pub visible_elements: usize,
}
