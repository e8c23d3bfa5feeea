use crate::error::{ChartError, ChartResult};

use super::{ChartEngine, EngineSnapshot, SeriesSnapshot};

impl ChartEngine {
    /// Builds a deterministic snapshot useful for regression tests.
    #[must_use]
    pub fn snapshot(&self) -> EngineSnapshot {
        EngineSnapshot {
            config: self.config,
            merged_range: self.aggregator.merged(),
            series: self
                .series
                .iter()
                .map(|(id, series)| SeriesSnapshot {
                    id: *id,
                    title: series.title.clone(),
                    kind: series.data.kind().to_owned(),
                    len: series.data.len(),
                    policy: series.policy,
                    range: series.range,
                })
                .collect(),
            price_ticks: self.price_ticks(),
            time_ticks: self.time_ticks(),
            visible_elements: self.visible_elements(),
        }
    }

    /// Serializes snapshot as pretty JSON for fixture-based regression checks.
    pub fn snapshot_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(&self.snapshot())
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize snapshot: {e}")))
    }
}
