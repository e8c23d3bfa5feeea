use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::Range;

use super::ChartEngine;

/// Notifications queued by the engine for the host to drain after a batch
/// of mutations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum EngineEvent {
    /// Merged visible range differs from the one before the mutation.
    RangeChanged(Range),
    /// Viewport, element size or a distribution changed; cached layouts are stale.
    GeometryChanged,
}

impl ChartEngine {
    /// Takes every queued event, oldest first.
    pub fn drain_events(&mut self) -> Vec<EngineEvent> {
        std::mem::take(&mut self.events)
    }

    #[must_use]
    pub fn pending_events(&self) -> &[EngineEvent] {
        &self.events
    }

    pub(super) fn emit_event(&mut self, event: EngineEvent) {
        trace!(?event, pending = self.events.len() + 1, "queue engine event");
        self.events.push(event);
    }

    /// Queues `RangeChanged` only when the merged range actually moved.
    pub(super) fn emit_range_change(&mut self, previous: Range) {
        let merged = self.aggregator.merged();
        if merged != previous {
            self.emit_event(EngineEvent::RangeChanged(merged));
        }
    }
}
