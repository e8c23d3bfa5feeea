use std::sync::Arc;

use parking_lot::RwLock;
use tracing::trace;

use crate::core::{Contributor, OverflowPolicy, Range, RangeAggregator, SeriesId};
use crate::error::ChartResult;

/// Thread-shareable handle to one [`RangeAggregator`].
///
/// Every mutation, including the recompute that follows it, runs under a
/// single write guard, so readers only ever see a fully merged range.
#[derive(Debug, Clone, Default)]
pub struct SharedRangeAggregator {
    inner: Arc<RwLock<RangeAggregator>>,
}

impl SharedRangeAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn from_aggregator(aggregator: RangeAggregator) -> Self {
        Self {
            inner: Arc::new(RwLock::new(aggregator)),
        }
    }

    pub fn register(&self, id: SeriesId, range: Range, policy: OverflowPolicy) -> Range {
        let merged = self.inner.write().register(id, range, policy);
        trace!(%id, "shared register");
        merged
    }

    pub fn unregister(&self, id: SeriesId) -> ChartResult<Range> {
        self.inner.write().unregister(id)
    }

    pub fn update(&self, id: SeriesId, range: Range) -> ChartResult<Range> {
        self.inner.write().update(id, range)
    }

    pub fn set_policy(&self, id: SeriesId, policy: OverflowPolicy) -> ChartResult<Range> {
        self.inner.write().set_policy(id, policy)
    }

    #[must_use]
    pub fn merged(&self) -> Range {
        self.inner.read().merged()
    }

    #[must_use]
    pub fn contributor(&self, id: SeriesId) -> Option<Contributor> {
        self.inner.read().contributor(id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.inner.read().len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.inner.read().is_empty()
    }

    /// Copy of the current state, taken under one read guard.
    #[must_use]
    pub fn snapshot(&self) -> RangeAggregator {
        self.inner.read().clone()
    }
}
