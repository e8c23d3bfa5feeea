use std::fmt;

use indexmap::IndexMap;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::core::{OverflowPolicy, Range};
use crate::error::{ChartError, ChartResult};

/// Stable identity of a series registered with the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SeriesId(u32);

impl SeriesId {
    #[must_use]
    pub const fn new(raw: u32) -> Self {
        Self(raw)
    }

    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl fmt::Display for SeriesId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "series#{}", self.0)
    }
}

/// Last known bounds and overflow policy of one registered series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Contributor {
    pub range: Range,
    pub policy: OverflowPolicy,
}

/// Combines the ranges of every overlaid series into one shared visible range.
///
/// The merged range is rebuilt with a full fold after every mutation, so it
/// only depends on the current contributor set and never on update order.
/// A contributor whose range narrows therefore shrinks the merged range too.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RangeAggregator {
    contributors: IndexMap<SeriesId, Contributor>,
    merged: Range,
}

impl RangeAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers (or re-registers) a series and returns the new merged range.
    pub fn register(&mut self, id: SeriesId, range: Range, policy: OverflowPolicy) -> Range {
        self.contributors.insert(id, Contributor { range, policy });
        self.recompute()
    }

    pub fn unregister(&mut self, id: SeriesId) -> ChartResult<Range> {
        if self.contributors.shift_remove(&id).is_none() {
            return Err(ChartError::UnknownSeries(id));
        }
        Ok(self.recompute())
    }

    pub fn update(&mut self, id: SeriesId, range: Range) -> ChartResult<Range> {
        let contributor = self
            .contributors
            .get_mut(&id)
            .ok_or(ChartError::UnknownSeries(id))?;
        contributor.range = range;
        Ok(self.recompute())
    }

    /// Switches a series between `Fixed` and `Dynamic`.
    ///
    /// The last known range of the series is kept either way, so switching
    /// back to `Dynamic` re-inserts it into the merge.
    pub fn set_policy(&mut self, id: SeriesId, policy: OverflowPolicy) -> ChartResult<Range> {
        let contributor = self
            .contributors
            .get_mut(&id)
            .ok_or(ChartError::UnknownSeries(id))?;
        contributor.policy = policy;
        Ok(self.recompute())
    }

    #[must_use]
    pub fn merged(&self) -> Range {
        self.merged
    }

    #[must_use]
    pub fn contains(&self, id: SeriesId) -> bool {
        self.contributors.contains_key(&id)
    }

    #[must_use]
    pub fn contributor(&self, id: SeriesId) -> Option<Contributor> {
        self.contributors.get(&id).copied()
    }

    /// Contributors in registration order.
    pub fn contributors(&self) -> impl Iterator<Item = (SeriesId, Contributor)> + '_ {
        self.contributors.iter().map(|(id, c)| (*id, *c))
    }

    /// Number of contributors currently merged (`Dynamic` policy).
    #[must_use]
    pub fn merged_contributors(&self) -> usize {
        self.contributors
            .values()
            .filter(|c| c.policy.contributes())
            .count()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.contributors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.contributors.is_empty()
    }

    fn recompute(&mut self) -> Range {
        self.merged = merge_dynamic(self.contributors.values().copied());
        trace!(
            contributors = self.contributors.len(),
            upper = self.merged.upper(),
            lower = self.merged.lower(),
            "recompute merged range"
        );
        self.merged
    }
}

/// Folds the `Dynamic` contributors into their tightest enclosing range.
///
/// Returns `{0, 0}` when nothing contributes.
#[must_use]
pub fn merge_dynamic<I>(contributors: I) -> Range
where
    I: IntoIterator<Item = Contributor>,
{
    let mut upper: Option<OrderedFloat<f64>> = None;
    let mut lower: Option<OrderedFloat<f64>> = None;
    for contributor in contributors
        .into_iter()
        .filter(|c| c.policy.contributes())
    {
        let (u, l) = (
            OrderedFloat(contributor.range.upper()),
            OrderedFloat(contributor.range.lower()),
        );
        upper = Some(upper.map_or(u, |current| current.max(u)));
        lower = Some(lower.map_or(l, |current| current.min(l)));
    }

    match (upper, lower) {
        // Every contributor already satisfies `upper >= lower`, so the fold does too.
        (Some(upper), Some(lower)) => Range::new(upper.0, lower.0).unwrap_or_default(),
        _ => Range::default(),
    }
}
