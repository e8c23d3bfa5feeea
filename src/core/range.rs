use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Whether a series participates in the shared visible range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum OverflowPolicy {
    /// The series keeps its own bounds out of the merge; values outside the
    /// visible range are left to the renderer to clip.
    Fixed,
    /// The series bounds are merged into the shared visible range.
    #[default]
    Dynamic,
}

impl OverflowPolicy {
    #[must_use]
    pub fn contributes(self) -> bool {
        matches!(self, Self::Dynamic)
    }
}

/// Closed numeric interval `[lower, upper]` used for value axes.
///
/// Invariant: `upper >= lower` and both bounds are finite.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(try_from = "RawRange")]
pub struct Range {
    upper: f64,
    lower: f64,
}

impl Range {
    pub fn new(upper: f64, lower: f64) -> ChartResult<Self> {
        validate_bounds(upper, lower)?;
        Ok(Self { upper, lower })
    }

    /// Range covering a single value (`width() == 0`).
    pub fn point(value: f64) -> ChartResult<Self> {
        Self::new(value, value)
    }

    /// Tightest range containing every value, or `None` for an empty input.
    pub fn enclosing<I>(values: I) -> ChartResult<Option<Self>>
    where
        I: IntoIterator<Item = f64>,
    {
        let mut bounds: Option<(f64, f64)> = None;
        for value in values {
            if !value.is_finite() {
                return Err(ChartError::InvalidData(
                    "range values must be finite".to_owned(),
                ));
            }
            bounds = Some(match bounds {
                Some((upper, lower)) => (upper.max(value), lower.min(value)),
                None => (value, value),
            });
        }

        bounds
            .map(|(upper, lower)| Self::new(upper, lower))
            .transpose()
    }

    #[must_use]
    pub fn upper(self) -> f64 {
        self.upper
    }

    #[must_use]
    pub fn lower(self) -> f64 {
        self.lower
    }

    pub fn set_upper(&mut self, upper: f64) -> ChartResult<()> {
        validate_bounds(upper, self.lower)?;
        self.upper = upper;
        Ok(())
    }

    pub fn set_lower(&mut self, lower: f64) -> ChartResult<()> {
        validate_bounds(self.upper, lower)?;
        self.lower = lower;
        Ok(())
    }

    #[must_use]
    pub fn width(self) -> f64 {
        self.upper - self.lower
    }

    #[must_use]
    pub fn contains(self, value: f64) -> bool {
        value >= self.lower && value <= self.upper
    }

    /// Smallest range containing both `self` and `other`.
    #[must_use]
    pub fn merge(self, other: Range) -> Range {
        Self {
            upper: self.upper.max(other.upper),
            lower: self.lower.min(other.lower),
        }
    }
}

#[derive(Deserialize)]
struct RawRange {
    upper: f64,
    lower: f64,
}

impl TryFrom<RawRange> for Range {
    type Error = ChartError;

    fn try_from(raw: RawRange) -> ChartResult<Self> {
        Self::new(raw.upper, raw.lower)
    }
}

fn validate_bounds(upper: f64, lower: f64) -> ChartResult<()> {
    if !upper.is_finite() || !lower.is_finite() || upper < lower {
        return Err(ChartError::InvalidRange { upper, lower });
    }
    Ok(())
}
