use serde::{Deserialize, Serialize};

use crate::core::DataPoint;
use crate::error::{ChartError, ChartResult};

const REVERSAL_HANDLE_RATIO: f64 = 0.5;
const CONTINUATION_HANDLE_RATIO: f64 = 0.3;

/// Direction pattern of the slopes around one curve segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SlopeContinuity {
    /// Direction reverses entering and leaving the segment.
    ChangeToChange,
    /// Direction reverses entering the segment and then holds.
    ChangeToContinue,
    /// Direction holds entering the segment and reverses leaving it.
    ContinueToChange,
    /// Direction holds on both sides.
    ContinueToContinue,
    /// Some slope is zero, so no direction can be assigned.
    Indeterminate,
}

impl SlopeContinuity {
    #[must_use]
    pub fn classify(back: f64, current: f64, forward: f64) -> Self {
        let (Some(b), Some(c), Some(f)) = (sign(back), sign(current), sign(forward)) else {
            return Self::Indeterminate;
        };
        match (b == c, c == f) {
            (false, false) => Self::ChangeToChange,
            (false, true) => Self::ChangeToContinue,
            (true, false) => Self::ContinueToChange,
            (true, true) => Self::ContinueToContinue,
        }
    }
}

fn sign(slope: f64) -> Option<bool> {
    if slope > 0.0 {
        Some(true)
    } else if slope < 0.0 {
        Some(false)
    } else {
        None
    }
}

/// One cubic Bezier piece of a smoothed polyline.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveSegment {
    pub p0: DataPoint,
    pub c0: DataPoint,
    pub c1: DataPoint,
    pub p1: DataPoint,
    pub continuity: SlopeContinuity,
}

/// Builds smooth paths through evenly spaced points.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CurveInterpolator {
    element_spacing_px: f64,
}

impl CurveInterpolator {
    pub fn new(element_spacing_px: f64) -> ChartResult<Self> {
        if !element_spacing_px.is_finite() || element_spacing_px <= 0.0 {
            return Err(ChartError::InvalidParameter(
                "curve element spacing must be finite and > 0".to_owned(),
            ));
        }
        Ok(Self { element_spacing_px })
    }

    #[must_use]
    pub fn element_spacing_px(self) -> f64 {
        self.element_spacing_px
    }

    /// Emits one segment per consecutive point pair, chained in index order.
    ///
    /// Fewer than two points produce no segments.
    #[must_use]
    pub fn interpolate(self, points: &[DataPoint]) -> Vec<CurveSegment> {
        if points.len() < 2 {
            return Vec::new();
        }
        let last = points.len() - 2;
        (0..=last)
            .map(|i| self.segment(points, i, last))
            .collect()
    }

    fn segment(self, points: &[DataPoint], i: usize, last: usize) -> CurveSegment {
        let spacing = self.element_spacing_px;
        let p0 = points[i];
        let p1 = points[i + 1];
        let prev = i.checked_sub(1).map(|j| points[j]);
        let next = points.get(i + 2).copied();

        let back = prev.map_or(0.0, |prev| self.slope(prev, p0));
        let current = self.slope(p0, p1);
        let forward = next.map_or(0.0, |next| self.slope(p1, next));
        let continuity = SlopeContinuity::classify(back, current, forward);

        let (lo, hi) = (p0.y.min(p1.y), p0.y.max(p1.y));
        // Handle that continues the incoming slope from the previous point.
        let lead = |ratio: f64| -> DataPoint {
            match prev {
                Some(prev) => {
                    let x = p0.x + spacing * ratio;
                    DataPoint::new(x, (prev.y + back * (x - prev.x)).clamp(lo, hi))
                }
                None => p0,
            }
        };
        // Handle that anticipates the outgoing slope towards the next point.
        let trail = |x: f64| -> DataPoint {
            DataPoint::new(x, (p1.y + forward * (x - p1.x)).clamp(lo, hi))
        };

        // A lone segment takes the first-segment shape too.
        let (c0, c1) = if i == 0 {
            (p0, trail(p0.x + spacing * REVERSAL_HANDLE_RATIO))
        } else if i == last {
            (lead(REVERSAL_HANDLE_RATIO), p1)
        } else {
            match continuity {
                SlopeContinuity::ChangeToChange | SlopeContinuity::ChangeToContinue => (
                    lead(REVERSAL_HANDLE_RATIO),
                    trail(p1.x - spacing * REVERSAL_HANDLE_RATIO),
                ),
                SlopeContinuity::ContinueToChange => {
                    (p0, trail(p0.x + spacing * REVERSAL_HANDLE_RATIO))
                }
                // Zero slopes carry no direction; bend as little as a continuation does.
                SlopeContinuity::ContinueToContinue | SlopeContinuity::Indeterminate => {
                    (p0, trail(p0.x + spacing * CONTINUATION_HANDLE_RATIO))
                }
            }
        };

        CurveSegment {
            p0,
            c0,
            c1,
            p1,
            continuity,
        }
    }

    fn slope(self, from: DataPoint, to: DataPoint) -> f64 {
        (to.y - from.y) / self.element_spacing_px
    }
}
