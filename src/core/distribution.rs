use serde::{Deserialize, Serialize};

use crate::core::Range;
use crate::error::{ChartError, ChartResult};

pub const DEFAULT_FIXED_INTERVAL_PX: f64 = 32.0;
pub const DEFAULT_LINEAR_DIVISIONS: u32 = 5;
pub const DEFAULT_MIN_DIVISION_PX: f64 = 25.0;
pub const DEFAULT_GROWTH_RATE: f64 = 1.5;
pub const DEFAULT_LOG_BASE: f64 = 1.5;

/// Upper bound on divisions per axis for every strategy.
///
/// Parameters that would need more divisions are clamped: fixed intervals
/// widen to `axis / MAX_DIVISIONS`, the other strategies stop at this count
/// and still span the whole axis.
pub const MAX_DIVISIONS: usize = 4_096;

// Slack for the last fixed tick when `start + k * interval` lands a few ulps past the axis end.
const FIXED_END_TOLERANCE: f64 = 1e-9;

/// Which end of the axis a distribution is anchored to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum AxisAlignment {
    /// Ticks start at pixel 0; any leftover interval sits at the far end.
    #[default]
    Start,
    /// The leftover interval sits at pixel 0 so the last tick lands on the axis end.
    End,
}

/// Tick placement strategy and its parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DistributionSpec {
    /// Constant pixel interval between ticks.
    Fixed { interval_px: f64 },
    /// Equal divisions, reduced until each one is at least `min_division_px` wide.
    Linear {
        target_divisions: u32,
        min_division_px: f64,
    },
    /// Divisions shrink by `growth_rate` per step, the smallest being `min_division_px`.
    Geometric {
        min_division_px: f64,
        growth_rate: f64,
    },
    /// Ticks at `log_base(i + 1)` scaled onto the axis.
    Logarithmic { base: f64, min_division_px: f64 },
}

impl Default for DistributionSpec {
    fn default() -> Self {
        Self::Fixed {
            interval_px: DEFAULT_FIXED_INTERVAL_PX,
        }
    }
}

impl DistributionSpec {
    #[must_use]
    pub fn linear() -> Self {
        Self::Linear {
            target_divisions: DEFAULT_LINEAR_DIVISIONS,
            min_division_px: DEFAULT_MIN_DIVISION_PX,
        }
    }

    #[must_use]
    pub fn geometric() -> Self {
        Self::Geometric {
            min_division_px: DEFAULT_MIN_DIVISION_PX,
            growth_rate: DEFAULT_GROWTH_RATE,
        }
    }

    #[must_use]
    pub fn logarithmic() -> Self {
        Self::Logarithmic {
            base: DEFAULT_LOG_BASE,
            min_division_px: DEFAULT_MIN_DIVISION_PX,
        }
    }

    /// Rejects parameters for which the division series diverges or is undefined.
    pub fn validate(self) -> ChartResult<Self> {
        match self {
            Self::Fixed { interval_px } => {
                require_positive(interval_px, "fixed interval")?;
            }
            Self::Linear {
                min_division_px, ..
            } => {
                require_positive(min_division_px, "linear min division")?;
            }
            Self::Geometric {
                min_division_px,
                growth_rate,
            } => {
                require_positive(min_division_px, "geometric min division")?;
                if !growth_rate.is_finite() || growth_rate <= 1.0 {
                    return Err(ChartError::InvalidParameter(
                        "geometric growth rate must be finite and > 1".to_owned(),
                    ));
                }
            }
            Self::Logarithmic {
                base,
                min_division_px,
            } => {
                require_positive(min_division_px, "logarithmic min division")?;
                if !base.is_finite() || base <= 1.0 {
                    return Err(ChartError::InvalidParameter(
                        "logarithmic base must be finite and > 1".to_owned(),
                    ));
                }
            }
        }
        Ok(self)
    }
}

/// Gridline/label position along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    pub pixel_position: f64,
    /// Present only when the ticks were mapped onto a value range.
    pub value: Option<f64>,
}

/// Validated distribution strategy bound to an axis alignment.
///
/// Pixel positions are always ascending and bounded in `[0, axis_length]`.
/// Value positions from [`AxisDistribution::range_distribute`] correspond
/// one-to-one with the pixel positions for the same axis length: value `i` is
/// what the top-down pixel to value mapping assigns to pixel `i`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisDistribution {
    spec: DistributionSpec,
    alignment: AxisAlignment,
}

impl AxisDistribution {
    pub fn new(spec: DistributionSpec, alignment: AxisAlignment) -> ChartResult<Self> {
        Ok(Self {
            spec: spec.validate()?,
            alignment,
        })
    }

    #[must_use]
    pub fn spec(self) -> DistributionSpec {
        self.spec
    }

    #[must_use]
    pub fn alignment(self) -> AxisAlignment {
        self.alignment
    }

    /// Number of divisions the strategy uses on an axis of the given length.
    #[must_use]
    pub fn division_count(self, axis_length_px: u32) -> usize {
        let axis = f64::from(axis_length_px);
        if axis_length_px == 0 {
            return 0;
        }
        match self.spec {
            DistributionSpec::Fixed { interval_px } => {
                let interval = effective_interval(axis, interval_px);
                ((axis / interval).floor() as usize).min(MAX_DIVISIONS)
            }
            DistributionSpec::Linear {
                target_divisions,
                min_division_px,
            } => linear_divisions(axis, target_divisions, min_division_px),
            DistributionSpec::Geometric {
                min_division_px,
                growth_rate,
            } => series_divisions(axis, min_division_px, growth_rate),
            DistributionSpec::Logarithmic {
                base,
                min_division_px,
            } => series_divisions(axis, min_division_px, base),
        }
    }

    /// Tick pixel positions along an axis of `axis_length_px` pixels.
    #[must_use]
    pub fn distribute(self, axis_length_px: u32) -> Vec<f64> {
        let axis = f64::from(axis_length_px);
        self.layout(axis_length_px, axis)
    }

    /// Tick values over `range`, ordinally matching [`AxisDistribution::distribute`].
    #[must_use]
    pub fn range_distribute(self, range: Range, axis_length_px: u32) -> Vec<f64> {
        self.layout(axis_length_px, range.width())
            .into_iter()
            .map(|offset| (range.upper() - offset).clamp(range.lower(), range.upper()))
            .collect()
    }

    /// Pixel ticks, paired with values when a range is given.
    #[must_use]
    pub fn ticks(self, axis_length_px: u32, range: Option<Range>) -> Vec<Tick> {
        let pixels = self.distribute(axis_length_px);
        match range {
            Some(range) => pixels
                .into_iter()
                .zip(self.range_distribute(range, axis_length_px))
                .map(|(pixel_position, value)| Tick {
                    pixel_position,
                    value: Some(value),
                })
                .collect(),
            None => pixels
                .into_iter()
                .map(|pixel_position| Tick {
                    pixel_position,
                    value: None,
                })
                .collect(),
        }
    }

    /// Lays ticks out on `[0, extent]`, with division counts and alignment
    /// resolved against the pixel axis length.
    fn layout(self, axis_length_px: u32, extent: f64) -> Vec<f64> {
        if axis_length_px == 0 {
            return Vec::new();
        }
        let axis = f64::from(axis_length_px);

        let positions = match self.spec {
            DistributionSpec::Fixed { interval_px } => {
                fixed_layout(axis, extent, interval_px, self.alignment)
            }
            DistributionSpec::Linear {
                target_divisions,
                min_division_px,
            } => linear_layout(
                extent,
                linear_divisions(axis, target_divisions, min_division_px),
            ),
            DistributionSpec::Geometric {
                min_division_px,
                growth_rate,
            } => geometric_layout(
                extent,
                series_divisions(axis, min_division_px, growth_rate),
                growth_rate,
            ),
            DistributionSpec::Logarithmic {
                base,
                min_division_px,
            } => logarithmic_layout(extent, series_divisions(axis, min_division_px, base), base),
        };

        match (self.spec, self.alignment) {
            (
                DistributionSpec::Geometric { .. } | DistributionSpec::Logarithmic { .. },
                AxisAlignment::End,
            ) => mirror(positions, extent),
            _ => positions,
        }
    }
}

fn fixed_layout(axis: f64, extent: f64, interval: f64, alignment: AxisAlignment) -> Vec<f64> {
    let interval = effective_interval(axis, interval);
    let start = match alignment {
        AxisAlignment::Start => 0.0,
        AxisAlignment::End => axis % interval,
    };
    let scale = extent / axis;
    let limit = axis + FIXED_END_TOLERANCE * axis.max(1.0);

    let mut positions = Vec::new();
    for step in 0..=MAX_DIVISIONS {
        let pixel = start + step as f64 * interval;
        if pixel > limit {
            break;
        }
        positions.push(pixel.min(axis) * scale);
    }
    positions
}

fn effective_interval(axis: f64, interval: f64) -> f64 {
    interval.max(axis / MAX_DIVISIONS as f64)
}

/// Largest division count up to the target whose divisions stay at least
/// `min_division_px` wide.
fn linear_divisions(axis: f64, target_divisions: u32, min_division_px: f64) -> usize {
    let fitting = (axis / min_division_px).floor().min(MAX_DIVISIONS as f64) as usize;
    let mut divisions = (target_divisions as usize).min(fitting);
    while divisions > 0 && axis / (divisions as f64) < min_division_px {
        divisions -= 1;
    }
    divisions
}

fn linear_layout(extent: f64, divisions: usize) -> Vec<f64> {
    if divisions == 0 {
        return vec![0.0, extent];
    }
    (0..=divisions)
        .map(|k| extent * k as f64 / divisions as f64)
        .collect()
}

/// Smallest `n` with `min * (rate^n - 1) / (rate - 1) >= axis`, within `1..=MAX_DIVISIONS`.
fn series_divisions(axis: f64, min_division_px: f64, rate: f64) -> usize {
    let n = ((axis * (rate - 1.0) / min_division_px) + 1.0).ln() / rate.ln();
    (n.ceil() as usize).clamp(1, MAX_DIVISIONS)
}

/// Division `j` from the start is `rate^-j` of the first one, scaled so the
/// divisions fill `extent`.
fn geometric_layout(extent: f64, divisions: usize, rate: f64) -> Vec<f64> {
    let weights: Vec<f64> = (0..divisions).map(|j| rate.powi(-(j as i32))).collect();
    let total: f64 = weights.iter().sum();

    let mut positions = Vec::with_capacity(divisions + 1);
    positions.push(0.0);
    let mut current = 0.0;
    for weight in weights {
        current += weight / total * extent;
        positions.push(current.min(extent));
    }
    positions
}

fn logarithmic_layout(extent: f64, divisions: usize, base: f64) -> Vec<f64> {
    let log_max = log_base(divisions as f64 + 1.0, base);
    (0..=divisions)
        .map(|i| (log_base(i as f64 + 1.0, base) / log_max) * extent)
        .filter(|position| *position <= extent)
        .collect()
}

fn log_base(value: f64, base: f64) -> f64 {
    value.ln() / base.ln()
}

fn mirror(positions: Vec<f64>, extent: f64) -> Vec<f64> {
    positions
        .into_iter()
        .rev()
        .map(|position| (extent - position).max(0.0))
        .collect()
}

fn require_positive(value: f64, name: &str) -> ChartResult<()> {
    if !value.is_finite() || value <= 0.0 {
        return Err(ChartError::InvalidParameter(format!(
            "{name} must be finite and > 0"
        )));
    }
    Ok(())
}
