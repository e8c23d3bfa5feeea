use serde::{Deserialize, Serialize};

use crate::core::{AxisAlignment, DistributionSpec, ElementAnchor, ElementSize, Viewport};
use crate::error::{ChartError, ChartResult};

const DEFAULT_VALUE_DECIMALS: u8 = 5;
const MAX_VALUE_DECIMALS: u8 = 15;

/// Numeric formatting policy for value-axis labels and cursor read-outs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValueFormat {
    pub decimals: u8,
}

impl Default for ValueFormat {
    fn default() -> Self {
        Self {
            decimals: DEFAULT_VALUE_DECIMALS,
        }
    }
}

impl ValueFormat {
    #[must_use]
    pub fn new(decimals: u8) -> Self {
        Self { decimals }
    }

    #[must_use]
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = usize::from(self.decimals))
    }
}

/// Public engine bootstrap configuration.
///
/// Serializable so host applications can persist and reload chart setup.
/// Axis alignments default to the classic trading layout: time ticks start
/// at the left edge, price ticks end exactly on the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EngineConfig {
    pub viewport: Viewport,
    #[serde(default)]
    pub element_size: ElementSize,
    #[serde(default)]
    pub element_anchor: ElementAnchor,
    #[serde(default)]
    pub time_distribution: DistributionSpec,
    #[serde(default = "default_time_alignment")]
    pub time_alignment: AxisAlignment,
    #[serde(default)]
    pub price_distribution: DistributionSpec,
    #[serde(default = "default_price_alignment")]
    pub price_alignment: AxisAlignment,
    #[serde(default)]
    pub value_format: ValueFormat,
}

impl EngineConfig {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            element_size: ElementSize::default(),
            element_anchor: ElementAnchor::default(),
            time_distribution: DistributionSpec::default(),
            time_alignment: default_time_alignment(),
            price_distribution: DistributionSpec::default(),
            price_alignment: default_price_alignment(),
            value_format: ValueFormat::default(),
        }
    }

    #[must_use]
    pub fn with_element_size(mut self, element_size: ElementSize) -> Self {
        self.element_size = element_size;
        self
    }

    #[must_use]
    pub fn with_element_anchor(mut self, anchor: ElementAnchor) -> Self {
        self.element_anchor = anchor;
        self
    }

    #[must_use]
    pub fn with_time_distribution(
        mut self,
        spec: DistributionSpec,
        alignment: AxisAlignment,
    ) -> Self {
        self.time_distribution = spec;
        self.time_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_price_distribution(
        mut self,
        spec: DistributionSpec,
        alignment: AxisAlignment,
    ) -> Self {
        self.price_distribution = spec;
        self.price_alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_value_format(mut self, value_format: ValueFormat) -> Self {
        self.value_format = value_format;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        self.viewport.validate()?;
        self.time_distribution.validate()?;
        self.price_distribution.validate()?;
        if self.value_format.decimals > MAX_VALUE_DECIMALS {
            return Err(ChartError::InvalidParameter(format!(
                "value format decimals must be <= {MAX_VALUE_DECIMALS}"
            )));
        }
        Ok(self)
    }

    pub fn from_json(json: &str) -> ChartResult<Self> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| ChartError::InvalidData(format!("failed to parse engine config: {e}")))?;
        config.validate()
    }

    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidData(format!("failed to serialize engine config: {e}")))
    }
}

fn default_time_alignment() -> AxisAlignment {
    AxisAlignment::Start
}

fn default_price_alignment() -> AxisAlignment {
    AxisAlignment::End
}
