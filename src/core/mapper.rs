use serde::{Deserialize, Serialize};

use crate::core::{AxisAlignment, ElementSize, Range};
use crate::error::{ChartError, ChartResult};

/// Which point of a plotted element `index_to_pixel` returns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ElementAnchor {
    /// Element centered on its slot (candles, line vertices).
    #[default]
    Center,
    /// Element drawn from its leading edge (bars).
    Leading,
}

/// Pixel layout of one axis and the elements plotted along it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisGeometry {
    pub axis_length_px: u32,
    /// Distance between the starts of two consecutive elements.
    pub element_spacing_px: f64,
    pub element_width_px: f64,
    #[serde(default)]
    pub alignment: AxisAlignment,
    #[serde(default)]
    pub anchor: ElementAnchor,
}

impl AxisGeometry {
    pub fn new(
        axis_length_px: u32,
        element_spacing_px: f64,
        element_width_px: f64,
    ) -> ChartResult<Self> {
        Self {
            axis_length_px,
            element_spacing_px,
            element_width_px,
            alignment: AxisAlignment::default(),
            anchor: ElementAnchor::default(),
        }
        .validate()
    }

    /// Geometry using one of the element size presets.
    pub fn with_element_size(axis_length_px: u32, size: ElementSize) -> ChartResult<Self> {
        Self::new(axis_length_px, size.spacing_px(), size.width_px())
    }

    #[must_use]
    pub fn with_alignment(mut self, alignment: AxisAlignment) -> Self {
        self.alignment = alignment;
        self
    }

    #[must_use]
    pub fn with_anchor(mut self, anchor: ElementAnchor) -> Self {
        self.anchor = anchor;
        self
    }

    pub fn validate(self) -> ChartResult<Self> {
        if !self.element_spacing_px.is_finite() || self.element_spacing_px <= 0.0 {
            return Err(ChartError::InvalidParameter(
                "element spacing must be finite and > 0".to_owned(),
            ));
        }
        if !self.element_width_px.is_finite() || self.element_width_px < 0.0 {
            return Err(ChartError::InvalidParameter(
                "element width must be finite and >= 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Pixels subtracted from `index * spacing` to reach the anchored point.
    #[must_use]
    pub fn adjustment_px(self) -> f64 {
        match self.anchor {
            ElementAnchor::Center => 0.0,
            ElementAnchor::Leading => self.element_width_px / 2.0,
        }
    }

    /// Number of whole element slots that fit on the axis.
    #[must_use]
    pub fn visible_elements(self) -> usize {
        (f64::from(self.axis_length_px) / self.element_spacing_px).floor() as usize
    }
}

/// Bidirectional pixel/index and pixel/value transforms.
///
/// Value mapping is top-down: `range.upper` sits on pixel 0 and `range.lower`
/// on pixel `axis_height_px`, matching screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateMapper<'a> {
    geometry: &'a AxisGeometry,
}

impl<'a> CoordinateMapper<'a> {
    #[must_use]
    pub fn new(geometry: &'a AxisGeometry) -> Self {
        Self { geometry }
    }

    #[must_use]
    pub fn geometry(&self) -> &AxisGeometry {
        self.geometry
    }

    #[must_use]
    pub fn index_to_pixel(&self, index: usize) -> f64 {
        index as f64 * self.geometry.element_spacing_px - self.geometry.adjustment_px()
    }

    /// Index of the element slot closest to `pixel`.
    ///
    /// Left inverse of [`CoordinateMapper::index_to_pixel`]. The result may be
    /// negative or past the end of the data; see [`CoordinateMapper::element_at_pixel`].
    #[must_use]
    pub fn pixel_to_index(&self, pixel: f64) -> i64 {
        let spacing = self.geometry.element_spacing_px;
        ((pixel + self.geometry.adjustment_px() + spacing / 2.0) / spacing).floor() as i64
    }

    /// Cursor hit-test: element under `pixel` in a buffer of `len` elements.
    #[must_use]
    pub fn element_at_pixel(&self, pixel: f64, len: usize) -> Option<usize> {
        if !pixel.is_finite() {
            return None;
        }
        usize::try_from(self.pixel_to_index(pixel))
            .ok()
            .filter(|index| *index < len)
    }

    /// Maps `value` onto a top-down axis of `axis_height_px` pixels.
    ///
    /// A zero-width range maps every value to the axis midpoint.
    #[must_use]
    pub fn value_to_pixel(value: f64, range: Range, axis_height_px: f64) -> f64 {
        let width = range.width();
        if width == 0.0 || axis_height_px <= 0.0 {
            return axis_height_px / 2.0;
        }
        (range.upper() - value) / (width / axis_height_px)
    }

    /// Inverse of [`CoordinateMapper::value_to_pixel`].
    ///
    /// A zero-width range (or empty axis) maps every pixel to `range.upper`.
    #[must_use]
    pub fn pixel_to_value(pixel: f64, range: Range, axis_height_px: f64) -> f64 {
        let width = range.width();
        if width == 0.0 || axis_height_px <= 0.0 {
            return range.upper();
        }
        range.upper() - pixel * (width / axis_height_px)
    }
}
