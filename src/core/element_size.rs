use serde::{Deserialize, Serialize};

/// Element size presets used for horizontal zoom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum ElementSize {
    VerySmall,
    #[default]
    Small,
    Large,
    VeryLarge,
}

impl ElementSize {
    pub const ALL: [ElementSize; 4] = [
        ElementSize::VerySmall,
        ElementSize::Small,
        ElementSize::Large,
        ElementSize::VeryLarge,
    ];

    /// One-based preset index (`1..=4`).
    #[must_use]
    pub const fn index(self) -> u8 {
        match self {
            Self::VerySmall => 1,
            Self::Small => 2,
            Self::Large => 3,
            Self::VeryLarge => 4,
        }
    }

    #[must_use]
    pub const fn from_index(index: u8) -> Option<Self> {
        match index {
            1 => Some(Self::VerySmall),
            2 => Some(Self::Small),
            3 => Some(Self::Large),
            4 => Some(Self::VeryLarge),
            _ => None,
        }
    }

    /// Distance between the starts of consecutive elements.
    #[must_use]
    pub const fn spacing_px(self) -> f64 {
        match self {
            Self::VerySmall => 4.0,
            Self::Small => 8.0,
            Self::Large => 16.0,
            Self::VeryLarge => 32.0,
        }
    }

    #[must_use]
    pub const fn width_px(self) -> f64 {
        match self {
            Self::VerySmall => 3.0,
            Self::Small => 5.0,
            Self::Large => 11.0,
            Self::VeryLarge => 19.0,
        }
    }

    /// Next larger preset; saturates at `VeryLarge`.
    #[must_use]
    pub const fn zoomed_in(self) -> Self {
        match Self::from_index(self.index() + 1) {
            Some(size) => size,
            None => self,
        }
    }

    /// Next smaller preset; saturates at `VerySmall`.
    #[must_use]
    pub const fn zoomed_out(self) -> Self {
        match Self::from_index(self.index() - 1) {
            Some(size) => size,
            None => self,
        }
    }
}
